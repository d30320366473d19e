//! HTTP surface of the todo list.
//!
//! # Responsibility
//! - Map the six public endpoints onto `TodoService` operations.
//! - Render HTML pages and serve static assets.
//!
//! # Invariants
//! - Handlers never block the async runtime on store I/O.
//! - Store failures are logged; clients never see error details.

pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod render;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use std::path::Path;
use std::sync::Arc;
use todolist_core::{TodoRepository, TodoService};
use tower_http::services::ServeDir;

pub use config::{ConfigError, ServerConfig};
pub use error::RouteError;
pub use extractors::BodyFields;
pub use state::AppState;

/// Builds the application router around a shared service.
///
/// Paths without a route are looked up in `static_dir`.
pub fn router<R>(service: Arc<TodoService<R>>, static_dir: impl AsRef<Path>) -> Router
where
    R: TodoRepository + 'static,
{
    Router::new()
        .route("/", get(routes::index::<R>))
        .route("/index", get(routes::index_redirect))
        .route("/add", post(routes::add::<R>))
        .route("/delete", post(routes::delete::<R>))
        .route("/about", get(routes::about))
        .route("/instructions", get(routes::instructions))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .with_state(AppState::new(service))
}
