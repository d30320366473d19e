//! Core domain logic for the todo list.
//! This crate owns the todo model, its store and the use-case service.

pub mod db;
pub mod error;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use error::{StoreError, StoreResult};
pub use logging::{default_log_level, init_logging};
pub use model::todo::{TodoId, TodoItem};
pub use repo::todo_repo::{SqliteTodoRepository, TodoRepository};
pub use service::todo_service::{format_long_date, TodoPage, TodoService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
