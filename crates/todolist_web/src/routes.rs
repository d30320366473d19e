//! HTTP handlers for the todo list.
//!
//! # Responsibility
//! - Extract body fields and forward them unchanged to `TodoService`.
//! - Turn results into pages or redirects.
//!
//! # Invariants
//! - Store calls run on the blocking pool, never on a runtime worker.
//! - Bodies are never rejected; missing fields read as `""`.
//! - `/add` redirects whatever the outcome; `/delete` redirects only on
//!   success.
//! - Store failures are logged by the service, not again here.

use crate::error::RouteError;
use crate::extractors::BodyFields;
use crate::render;
use crate::state::AppState;
use axum::extract::State;
use axum::response::{Html, Redirect};
use todolist_core::{StoreResult, TodoId, TodoRepository};

const TODO_FIELD: &str = "todo";
const DELETE_ID_FIELD: &str = "checkbox_id";

/// `GET /`: renders every todo with today's date.
pub async fn index<R>(State(state): State<AppState<R>>) -> Result<Html<String>, RouteError>
where
    R: TodoRepository + 'static,
{
    let service = state.service();
    let page = run_blocking(move || service.list()).await?;
    Ok(Html(render::index_page(&page)))
}

/// `GET /index`: alias for the list page.
pub async fn index_redirect() -> Redirect {
    Redirect::to("/")
}

/// `POST /add`: stores the submitted text, then returns to the list.
pub async fn add<R>(State(state): State<AppState<R>>, fields: BodyFields) -> Redirect
where
    R: TodoRepository + 'static,
{
    let service = state.service();
    let text = fields.field(TODO_FIELD).to_owned();
    if let Err(err) = run_blocking(move || service.add(&text)).await {
        err.log();
    }
    Redirect::to("/")
}

/// `POST /delete`: removes the todo named by `checkbox_id`.
///
/// Unknown ids still redirect; only a failing store yields a 500.
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    fields: BodyFields,
) -> Result<Redirect, RouteError>
where
    R: TodoRepository + 'static,
{
    let service = state.service();
    let id = TodoId::from(fields.field(DELETE_ID_FIELD));
    run_blocking(move || service.remove(&id)).await?;
    Ok(Redirect::to("/"))
}

pub async fn about() -> Html<String> {
    Html(render::about_page())
}

pub async fn instructions() -> Html<String> {
    Html(render::instructions_page())
}

async fn run_blocking<T, F>(op: F) -> Result<T, RouteError>
where
    F: FnOnce() -> StoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(op).await??)
}
