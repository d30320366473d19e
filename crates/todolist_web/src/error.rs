//! Failure type for HTTP handlers.
//!
//! Handlers return `RouteError` when the underlying operation fails. The
//! response carries only a status code. Store failures were already logged
//! by the service; only task failures are logged here.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use std::error::Error;
use std::fmt::{Display, Formatter};
use todolist_core::StoreError;
use tokio::task::JoinError;

#[derive(Debug)]
pub enum RouteError {
    /// The store rejected or could not run the operation.
    Store(StoreError),
    /// The blocking task running the operation panicked or was cancelled.
    Task(JoinError),
}

impl RouteError {
    /// Logs failures that no lower layer has reported.
    pub fn log(&self) {
        if let Self::Task(err) = self {
            error!(
                "event=http_error module=web status=error error_code=task_join_failed error={err}"
            );
        }
    }
}

impl Display for RouteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Task(err) => write!(f, "store task failed: {err}"),
        }
    }
}

impl Error for RouteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Task(err) => Some(err),
        }
    }
}

impl From<StoreError> for RouteError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<JoinError> for RouteError {
    fn from(value: JoinError) -> Self {
        Self::Task(value)
    }
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        self.log();
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::RouteError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use todolist_core::StoreError;

    #[test]
    fn store_failure_maps_to_bare_500() {
        let response = RouteError::from(StoreError::Unavailable).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn display_passes_store_message_through() {
        let err = RouteError::Store(StoreError::Poisoned);
        assert_eq!(err.to_string(), "todo store connection lock is poisoned");
    }
}
