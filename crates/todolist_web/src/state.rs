//! Shared state handed to every handler.

use std::sync::Arc;
use todolist_core::{TodoRepository, TodoService};

/// Process-wide handle on the todo service and the store inside it.
pub struct AppState<R: TodoRepository> {
    service: Arc<TodoService<R>>,
}

impl<R: TodoRepository> AppState<R> {
    pub fn new(service: Arc<TodoService<R>>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> Arc<TodoService<R>> {
        Arc::clone(&self.service)
    }
}

// Manual impl: deriving would require `R: Clone`.
impl<R: TodoRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}
