//! Todo use-case service.
//!
//! # Responsibility
//! - Provide the list / add / remove entry points used by transport layers.
//! - Compute the display date shown next to the list.
//!
//! # Invariants
//! - Inputs are forwarded verbatim; no trimming, no validation.
//! - Removing an unknown id is a successful no-op.
//! - Todo text never appears in log output.

use crate::error::StoreResult;
use crate::model::todo::{TodoId, TodoItem};
use crate::repo::todo_repo::TodoRepository;
use chrono::{Local, NaiveDate};
use log::{error, info};
use std::time::Instant;

/// Everything the index page needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoPage {
    /// Items in store retrieval order.
    pub items: Vec<TodoItem>,
    /// Long-form date, e.g. `Monday, January 1, 2024`.
    pub today: String,
}

/// Use-case service wrapper around a todo store.
pub struct TodoService<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Lists every todo together with today's local date.
    ///
    /// An empty store yields an empty `items` vector, not an error.
    pub fn list(&self) -> StoreResult<TodoPage> {
        let started_at = Instant::now();
        let result = self.repo.list_all();
        match &result {
            Ok(items) => info!(
                "event=todo_list module=service status=ok count={} duration_ms={}",
                items.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=todo_list module=service status=error duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            ),
        }

        Ok(TodoPage {
            items: result?,
            today: format_long_date(Local::now().date_naive()),
        })
    }

    /// Stores `text` as a new todo and returns it with its assigned id.
    pub fn add(&self, text: &str) -> StoreResult<TodoItem> {
        let started_at = Instant::now();
        let result = self.repo.insert(text);
        match &result {
            Ok(item) => info!(
                "event=todo_add module=service status=ok id={} text_len={} duration_ms={}",
                item.id,
                text.chars().count(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=todo_add module=service status=error duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            ),
        }
        result
    }

    /// Deletes the todo with `id`, if any.
    pub fn remove(&self, id: &TodoId) -> StoreResult<()> {
        let started_at = Instant::now();
        let result = self.repo.delete_by_id(id);
        match &result {
            Ok(()) => info!(
                "event=todo_remove module=service status=ok id={id} duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=todo_remove module=service status=error id={id} duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            ),
        }
        result
    }
}

/// Formats a date as weekday, month, day and year in US English.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
