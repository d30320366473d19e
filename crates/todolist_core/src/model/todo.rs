//! Todo domain model.
//!
//! # Responsibility
//! - Define the single persisted record of the todo collection.
//! - Keep the identifier opaque so callers never depend on its encoding.
//!
//! # Invariants
//! - `id` is assigned by the store at insert time and never reused.
//! - `text` is stored verbatim; empty text is valid.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Opaque, store-generated identifier of a todo.
///
/// Any string is accepted at the service boundary. Ids that do not match a
/// stored todo are valid inputs and simply match nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TodoId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TodoId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TodoId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// A single entry of the todo list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
}

impl TodoItem {
    pub fn new(id: impl Into<TodoId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}
