//! Domain model for the todo collection.
//!
//! # Invariants
//! - Every todo is identified by a store-assigned `TodoId`.
//! - Todos are immutable once created; deletion is a hard delete.

pub mod todo;
