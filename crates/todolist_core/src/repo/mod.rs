//! Store adapter for the todo collection.
//!
//! # Responsibility
//! - Define the insert / list / delete contract used by the service layer.
//! - Isolate SQLite query details from use-case orchestration.
//!
//! # Invariants
//! - Every persistence problem is reported as `StoreError`; no retries.

pub mod todo_repo;
