//! SQLite file handling for the todo store.
//!
//! Opening a connection always runs the schema steps first, so callers only
//! ever see a `todos` table at the current version. Failures surface as
//! `StoreError`.

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};
