//! Todo store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide insert / list-all / delete-by-id over the `todos` collection.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Ids are generated here, at insert time, never by callers.
//! - `delete_by_id` removes at most one row and does not report misses.
//! - Operations never retry; the first failure is returned as-is.

use crate::db::open_db;
use crate::error::{StoreError, StoreResult};
use crate::model::todo::{TodoId, TodoItem};
use log::{error, info};
use rusqlite::{params, Connection, Row};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

/// Store interface for the todo collection.
///
/// Implementations are shared across request handlers, so they take `&self`
/// and must be usable from several threads at once.
pub trait TodoRepository: Send + Sync {
    fn insert(&self, text: &str) -> StoreResult<TodoItem>;
    fn list_all(&self) -> StoreResult<Vec<TodoItem>>;
    fn delete_by_id(&self, id: &TodoId) -> StoreResult<()>;
}

/// SQLite-backed todo store holding one process-wide connection.
pub struct SqliteTodoRepository {
    conn: Option<Mutex<Connection>>,
}

impl SqliteTodoRepository {
    /// Wraps a connection that already has migrations applied.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Some(Mutex::new(conn)),
        }
    }

    /// Opens the database at `path` without gating the caller on success.
    ///
    /// A failed open is logged and yields a repository whose operations all
    /// return `StoreError::Unavailable`.
    pub fn connect(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match open_db(path) {
            Ok(conn) => {
                info!(
                    "event=store_connect module=repo status=ok path={}",
                    path.display()
                );
                Self::new(conn)
            }
            Err(err) => {
                error!(
                    "event=store_connect module=repo status=error path={} error={err}",
                    path.display()
                );
                Self::disconnected()
            }
        }
    }

    /// Creates a repository that has no backing connection.
    pub fn disconnected() -> Self {
        Self { conn: None }
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        let conn = self.conn.as_ref().ok_or(StoreError::Unavailable)?;
        conn.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl TodoRepository for SqliteTodoRepository {
    fn insert(&self, text: &str) -> StoreResult<TodoItem> {
        let item = TodoItem::new(Uuid::new_v4().to_string(), text);
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO todos (id, text) VALUES (?1, ?2);",
            params![item.id.as_str(), item.text.as_str()],
        )?;
        Ok(item)
    }

    fn list_all(&self) -> StoreResult<Vec<TodoItem>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT id, text FROM todos ORDER BY rowid ASC;")?;
        let mut rows = stmt.query([])?;
        let mut items = Vec::new();

        while let Some(row) = rows.next()? {
            items.push(parse_todo_row(row)?);
        }

        Ok(items)
    }

    fn delete_by_id(&self, id: &TodoId) -> StoreResult<()> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM todos WHERE id = ?1;", [id.as_str()])?;
        Ok(())
    }
}

fn parse_todo_row(row: &Row<'_>) -> StoreResult<TodoItem> {
    let id: String = row.get("id")?;
    if id.is_empty() {
        return Err(StoreError::InvalidData(
            "empty id value in todos.id".to_string(),
        ));
    }
    Ok(TodoItem::new(id, row.get::<_, String>("text")?))
}
