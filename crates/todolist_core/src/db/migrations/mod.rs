//! Schema steps for the `todos` table.
//!
//! Step `n` of `SCHEMA` (counting from 1) brings a database to
//! `user_version = n`. Steps are appended, never edited.

use crate::error::{StoreError, StoreResult};
use rusqlite::Connection;
use std::cmp::Ordering;

const SCHEMA: &[&str] = &[include_str!("0001_init.sql")];

/// Schema version this build writes.
pub fn latest_version() -> u32 {
    SCHEMA.len() as u32
}

/// Brings `conn` up to `latest_version()` inside one transaction.
///
/// A database stamped with a higher version is left untouched and reported
/// as `StoreError::SchemaTooNew`.
pub fn apply_migrations(conn: &mut Connection) -> StoreResult<()> {
    let found: u32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    let supported = latest_version();
    match found.cmp(&supported) {
        Ordering::Greater => return Err(StoreError::SchemaTooNew { found, supported }),
        Ordering::Equal => return Ok(()),
        Ordering::Less => {}
    }

    let tx = conn.transaction()?;
    for (version, step) in (1u32..).zip(SCHEMA).skip(found as usize) {
        tx.execute_batch(step)?;
        tx.pragma_update(None, "user_version", version)?;
    }
    tx.commit()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{apply_migrations, latest_version};
    use crate::error::StoreError;
    use rusqlite::Connection;

    fn user_version(conn: &Connection) -> u32 {
        conn.pragma_query_value(None, "user_version", |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn fresh_database_reaches_latest_version() {
        let mut conn = Connection::open_in_memory().unwrap();
        assert_eq!(user_version(&conn), 0);

        apply_migrations(&mut conn).unwrap();
        assert_eq!(user_version(&conn), latest_version());

        apply_migrations(&mut conn).unwrap();
        assert_eq!(user_version(&conn), latest_version());
    }

    #[test]
    fn newer_database_is_left_untouched() {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.pragma_update(None, "user_version", latest_version() + 1)
            .unwrap();

        let err = apply_migrations(&mut conn).unwrap_err();
        assert!(matches!(
            err,
            StoreError::SchemaTooNew { found, supported }
                if found == latest_version() + 1 && supported == latest_version()
        ));
        let tables: i64 = conn
            .query_row("SELECT COUNT(*) FROM sqlite_master WHERE name = 'todos';", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(tables, 0);
    }
}
