//! The single failure type of the todo store.
//!
//! Every problem below the service layer, from opening the file to reading a
//! row, is a `StoreError`. Callers handle all variants alike; the split only
//! makes logs readable.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    /// The database file was written by a newer build.
    SchemaTooNew { found: u32, supported: u32 },
    /// The store could not be opened at startup.
    Unavailable,
    /// A thread panicked while holding the connection.
    Poisoned,
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "store schema version {found} is newer than supported {supported}"
            ),
            Self::Unavailable => write!(f, "todo store is not connected"),
            Self::Poisoned => write!(f, "todo store connection lock is poisoned"),
            Self::InvalidData(message) => write!(f, "invalid persisted todo data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
