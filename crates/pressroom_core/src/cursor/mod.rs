//! Minimal cursor contract consumed by the model layer.
//!
//! # Responsibility
//! - Define the `execute` + `fetch_all` seam every query method goes through.
//! - Provide the SQLite-backed cursor used outside of tests.
//!
//! # Invariants
//! - A cursor never owns the connection lifecycle; callers open and close it.
//! - Rows are returned as positional tuples, before any model mapping.

use rusqlite::types::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod sqlite;

pub use sqlite::SqliteCursor;

/// One fetched row: ordered, fixed-position column values.
pub type RowTuple = Vec<Value>;

pub type CursorResult<T> = Result<T, CursorError>;

/// Error raised by a cursor implementation.
#[derive(Debug)]
pub enum CursorError {
    Sqlite(rusqlite::Error),
    /// `execute` received more than one statement; nothing was run.
    MultipleStatements,
}

impl Display for CursorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::MultipleStatements => write!(f, "execute accepts exactly one SQL statement"),
        }
    }
}

impl Error for CursorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::MultipleStatements => None,
        }
    }
}

impl From<rusqlite::Error> for CursorError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Database cursor supplied by the caller to every query method.
///
/// # Contract
/// - `execute` runs one statement with positional `?` parameters. Input
///   carrying a second statement after `;` is rejected with
///   `CursorError::MultipleStatements`.
/// - `fetch_all` returns the rows produced by the last `execute`, in engine
///   order, and leaves nothing pending afterwards.
/// - `last_row_id` reports the rowid of the most recent successful insert.
pub trait Cursor {
    fn execute(&mut self, sql: &str, params: &[Value]) -> CursorResult<()>;
    fn fetch_all(&mut self) -> CursorResult<Vec<RowTuple>>;
    fn last_row_id(&self) -> Option<i64>;
}
