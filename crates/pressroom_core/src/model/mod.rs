//! Data-model types for authors, articles and magazines.
//!
//! # Responsibility
//! - Hold entity attributes verbatim; no validation beyond parameter binding.
//! - Execute each query through a caller-supplied `Cursor`.
//!
//! # Invariants
//! - Every query method performs exactly one `execute` and at most one
//!   `fetch_all`.
//! - Entities never reference each other in code; relations live in SQL joins.

use crate::cursor::CursorError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod article;
pub mod author;
pub mod magazine;
pub mod row;

use row::DecodeError;

pub type ModelResult<T> = Result<T, ModelError>;

/// Error for model-level create and fetch operations.
#[derive(Debug)]
pub enum ModelError {
    /// Cursor or database failure, passed through unchanged.
    Cursor(CursorError),
    /// A fetched row did not match the entity's column layout.
    Decode(DecodeError),
    /// An insert completed but the cursor reported no row id.
    MissingRowId { table: &'static str },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cursor(err) => write!(f, "{err}"),
            Self::Decode(err) => write!(f, "{err}"),
            Self::MissingRowId { table } => {
                write!(f, "insert into `{table}` did not report a row id")
            }
        }
    }
}

impl Error for ModelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cursor(err) => Some(err),
            Self::Decode(err) => Some(err),
            Self::MissingRowId { .. } => None,
        }
    }
}

impl From<CursorError> for ModelError {
    fn from(value: CursorError) -> Self {
        Self::Cursor(value)
    }
}

impl From<DecodeError> for ModelError {
    fn from(value: DecodeError) -> Self {
        Self::Decode(value)
    }
}
