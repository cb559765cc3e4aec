//! Author, article and magazine models over caller-supplied SQL cursors.

pub mod cursor;
pub mod db;
pub mod logging;
pub mod model;

pub use cursor::{Cursor, CursorError, CursorResult, RowTuple, SqliteCursor};
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::article::Article;
pub use model::author::Author;
pub use model::magazine::Magazine;
pub use model::row::DecodeError;
pub use model::{ModelError, ModelResult};
pub use rusqlite::types::Value;
