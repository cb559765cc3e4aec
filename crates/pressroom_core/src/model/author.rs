//! Author model and its queries.
//!
//! # Invariants
//! - `id` is unique once persisted; `name` is stored without validation.
//! - `get_all_authors` maps rows to `Author`, while `articles` and
//!   `magazines` return raw row tuples. Callers decode those with
//!   `Article::from_row` / `Magazine::from_row` when they need typed values.

use super::row::{expect_columns, integer_at, text_at, DecodeError};
use super::{ModelError, ModelResult};
use crate::cursor::{Cursor, RowTuple};
use rusqlite::types::Value;
use serde::{Deserialize, Serialize};

const ENTITY: &str = "author";
const COLUMN_COUNT: usize = 2;

pub const INSERT_AUTHOR_SQL: &str = "INSERT INTO authors (name) VALUES (?)";
pub const SELECT_ALL_AUTHORS_SQL: &str = "SELECT * FROM authors";
pub const SELECT_AUTHOR_ARTICLES_SQL: &str = "SELECT * FROM articles WHERE author_id = ?";
pub const SELECT_AUTHOR_MAGAZINES_SQL: &str = "SELECT DISTINCT magazines.* FROM magazines JOIN articles ON magazines.id = articles.magazine_id WHERE articles.author_id = ?";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub name: String,
}

impl Author {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Inserts a new author row and returns it with the assigned id.
    pub fn create<C: Cursor + ?Sized>(
        cursor: &mut C,
        name: impl Into<String>,
    ) -> ModelResult<Self> {
        let name = name.into();
        cursor.execute(INSERT_AUTHOR_SQL, &[Value::Text(name.clone())])?;
        let id = cursor
            .last_row_id()
            .ok_or(ModelError::MissingRowId { table: "authors" })?;
        Ok(Self { id, name })
    }

    /// Fetches every author in engine order (no `ORDER BY`).
    pub fn get_all_authors<C: Cursor + ?Sized>(cursor: &mut C) -> ModelResult<Vec<Self>> {
        cursor.execute(SELECT_ALL_AUTHORS_SQL, &[])?;
        let rows = cursor.fetch_all()?;

        let mut authors = Vec::with_capacity(rows.len());
        for row in &rows {
            authors.push(Self::from_row(row)?);
        }
        Ok(authors)
    }

    /// Returns this author's article rows verbatim.
    pub fn articles<C: Cursor + ?Sized>(&self, cursor: &mut C) -> ModelResult<Vec<RowTuple>> {
        cursor.execute(SELECT_AUTHOR_ARTICLES_SQL, &[Value::Integer(self.id)])?;
        Ok(cursor.fetch_all()?)
    }

    /// Returns distinct magazine rows this author has published in, verbatim.
    pub fn magazines<C: Cursor + ?Sized>(&self, cursor: &mut C) -> ModelResult<Vec<RowTuple>> {
        cursor.execute(SELECT_AUTHOR_MAGAZINES_SQL, &[Value::Integer(self.id)])?;
        Ok(cursor.fetch_all()?)
    }

    /// Decodes an `(id, name)` row.
    pub fn from_row(row: &[Value]) -> Result<Self, DecodeError> {
        expect_columns(row, ENTITY, COLUMN_COUNT)?;
        Ok(Self {
            id: integer_at(row, 0, ENTITY, "id")?,
            name: text_at(row, 1, ENTITY, "name")?,
        })
    }
}
