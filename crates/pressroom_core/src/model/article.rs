//! Article model.
//!
//! `author_id` and `magazine_id` are expected to reference existing rows;
//! the model does not check them, the SQLite schema does.

use super::row::{expect_columns, integer_at, text_at, DecodeError};
use super::{ModelError, ModelResult};
use crate::cursor::Cursor;
use rusqlite::types::Value;
use serde::{Deserialize, Serialize};

const ENTITY: &str = "article";
const COLUMN_COUNT: usize = 5;

pub const INSERT_ARTICLE_SQL: &str =
    "INSERT INTO articles (title, content, author_id, magazine_id) VALUES (?, ?, ?, ?)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub magazine_id: i64,
}

impl Article {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: i64,
        magazine_id: i64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            author_id,
            magazine_id,
        }
    }

    /// Inserts a new article row and returns it with the assigned id.
    pub fn create<C: Cursor + ?Sized>(
        cursor: &mut C,
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: i64,
        magazine_id: i64,
    ) -> ModelResult<Self> {
        let title = title.into();
        let content = content.into();
        cursor.execute(
            INSERT_ARTICLE_SQL,
            &[
                Value::Text(title.clone()),
                Value::Text(content.clone()),
                Value::Integer(author_id),
                Value::Integer(magazine_id),
            ],
        )?;
        let id = cursor
            .last_row_id()
            .ok_or(ModelError::MissingRowId { table: "articles" })?;

        Ok(Self {
            id,
            title,
            content,
            author_id,
            magazine_id,
        })
    }

    /// Decodes an `(id, title, content, author_id, magazine_id)` row.
    pub fn from_row(row: &[Value]) -> Result<Self, DecodeError> {
        expect_columns(row, ENTITY, COLUMN_COUNT)?;
        Ok(Self {
            id: integer_at(row, 0, ENTITY, "id")?,
            title: text_at(row, 1, ENTITY, "title")?,
            content: text_at(row, 2, ENTITY, "content")?,
            author_id: integer_at(row, 3, ENTITY, "author_id")?,
            magazine_id: integer_at(row, 4, ENTITY, "magazine_id")?,
        })
    }
}
