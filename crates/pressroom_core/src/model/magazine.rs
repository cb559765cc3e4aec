//! Magazine model.

use super::row::{expect_columns, integer_at, text_at, DecodeError};
use super::{ModelError, ModelResult};
use crate::cursor::Cursor;
use rusqlite::types::Value;
use serde::{Deserialize, Serialize};

const ENTITY: &str = "magazine";
const COLUMN_COUNT: usize = 3;

pub const INSERT_MAGAZINE_SQL: &str = "INSERT INTO magazines (name, category) VALUES (?, ?)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Magazine {
    pub id: i64,
    pub name: String,
    pub category: String,
}

impl Magazine {
    pub fn new(id: i64, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
        }
    }

    /// Inserts a new magazine row and returns it with the assigned id.
    pub fn create<C: Cursor + ?Sized>(
        cursor: &mut C,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> ModelResult<Self> {
        let name = name.into();
        let category = category.into();
        cursor.execute(
            INSERT_MAGAZINE_SQL,
            &[Value::Text(name.clone()), Value::Text(category.clone())],
        )?;
        let id = cursor
            .last_row_id()
            .ok_or(ModelError::MissingRowId { table: "magazines" })?;

        Ok(Self { id, name, category })
    }

    /// Decodes an `(id, name, category)` row.
    pub fn from_row(row: &[Value]) -> Result<Self, DecodeError> {
        expect_columns(row, ENTITY, COLUMN_COUNT)?;
        Ok(Self {
            id: integer_at(row, 0, ENTITY, "id")?,
            name: text_at(row, 1, ENTITY, "name")?,
            category: text_at(row, 2, ENTITY, "category")?,
        })
    }
}
