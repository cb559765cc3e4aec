//! Positional row decoding helpers.
//!
//! Each entity maps a fixed-position tuple to named fields through these
//! helpers, so a shape mismatch surfaces as `DecodeError` instead of a panic.

use rusqlite::types::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    ColumnCount {
        entity: &'static str,
        expected: usize,
        actual: usize,
    },
    ColumnType {
        entity: &'static str,
        column: &'static str,
        expected: &'static str,
        actual: &'static str,
    },
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ColumnCount {
                entity,
                expected,
                actual,
            } => write!(f, "{entity} row has {actual} columns, expected {expected}"),
            Self::ColumnType {
                entity,
                column,
                expected,
                actual,
            } => write!(f, "{entity}.{column} holds {actual}, expected {expected}"),
        }
    }
}

impl Error for DecodeError {}

/// Rejects rows whose column count differs from `expected`.
pub fn expect_columns(
    row: &[Value],
    entity: &'static str,
    expected: usize,
) -> Result<(), DecodeError> {
    if row.len() != expected {
        return Err(DecodeError::ColumnCount {
            entity,
            expected,
            actual: row.len(),
        });
    }
    Ok(())
}

pub fn integer_at(
    row: &[Value],
    index: usize,
    entity: &'static str,
    column: &'static str,
) -> Result<i64, DecodeError> {
    match column_at(row, index, entity)? {
        Value::Integer(value) => Ok(*value),
        other => Err(DecodeError::ColumnType {
            entity,
            column,
            expected: "integer",
            actual: value_type_name(other),
        }),
    }
}

pub fn text_at(
    row: &[Value],
    index: usize,
    entity: &'static str,
    column: &'static str,
) -> Result<String, DecodeError> {
    match column_at(row, index, entity)? {
        Value::Text(value) => Ok(value.clone()),
        other => Err(DecodeError::ColumnType {
            entity,
            column,
            expected: "text",
            actual: value_type_name(other),
        }),
    }
}

fn column_at<'row>(
    row: &'row [Value],
    index: usize,
    entity: &'static str,
) -> Result<&'row Value, DecodeError> {
    row.get(index).ok_or(DecodeError::ColumnCount {
        entity,
        expected: index + 1,
        actual: row.len(),
    })
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Integer(_) => "integer",
        Value::Real(_) => "real",
        Value::Text(_) => "text",
        Value::Blob(_) => "blob",
    }
}

#[cfg(test)]
mod tests {
    use super::{expect_columns, integer_at, text_at, DecodeError};
    use rusqlite::types::Value;

    #[test]
    fn expect_columns_reports_actual_width() {
        let row = vec![Value::Integer(1)];
        let err = expect_columns(&row, "author", 2).unwrap_err();
        assert_eq!(
            err,
            DecodeError::ColumnCount {
                entity: "author",
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn typed_accessors_read_matching_values() {
        let row = vec![Value::Integer(7), Value::Text("Tech".to_string())];
        assert_eq!(integer_at(&row, 0, "magazine", "id").unwrap(), 7);
        assert_eq!(text_at(&row, 1, "magazine", "name").unwrap(), "Tech");
    }

    #[test]
    fn typed_accessors_name_mismatched_column() {
        let row = vec![Value::Null, Value::Real(1.5)];

        let err = integer_at(&row, 0, "article", "author_id").unwrap_err();
        assert_eq!(err.to_string(), "article.author_id holds null, expected integer");

        let err = text_at(&row, 1, "article", "title").unwrap_err();
        assert_eq!(
            err,
            DecodeError::ColumnType {
                entity: "article",
                column: "title",
                expected: "text",
                actual: "real",
            }
        );
    }

    #[test]
    fn out_of_range_index_is_a_count_error() {
        let row: Vec<Value> = Vec::new();
        let err = text_at(&row, 2, "author", "name").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::ColumnCount {
                expected: 3,
                actual: 0,
                ..
            }
        ));
    }
}
