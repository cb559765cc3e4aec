#![allow(dead_code)]

use pressroom_core::{Cursor, CursorResult, RowTuple, Value};

/// In-memory cursor that records every `execute` and replays scripted rows.
#[derive(Debug, Default)]
pub struct RecordingCursor {
    pub calls: Vec<(String, Vec<Value>)>,
    pub fetches: usize,
    rows: Vec<RowTuple>,
    last_row_id: Option<i64>,
}

impl RecordingCursor {
    pub fn with_rows(rows: Vec<RowTuple>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn with_last_row_id(id: i64) -> Self {
        Self {
            last_row_id: Some(id),
            ..Self::default()
        }
    }

    pub fn single_call(&self) -> (&str, &[Value]) {
        assert_eq!(self.calls.len(), 1, "expected exactly one execute call");
        let (sql, params) = &self.calls[0];
        (sql.as_str(), params.as_slice())
    }
}

impl Cursor for RecordingCursor {
    fn execute(&mut self, sql: &str, params: &[Value]) -> CursorResult<()> {
        self.calls.push((sql.to_string(), params.to_vec()));
        Ok(())
    }

    fn fetch_all(&mut self) -> CursorResult<Vec<RowTuple>> {
        self.fetches += 1;
        Ok(self.rows.clone())
    }

    fn last_row_id(&self) -> Option<i64> {
        self.last_row_id
    }
}

pub fn text(value: &str) -> Value {
    Value::Text(value.to_string())
}
