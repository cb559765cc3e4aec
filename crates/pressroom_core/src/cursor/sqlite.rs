//! SQLite-backed cursor.
//!
//! # Invariants
//! - Row-producing statements are fully buffered during `execute`.
//! - Only single statements are accepted; `prepare` would silently drop a tail.
//! - Logging is metadata-only: no SQL text values or bound parameters.

use super::{Cursor, CursorError, CursorResult, RowTuple};
use log::{debug, error};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection};
use std::time::Instant;

/// Cursor over a borrowed SQLite connection.
pub struct SqliteCursor<'conn> {
    conn: &'conn Connection,
    pending: Vec<RowTuple>,
    last_row_id: Option<i64>,
}

impl<'conn> SqliteCursor<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            pending: Vec::new(),
            last_row_id: None,
        }
    }

    fn run(&mut self, sql: &str, params: &[Value]) -> CursorResult<usize> {
        if has_trailing_statement(sql) {
            return Err(CursorError::MultipleStatements);
        }

        let conn = self.conn;
        let mut stmt = conn.prepare(sql)?;
        let column_count = stmt.column_count();

        if column_count == 0 {
            let changed = stmt.execute(params_from_iter(params.iter()))?;
            self.last_row_id = Some(conn.last_insert_rowid());
            return Ok(changed);
        }

        let mut rows = stmt.query(params_from_iter(params.iter()))?;
        let mut buffered = Vec::new();
        while let Some(row) = rows.next()? {
            let mut tuple = Vec::with_capacity(column_count);
            for index in 0..column_count {
                tuple.push(row.get::<_, Value>(index)?);
            }
            buffered.push(tuple);
        }

        let count = buffered.len();
        self.pending = buffered;
        Ok(count)
    }
}

impl Cursor for SqliteCursor<'_> {
    fn execute(&mut self, sql: &str, params: &[Value]) -> CursorResult<()> {
        let started_at = Instant::now();
        let kind = statement_kind(sql);
        self.pending.clear();

        match self.run(sql, params) {
            Ok(rows) => {
                debug!(
                    "event=cursor_execute module=cursor status=ok kind={} params={} rows={} duration_ms={}",
                    kind,
                    params.len(),
                    rows,
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=cursor_execute module=cursor status=error kind={} params={} duration_ms={} error={}",
                    kind,
                    params.len(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    fn fetch_all(&mut self) -> CursorResult<Vec<RowTuple>> {
        Ok(std::mem::take(&mut self.pending))
    }

    fn last_row_id(&self) -> Option<i64> {
        self.last_row_id
    }
}

fn statement_kind(sql: &str) -> String {
    sql.split_whitespace()
        .next()
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| "empty".to_string())
}

/// Returns true when non-blank SQL follows a `;` outside quotes or comments.
fn has_trailing_statement(sql: &str) -> bool {
    let mut chars = sql.chars().peekable();
    let mut terminated = false;

    while let Some(ch) = chars.next() {
        match ch {
            '\'' | '"' | '`' | '[' => {
                if terminated {
                    return true;
                }
                let close = if ch == '[' { ']' } else { ch };
                for inner in chars.by_ref() {
                    if inner == close {
                        break;
                    }
                }
            }
            '-' if chars.peek() == Some(&'-') => {
                for inner in chars.by_ref() {
                    if inner == '\n' {
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut previous = '\0';
                for inner in chars.by_ref() {
                    if previous == '*' && inner == '/' {
                        break;
                    }
                    previous = inner;
                }
            }
            ';' => terminated = true,
            other if other.is_whitespace() => {}
            _ => {
                if terminated {
                    return true;
                }
            }
        }
    }

    false
}
