//! In-memory driver connection for integration tests.

#![allow(dead_code)]

use hive_env_rs::{Cursor, DbConnection, Error, HiveValue, Result, Row};

/// Scripted outcome of the next query.
#[derive(Debug, Default)]
pub struct MockConnection {
    /// Rows served to every opened cursor.
    pub rows: Vec<Row>,
    /// Fail opening the cursor.
    pub fail_open: bool,
    /// Fail fetching the row at this index.
    pub fail_at: Option<usize>,
    /// Fail closing the cursor.
    pub fail_close: bool,
    /// Queries issued, in order.
    pub queries: Vec<String>,
    /// Number of cursors opened.
    pub opened: usize,
    /// Number of cursors closed.
    pub closed: usize,
}

impl MockConnection {
    /// Connection answering `describe` with `(column, type)` rows.
    pub fn with_describe(rows: &[(Option<&str>, Option<&str>)]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|(name, data_type)| {
                    Row::new(vec![
                        HiveValue::from(*name),
                        HiveValue::from(*data_type),
                        HiveValue::from(""),
                    ])
                })
                .collect(),
            ..Self::default()
        }
    }

    /// Cursors opened but never closed.
    pub fn leaked(&self) -> usize {
        self.opened - self.closed
    }
}

pub struct MockCursor<'c> {
    conn: &'c mut MockConnection,
    pos: usize,
    closed: bool,
}

impl Cursor for MockCursor<'_> {
    type Item = Row;

    async fn close(&mut self) -> Result<()> {
        if !self.closed {
            self.closed = true;
            self.conn.closed += 1;
            if self.conn.fail_close {
                return Err(Error::database("close failed"));
            }
        }
        Ok(())
    }

    async fn next(&mut self) -> Result<Option<Row>> {
        if self.conn.fail_at == Some(self.pos) {
            let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset");
            return Err(Error::driver("fetch failed", io));
        }
        let row = self.conn.rows.get(self.pos).cloned();
        if row.is_some() {
            self.pos += 1;
        }
        Ok(row)
    }
}

impl DbConnection for MockConnection {
    type Cursor<'c> = MockCursor<'c>;

    async fn open_cursor(&mut self, sql: &str) -> Result<MockCursor<'_>> {
        self.queries.push(sql.to_string());
        if self.fail_open {
            return Err(Error::database(format!("Table not found: {}", sql)));
        }
        self.opened += 1;
        Ok(MockCursor {
            conn: self,
            pos: 0,
            closed: false,
        })
    }
}
