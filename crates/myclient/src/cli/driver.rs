//! [`Connection`] over the `mysql` driver
//!
//! Statements go through the text protocol, so the server sends every
//! non-null value as bytes; binary values are formatted for completeness.

use super::config::ConnectOptions;
use log::info;
use myclient_core::connection::{Cell, Connection, Row, RowCursor};
use myclient_diagnostics::{DbError, DbResult};
use mysql::prelude::Queryable;
use mysql::{Conn, OptsBuilder, QueryResult, Text, Value};

/// A single blocking session with the server
pub struct MysqlConnection {
    conn: Conn,
}

impl MysqlConnection {
    /// Perform the handshake
    pub fn connect(opts: &ConnectOptions) -> DbResult<Self> {
        info!("connecting to {}", opts);
        let builder = OptsBuilder::new()
            .user(opts.user.clone())
            .pass(opts.password.clone())
            .ip_or_hostname(Some(opts.host.clone()))
            .tcp_port(opts.port)
            .db_name(opts.database.clone())
            .tcp_connect_timeout(Some(opts.connect_timeout));
        let conn = Conn::new(builder).map_err(db_error)?;
        Ok(Self { conn })
    }
}

impl Connection for MysqlConnection {
    fn query(&mut self, sql: &str) -> DbResult<Box<dyn RowCursor + '_>> {
        let mut result = self.conn.query_iter(sql).map_err(db_error)?;
        skip_column_less_sets(&mut result);
        let columns = result
            .columns()
            .as_ref()
            .iter()
            .map(|column| column.name_str().into_owned())
            .collect();
        Ok(Box::new(MysqlCursor {
            columns,
            inner: result,
        }))
    }

    fn exec(&mut self, sql: &str) -> DbResult<u64> {
        self.conn.query_drop(sql).map_err(db_error)?;
        Ok(self.conn.affected_rows())
    }

    fn ping(&mut self) -> DbResult<()> {
        self.conn.ping().map_err(db_error)
    }

    fn query_scalar(&mut self, sql: &str) -> DbResult<Option<String>> {
        let value: Option<Option<String>> = self.conn.query_first(sql).map_err(db_error)?;
        Ok(value.flatten())
    }
}

/// Rows of the current result set; dropping it discards anything unread
struct MysqlCursor<'c> {
    columns: Vec<String>,
    inner: QueryResult<'c, 'c, 'c, Text>,
}

impl RowCursor for MysqlCursor<'_> {
    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn next_row(&mut self) -> Option<DbResult<Row>> {
        let row = self.inner.next()?;
        Some(row.map_err(db_error).map(|row| {
            (0..row.len())
                .map(|i| row.as_ref(i).and_then(value_text))
                .collect()
        }))
    }
}

/// Position over the result sets of one query
trait ResultSets {
    fn has_columns(&self) -> bool;

    /// Move past the current set; `false` once no set remains
    fn advance(&mut self) -> bool;
}

impl ResultSets for QueryResult<'_, '_, '_, Text> {
    fn has_columns(&self) -> bool {
        !self.columns().as_ref().is_empty()
    }

    fn advance(&mut self) -> bool {
        // Dropping the set drains it and steps to the next one
        self.iter().is_some()
    }
}

/// Step over leading sets without columns, such as the one `SET @x = 1`
/// yields in `SET @x = 1; SELECT @x`
fn skip_column_less_sets<S: ResultSets + ?Sized>(sets: &mut S) {
    while !sets.has_columns() {
        if !sets.advance() {
            break;
        }
    }
}

fn db_error(err: mysql::Error) -> DbError {
    match err {
        mysql::Error::MySqlError(e) => DbError::with_code(e.code, e.message),
        other => DbError::new(other.to_string()),
    }
}

fn value_text(value: &Value) -> Cell {
    let text = match value {
        Value::NULL => return None,
        Value::Bytes(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        Value::Int(v) => v.to_string(),
        Value::UInt(v) => v.to_string(),
        Value::Float(v) => v.to_string(),
        Value::Double(v) => v.to_string(),
        Value::Date(year, month, day, hour, minute, second, micros) => {
            let mut text = format!(
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                year, month, day, hour, minute, second
            );
            if *micros > 0 {
                text.push_str(&format!(".{:06}", micros));
            }
            text
        }
        Value::Time(negative, days, hours, minutes, seconds, micros) => {
            let sign = if *negative { "-" } else { "" };
            let hours = u64::from(*days) * 24 + u64::from(*hours);
            let mut text = format!("{}{:02}:{:02}:{:02}", sign, hours, minutes, seconds);
            if *micros > 0 {
                text.push_str(&format!(".{:06}", micros));
            }
            text
        }
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::VecDeque;

    /// Column counts of the remaining sets, front first
    struct FakeSets {
        sets: VecDeque<usize>,
        advanced: usize,
    }

    impl FakeSets {
        fn new(sets: &[usize]) -> Self {
            Self {
                sets: sets.iter().copied().collect(),
                advanced: 0,
            }
        }
    }

    impl ResultSets for FakeSets {
        fn has_columns(&self) -> bool {
            self.sets.front().is_some_and(|&n| n > 0)
        }

        fn advance(&mut self) -> bool {
            if self.sets.pop_front().is_none() {
                return false;
            }
            self.advanced += 1;
            true
        }
    }

    #[test]
    fn test_leading_empty_sets_are_skipped() {
        let mut sets = FakeSets::new(&[0, 0, 2, 0]);
        skip_column_less_sets(&mut sets);
        assert_eq!(sets.advanced, 2);
        assert_eq!(sets.sets.front(), Some(&2));
    }

    #[test]
    fn test_set_with_columns_is_not_advanced() {
        let mut sets = FakeSets::new(&[1, 3]);
        skip_column_less_sets(&mut sets);
        assert_eq!(sets.advanced, 0);
    }

    #[test]
    fn test_skipping_stops_when_sets_run_out() {
        let mut sets = FakeSets::new(&[0, 0]);
        skip_column_less_sets(&mut sets);
        assert_eq!(sets.advanced, 2);
        assert!(sets.sets.is_empty());
    }

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(&Value::NULL), None);
        assert_eq!(value_text(&Value::Bytes(b"abc".to_vec())).as_deref(), Some("abc"));
        assert_eq!(value_text(&Value::Int(-4)).as_deref(), Some("-4"));
        assert_eq!(
            value_text(&Value::Date(2024, 1, 2, 3, 4, 5, 0)).as_deref(),
            Some("2024-01-02 03:04:05")
        );
        assert_eq!(
            value_text(&Value::Time(true, 1, 2, 3, 4, 500)).as_deref(),
            Some("-26:03:04.000500")
        );
    }
}
