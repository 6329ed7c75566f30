//! Mock connection for testing
//!
//! Results are configured per SQL text. Every call is recorded, and every
//! cursor bumps a shared counter when dropped so tests can check that result
//! sets are released.

use myclient_core::connection::{Connection, Row, RowCursor};
use myclient_core::diagnostics::{DbError, DbResult};
use std::cell::Cell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

/// Which connection operation was invoked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Query(String),
    Exec(String),
    Ping,
    Scalar(String),
}

/// A canned result set
#[derive(Debug, Clone)]
pub struct MockResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<DbResult<Row>>,
}

impl MockResultSet {
    pub fn new(columns: &[&str], rows: &[&[Option<&str>]]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| Ok(row.iter().map(|c| c.map(str::to_string)).collect()))
                .collect(),
        }
    }

    /// Append a row that fails to scan
    pub fn with_error(mut self, message: &str) -> Self {
        self.rows.push(Err(DbError::new(message)));
        self
    }
}

/// Cursor over a [`MockResultSet`]
pub struct MockCursor {
    columns: Vec<String>,
    rows: VecDeque<DbResult<Row>>,
    fetched: Rc<Cell<usize>>,
    released: Rc<Cell<usize>>,
}

impl RowCursor for MockCursor {
    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn next_row(&mut self) -> Option<DbResult<Row>> {
        let row = self.rows.pop_front()?;
        self.fetched.set(self.fetched.get() + 1);
        Some(row)
    }
}

impl Drop for MockCursor {
    fn drop(&mut self) {
        self.released.set(self.released.get() + 1);
    }
}

/// Configurable in-memory connection
#[derive(Default)]
pub struct MockConnection {
    queries: HashMap<String, DbResult<MockResultSet>>,
    execs: HashMap<String, DbResult<u64>>,
    scalars: HashMap<String, DbResult<Option<String>>>,
    ping: Option<DbError>,
    pub calls: Vec<Call>,
    fetched: Rc<Cell<usize>>,
    released: Rc<Cell<usize>>,
}

impl MockConnection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, sql: &str, result: MockResultSet) -> Self {
        self.queries.insert(sql.to_string(), Ok(result));
        self
    }

    pub fn with_query_error(mut self, sql: &str, message: &str) -> Self {
        self.queries.insert(sql.to_string(), Err(DbError::new(message)));
        self
    }

    pub fn with_exec(mut self, sql: &str, affected: u64) -> Self {
        self.execs.insert(sql.to_string(), Ok(affected));
        self
    }

    pub fn with_exec_error(mut self, sql: &str, message: &str) -> Self {
        self.execs.insert(sql.to_string(), Err(DbError::new(message)));
        self
    }

    pub fn with_scalar(mut self, sql: &str, value: Option<&str>) -> Self {
        self.scalars
            .insert(sql.to_string(), Ok(value.map(str::to_string)));
        self
    }

    pub fn with_ping_error(mut self, message: &str) -> Self {
        self.ping = Some(DbError::new(message));
        self
    }

    /// Number of cursors dropped so far
    pub fn released(&self) -> usize {
        self.released.get()
    }

    /// Number of rows pulled from cursors so far
    pub fn fetched(&self) -> usize {
        self.fetched.get()
    }
}

impl Connection for MockConnection {
    fn query(&mut self, sql: &str) -> DbResult<Box<dyn RowCursor + '_>> {
        self.calls.push(Call::Query(sql.to_string()));
        let set = match self.queries.get(sql) {
            Some(result) => result.clone()?,
            None => return Err(DbError::with_code(1064, format!("no mock result for '{}'", sql))),
        };
        Ok(Box::new(MockCursor {
            columns: set.columns,
            rows: set.rows.into(),
            fetched: Rc::clone(&self.fetched),
            released: Rc::clone(&self.released),
        }))
    }

    fn exec(&mut self, sql: &str) -> DbResult<u64> {
        self.calls.push(Call::Exec(sql.to_string()));
        self.execs.get(sql).cloned().unwrap_or(Ok(0))
    }

    fn ping(&mut self) -> DbResult<()> {
        self.calls.push(Call::Ping);
        match &self.ping {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    fn query_scalar(&mut self, sql: &str) -> DbResult<Option<String>> {
        self.calls.push(Call::Scalar(sql.to_string()));
        self.scalars
            .get(sql)
            .cloned()
            .unwrap_or_else(|| Err(DbError::new("no scalar configured")))
    }
}
