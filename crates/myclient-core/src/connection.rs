//! Database connection collaborator
//!
//! The shell never talks to the wire protocol itself. Whatever executes SQL
//! implements [`Connection`]; row-producing statements come back as a
//! [`RowCursor`] that borrows the connection until it is dropped. Dropping the
//! cursor releases any server-side state, so every exit path from rendering
//! frees it.

use myclient_diagnostics::DbResult;

/// A single cell; `None` is SQL `NULL`
pub type Cell = Option<String>;

/// One result row, in column order
pub type Row = Vec<Cell>;

/// Forward-only iterator over a result set
pub trait RowCursor {
    /// Column names, in order
    fn columns(&self) -> &[String];

    /// Fetch the next row. `None` once the result set is exhausted.
    fn next_row(&mut self) -> Option<DbResult<Row>>;
}

/// Operations the shell needs from a database session
pub trait Connection {
    /// Run a row-producing statement
    fn query(&mut self, sql: &str) -> DbResult<Box<dyn RowCursor + '_>>;

    /// Run a row-affecting statement and return the affected-row count
    fn exec(&mut self, sql: &str) -> DbResult<u64>;

    /// Check that the server is reachable
    fn ping(&mut self) -> DbResult<()>;

    /// Run a query and return the first column of its first row
    fn query_scalar(&mut self, sql: &str) -> DbResult<Option<String>>;
}

impl<C: Connection + ?Sized> Connection for &mut C {
    fn query(&mut self, sql: &str) -> DbResult<Box<dyn RowCursor + '_>> {
        (**self).query(sql)
    }

    fn exec(&mut self, sql: &str) -> DbResult<u64> {
        (**self).exec(sql)
    }

    fn ping(&mut self) -> DbResult<()> {
        (**self).ping()
    }

    fn query_scalar(&mut self, sql: &str) -> DbResult<Option<String>> {
        (**self).query_scalar(sql)
    }
}

/// Server identification shown in the REPL banner
pub fn server_version<C: Connection + ?Sized>(conn: &mut C) -> Option<String> {
    match conn.query_scalar("SELECT VERSION();") {
        Ok(version) => version,
        Err(e) => {
            log::warn!("failed to fetch server version: {}", e);
            None
        }
    }
}
