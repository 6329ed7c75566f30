//! Statement dispatch
//!
//! A statement is row-producing when any `;`-separated piece of it starts
//! with `SELECT` or `SHOW` (case-insensitive). Everything else runs through
//! [`Connection::exec`].

use crate::accumulator::{CompletedStatement, RenderMode, TERMINATOR};
use crate::connection::Connection;
use crate::render::{RenderSummary, render_rows};
use myclient_diagnostics::{ClientError, Result};
use log::debug;
use std::io::Write;
use std::time::{Duration, Instant};

const ROW_PRODUCING_KEYWORDS: [&str; 2] = ["SELECT", "SHOW"];

/// Which connection operation a statement goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    RowProducing,
    RowAffecting,
}

/// What a dispatched statement did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rows(RenderSummary),
    Affected { rows: u64, elapsed: Duration },
}

/// Classify a statement by its leading keywords
pub fn classify(sql: &str) -> StatementKind {
    let row_producing = sql.split(TERMINATOR).any(|piece| {
        let piece = piece.trim().to_uppercase();
        ROW_PRODUCING_KEYWORDS
            .iter()
            .any(|keyword| piece.starts_with(keyword))
    });
    if row_producing {
        StatementKind::RowProducing
    } else {
        StatementKind::RowAffecting
    }
}

/// `Query OK, N rows affected (S.SS sec)`
pub fn format_affected(rows: u64, elapsed: Duration) -> String {
    format!(
        "Query OK, {} rows affected ({:.2} sec)",
        rows,
        elapsed.as_secs_f64()
    )
}

/// Executes completed statements against a connection and writes results
pub struct Dispatcher<C> {
    conn: C,
}

impl<C: Connection> Dispatcher<C> {
    pub fn new(conn: C) -> Self {
        Self { conn }
    }

    pub fn into_inner(self) -> C {
        self.conn
    }

    /// Run one statement and write its result to `out`.
    ///
    /// Query and exec failures come back as [`ClientError::Execution`]; a
    /// failure while reading rows comes back as [`ClientError::Render`] after
    /// the cursor has been released.
    pub fn dispatch(&mut self, stmt: &CompletedStatement, out: &mut dyn Write) -> Result<Outcome> {
        let start = Instant::now();
        let kind = classify(&stmt.sql);
        debug!("dispatching {:?} statement: {}", kind, stmt.sql);

        match kind {
            StatementKind::RowProducing => {
                let mut cursor = self.conn.query(&stmt.sql).map_err(ClientError::Execution)?;
                let summary =
                    render_rows(cursor.as_mut(), stmt.mode, stmt.filter.as_ref(), start, out)?;
                Ok(Outcome::Rows(summary))
            }
            StatementKind::RowAffecting => {
                let rows = self.conn.exec(&stmt.sql).map_err(ClientError::Execution)?;
                let elapsed = start.elapsed();
                writeln!(out, "{}", format_affected(rows, elapsed))?;
                Ok(Outcome::Affected { rows, elapsed })
            }
        }
    }

    /// Run a statement given on the command line.
    ///
    /// Rows are rendered in tabular form without a filter; the affected-row
    /// report omits the timing.
    pub fn execute_inline(&mut self, sql: &str, out: &mut dyn Write) -> Result<Outcome> {
        let start = Instant::now();
        match classify(sql) {
            StatementKind::RowProducing => {
                let mut cursor = self.conn.query(sql).map_err(ClientError::Execution)?;
                let summary = render_rows(cursor.as_mut(), RenderMode::Tabular, None, start, out)?;
                Ok(Outcome::Rows(summary))
            }
            StatementKind::RowAffecting => {
                let rows = self.conn.exec(sql).map_err(ClientError::Execution)?;
                writeln!(out, "Query OK, {} row(s) affected", rows)?;
                Ok(Outcome::Affected {
                    rows,
                    elapsed: start.elapsed(),
                })
            }
        }
    }
}
