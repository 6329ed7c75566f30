//! Interactive command-line client for MySQL-compatible servers
//!
//! The shell accepts connection parameters and then runs a file of
//! statements, statements piped on stdin, a single `-e` statement, or an
//! interactive prompt with multi-line input, `\G` vertical output and
//! `| grep` / `| grepv` row filters.
//!
//! # Example
//!
//! ```ignore
//! use myclient::cli::repl;
//!
//! let stats = repl::run(&mut conn, &mut reader, &mut std::io::stdout(), &mut std::io::stderr())?;
//! ```

pub use myclient_core;
pub use myclient_diagnostics;

pub use myclient_core::{Connection, RowCursor};
pub use myclient_diagnostics::{ClientError, DbError, Result};

#[cfg(feature = "cli")]
pub mod cli;
