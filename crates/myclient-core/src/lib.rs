//! Core of the myclient SQL shell
//!
//! This crate holds the parts of the shell that carry real logic, kept free of
//! any terminal or network code:
//! - Filter extraction (`| grep` / `| grepv` directives)
//! - Multi-line statement accumulation
//! - Dispatch of complete statements to a [`Connection`]
//! - Tabular and vertical result rendering
//! - Batch execution of `;`-separated scripts
//!
//! # Example
//!
//! ```ignore
//! use myclient_core::{Accumulator, Step, extract_filter};
//!
//! match Accumulator::new().feed(extract_filter("SELECT 1;")) {
//!     Step::Complete(stmt) => assert_eq!(stmt.sql, "SELECT 1"),
//!     _ => unreachable!(),
//! }
//! ```

pub mod accumulator;
pub mod batch;
pub mod connection;
pub mod dispatch;
pub mod filter;
pub mod render;

pub use accumulator::{Accumulator, CompletedStatement, RenderMode, Step, is_exit_command};
pub use batch::{run_batch, split_statements};
pub use connection::{Cell, Connection, Row, RowCursor, server_version};
pub use dispatch::{Dispatcher, Outcome, StatementKind, classify};
pub use filter::{ExtractedLine, FilterDirective, extract_filter};
pub use render::{RenderSummary, render_rows};

pub use myclient_diagnostics as diagnostics;
