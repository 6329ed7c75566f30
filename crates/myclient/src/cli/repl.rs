//! REPL implementation

use super::output;
use super::reader::LineReader;
use log::debug;
use myclient_core::{Accumulator, Connection, Dispatcher, Step, extract_filter};
use myclient_diagnostics::Result;
use std::io::Write;

/// Prompt while no statement is pending
pub const PROMPT: &str = "mysql> ";

/// Prompt while a statement spans several lines
pub const CONTINUATION_PROMPT: &str = "    -> ";

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
    /// Statements dispatched
    pub statements: usize,
    /// Statements that reported an error
    pub failures: usize,
    /// Whether the session ended through an exit command
    pub exited: bool,
}

/// Run the read-eval-print loop until end of input or an exit command.
///
/// Statement failures are written to `err` and the loop carries on with an
/// empty buffer; only reader and terminal failures end the session early.
pub fn run<C, R>(
    conn: C,
    reader: &mut R,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<SessionStats>
where
    C: Connection,
    R: LineReader + ?Sized,
{
    let mut dispatcher = Dispatcher::new(conn);
    let mut stats = SessionStats::default();
    let mut pending = Accumulator::new();

    loop {
        let prompt = if pending.is_empty() {
            PROMPT
        } else {
            CONTINUATION_PROMPT
        };
        let Some(line) = reader.read_line(prompt)? else {
            break;
        };

        if pending.is_empty() && line.trim().is_empty() {
            continue;
        }
        reader.add_history(&line);

        pending = match pending.feed(extract_filter(&line)) {
            Step::Pending(next) => next,
            Step::Exit => {
                stats.exited = true;
                writeln!(out, "Bye")?;
                break;
            }
            Step::Complete(stmt) => {
                stats.statements += 1;
                if let Err(e) = dispatcher.dispatch(&stmt, out) {
                    stats.failures += 1;
                    debug!("statement failed: {:?}", e);
                    writeln!(err, "{}", output::format_error(&e))?;
                }
                Accumulator::new()
            }
        };
    }

    Ok(stats)
}
