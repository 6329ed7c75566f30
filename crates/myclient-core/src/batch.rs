//! Non-interactive execution of `;`-separated scripts

use crate::accumulator::TERMINATOR;
use crate::connection::Connection;
use myclient_diagnostics::{ClientError, Result};
use log::debug;

/// Split a script into trimmed, non-empty statements.
///
/// Splitting is purely textual; a `;` inside a string literal also splits.
pub fn split_statements(script: &str) -> Vec<&str> {
    script
        .split(TERMINATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Execute every statement of `script` in order through `exec`.
///
/// Stops at the first failure. Returns the number of statements executed.
pub fn run_batch<C: Connection + ?Sized>(conn: &mut C, script: &str) -> Result<usize> {
    let statements = split_statements(script);
    debug!("running batch of {} statements", statements.len());

    for (index, statement) in statements.iter().enumerate() {
        let affected = conn
            .exec(statement)
            .map_err(|source| ClientError::BatchExecution {
                statement: statement.to_string(),
                source,
            })?;
        debug!("batch statement {} affected {} rows", index + 1, affected);
    }

    Ok(statements.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_and_skips_empty_pieces() {
        let script = "CREATE TABLE t (id INT);\n\n INSERT INTO t VALUES (1);;\n  ";
        assert_eq!(
            split_statements(script),
            vec!["CREATE TABLE t (id INT)", "INSERT INTO t VALUES (1)"]
        );
    }

    #[test]
    fn trailing_statement_without_terminator_is_kept() {
        assert_eq!(split_statements("SELECT 1; SELECT 2"), vec!["SELECT 1", "SELECT 2"]);
    }
}
