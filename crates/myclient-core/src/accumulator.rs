//! Multi-line statement accumulation
//!
//! [`Accumulator`] is the pending-statement state of a session. It is moved
//! through [`Accumulator::feed`] once per input line and comes back either
//! still pending, as a completed statement, or as a request to end the
//! session.
//!
//! A statement completes when the buffer ends with `;` or contains the
//! vertical marker `\G` (case-insensitive). The marker is removed when it
//! trails the buffer or precedes a `;`, with only whitespace in between. A
//! marker anywhere else (for
//! example inside a string literal followed by more text) still completes
//! the statement in vertical mode but is left in the statement text.

use crate::filter::{ExtractedLine, FilterDirective};
use log::debug;

/// Statement terminator
pub const TERMINATOR: char = ';';

/// Tokens that end the session when they make up the whole line
pub const EXIT_TOKENS: [&str; 4] = ["exit", "exit;", "quit", "quit;"];

const VERTICAL_MARKER: &str = "\\G";

/// How a result set is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Header line plus one tab-separated line per row
    #[default]
    Tabular,
    /// One `column: value` line per field, with a banner per row
    Vertical,
}

/// A statement ready for dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedStatement {
    /// Trimmed SQL with the terminator and trailing marker stripped
    pub sql: String,
    pub mode: RenderMode,
    pub filter: Option<FilterDirective>,
}

/// Result of feeding one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// More input is needed
    Pending(Accumulator),
    /// A statement is complete; the accumulator starts over empty
    Complete(CompletedStatement),
    /// An exit token was entered
    Exit,
}

/// Text of a statement that has not been terminated yet
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Accumulator {
    buffer: String,
    filter: Option<FilterDirective>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no fragment has been buffered
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The buffered text so far
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Advance the state machine by one extracted line.
    ///
    /// A filter directive on any line of the statement applies to it; a later
    /// directive replaces an earlier one.
    pub fn feed(mut self, line: ExtractedLine) -> Step {
        if is_exit_command(&line.fragment) {
            debug!("exit command received, discarding {} pending bytes", self.buffer.len());
            return Step::Exit;
        }

        if let Some(directive) = line.directive() {
            self.filter = Some(directive);
        }

        self.buffer.push(' ');
        self.buffer.push_str(&line.fragment);

        let mut terminated = false;
        let mut mode = RenderMode::Tabular;

        if contains_vertical_marker(&self.buffer) {
            mode = RenderMode::Vertical;
            self.buffer = strip_vertical_marker(&self.buffer);
            terminated = true;
        }

        let trimmed_len = self.buffer.trim_end().len();
        if self.buffer[..trimmed_len].ends_with(TERMINATOR) {
            self.buffer.truncate(trimmed_len - TERMINATOR.len_utf8());
            terminated = true;
        }

        if !terminated {
            return Step::Pending(self);
        }

        let statement = CompletedStatement {
            sql: self.buffer.trim().to_string(),
            mode,
            filter: self.filter,
        };
        debug!("statement complete ({:?}): {}", statement.mode, statement.sql);
        Step::Complete(statement)
    }
}

/// Whether a trimmed fragment is one of [`EXIT_TOKENS`]
pub fn is_exit_command(fragment: &str) -> bool {
    EXIT_TOKENS.contains(&fragment.trim())
}

fn contains_vertical_marker(text: &str) -> bool {
    text.to_uppercase().contains(VERTICAL_MARKER)
}

/// Remove a trailing marker and turn every `\G;` (or `\G  ;`) into `;`
fn strip_vertical_marker(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = find_marker(rest) {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + VERTICAL_MARKER.len()..];
        let next = after.trim_start();
        if next.is_empty() {
            rest = after;
            break;
        }
        if next.starts_with(TERMINATOR) {
            rest = next;
        } else {
            out.push_str(&rest[pos..pos + VERTICAL_MARKER.len()]);
            rest = after;
        }
    }
    out.push_str(rest);
    out
}

fn find_marker(text: &str) -> Option<usize> {
    text.as_bytes()
        .windows(2)
        .position(|w| w[0] == b'\\' && w[1].eq_ignore_ascii_case(&b'G'))
}
