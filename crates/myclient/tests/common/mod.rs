//! Common test utilities
//!
//! The mock connection is shared with the core crate's tests.

#![allow(dead_code)]

#[path = "../../../myclient-core/tests/common/mocks.rs"]
pub mod mocks;

pub use mocks::*;

use myclient::cli::reader::LineReader;
use myclient::Result;

/// Line reader fed from a fixed list of lines
pub struct ScriptReader {
    lines: std::vec::IntoIter<String>,
    pub prompts: Vec<String>,
    pub history: Vec<String>,
}

impl ScriptReader {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines
                .iter()
                .map(|l| l.to_string())
                .collect::<Vec<_>>()
                .into_iter(),
            prompts: Vec::new(),
            history: Vec::new(),
        }
    }
}

impl LineReader for ScriptReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.next())
    }

    fn add_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }
}
