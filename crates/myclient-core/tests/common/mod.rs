//! Common test utilities

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

/// Split rendered output into lines, dropping the trailing summary
pub fn body_lines(output: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(output);
    let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
    lines.pop();
    lines
}

/// The last line of rendered output
pub fn summary_line(output: &[u8]) -> String {
    String::from_utf8_lossy(output)
        .lines()
        .last()
        .unwrap_or_default()
        .to_string()
}
