//! Line input for the REPL

use log::warn;
use myclient_diagnostics::{ClientError, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::PathBuf;

/// Source of raw input lines
pub trait LineReader {
    /// Read one line. `Ok(None)` on end of input or interrupt.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Record a line in history
    fn add_history(&mut self, _line: &str) {}
}

/// Default history location, `$HOME/.myclient_history`
pub fn default_history_file() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(|home| PathBuf::from(home).join(".myclient_history"))
}

/// Line editor backed by rustyline, with persistent history
pub struct EditorReader {
    editor: DefaultEditor,
    history_file: Option<PathBuf>,
}

impl EditorReader {
    pub fn new(history_file: Option<PathBuf>) -> Result<Self> {
        let mut editor = DefaultEditor::new().map_err(|e| ClientError::ReadInput(e.to_string()))?;
        if let Some(path) = &history_file {
            // A missing file on first run is expected
            if editor.load_history(path).is_err() {
                log::debug!("no history loaded from {}", path.display());
            }
        }
        Ok(Self {
            editor,
            history_file,
        })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(ClientError::ReadInput(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        if let Err(e) = self.editor.add_history_entry(line) {
            warn!("failed to record history entry: {}", e);
        }
    }
}

impl Drop for EditorReader {
    fn drop(&mut self) {
        if let Some(path) = &self.history_file {
            if let Err(e) = self.editor.save_history(path) {
                warn!("failed to save history to {}: {}", path.display(), e);
            }
        }
    }
}
