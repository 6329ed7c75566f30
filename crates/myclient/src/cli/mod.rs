//! CLI functionality for the myclient shell
//!
//! This module contains all CLI-related functionality including:
//! - Argument parsing and connection configuration
//! - The `mysql` driver binding
//! - Line editing and history
//! - The REPL loop and batch/inline modes
//! - Output formatting

pub mod app;
pub mod args;
pub mod config;
pub mod driver;
pub mod output;
pub mod reader;
pub mod repl;
