//! Command-line arguments

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Colour output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Interactive client for MySQL-compatible servers
///
/// Option values may be attached (`-uroot -P3306`) or separate
/// (`-u root -P 3306`).
#[derive(Debug, Clone, Parser)]
#[command(name = "mysql")]
#[command(author, version, about = "Interactive MySQL command-line client", long_about = None)]
#[command(disable_help_flag = true)]
pub struct Args {
    /// User for login
    #[arg(short = 'u', long)]
    pub user: Option<String>,

    /// Password to use when connecting (may be empty)
    #[arg(short = 'p', long, num_args = 0..=1, default_missing_value = "")]
    pub password: Option<String>,

    /// Server host
    #[arg(short = 'h', long, default_value = "localhost")]
    pub host: String,

    /// Server port
    #[arg(short = 'P', long, default_value_t = 3306)]
    pub port: u16,

    /// Database to use
    #[arg(short = 'D', long)]
    pub database: Option<String>,

    /// Execute a statement and exit
    #[arg(short = 'e', long, allow_hyphen_values = true)]
    pub execute: Option<String>,

    /// Execute a file of `;`-separated statements and exit
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Connect timeout in seconds
    #[arg(short = 't', long, default_value_t = 10)]
    pub timeout: u64,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Color output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}
