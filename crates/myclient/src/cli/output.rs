//! Output formatting utilities

use super::args::ColorMode;
use colored::*;
use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

/// Set up color output based on user preference
pub fn setup_colors(mode: ColorMode) {
    match mode {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => colored::control::set_override(io::stderr().is_terminal()),
    }
}

/// Format an error for display
pub fn format_error(error: &dyn Display) -> String {
    format!("{} {}", "ERROR:".red().bold(), error)
}

/// Format a success message for display
pub fn format_success(message: &str) -> String {
    format!("{}", message.green())
}

/// Welcome text shown before the first prompt
pub fn write_banner(out: &mut dyn Write, server_version: &str) -> io::Result<()> {
    writeln!(out, "{}", "Welcome to the myclient MySQL monitor.".cyan().bold())?;
    writeln!(out, "Server version: {}", server_version)?;
    writeln!(out, "Exit commands: {}", "exit exit; quit quit;".green())?;
    writeln!(out, "Import a file: {}", "mysql -uroot -p123 -h192.168.0.100 -P4000 -fxxxx.sql".cyan())?;
    writeln!(out)?;
    writeln!(out, "Filter rows:   {}", "select * from xxx; | grep xxxxxxx".cyan())?;
    writeln!(out, "Exclude rows:  {}  (like grep -v)", "select * from xxx; | grepv xxxxxxx".cyan())?;
    writeln!(out, "Vertical rows: {}", "select * from xxx\\G".cyan())?;
    writeln!(out)
}

/// Example invocations, shown when the connection cannot be established
pub fn write_usage(out: &mut dyn Write, program: &str) -> io::Result<()> {
    writeln!(out, "{}", "Usage examples:".bold())?;
    for example in [
        "-uroot -p123456 -h127.0.0.1 -P3306",
        "-u root -p 123456 -h 127.0.0.1 -P 3306",
        "-uroot -p123456 -h127.0.0.1 -P3306 -Ddbname",
        "-uroot -p123456 -h127.0.0.1 -P3306 -f xxx.sql",
        "-uroot -p123456 -h127.0.0.1 -P3306 -Ddbname < xxx.sql",
        "-uroot -p123456 -h127.0.0.1 -P3306 -Ddbname -e 'select * from users limit 10;'",
    ] {
        writeln!(out, "  {} {}", program, example)?;
    }
    Ok(())
}
