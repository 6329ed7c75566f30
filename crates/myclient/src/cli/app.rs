//! Mode selection and top-level flow

use super::args::Args;
use super::config::ConnectOptions;
use super::driver::MysqlConnection;
use super::output;
use super::reader::{EditorReader, default_history_file};
use super::repl;
use anyhow::{Context, Result};
use log::{debug, info};
use myclient_core::{Connection, Dispatcher, run_batch, server_version};
use myclient_diagnostics::ClientError;
use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

/// Message printed after a file or stdin batch succeeds
pub const BATCH_DONE: &str = "SQL file executed";

/// What the process was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Run the statements of a file
    File(PathBuf),
    /// Run the statements piped on stdin
    Stdin,
    /// Run one statement given with `-e`
    Inline(String),
    /// Interactive prompt
    Interactive,
}

impl Mode {
    /// File wins over piped stdin, which wins over `-e`
    pub fn select(args: &Args, stdin_is_terminal: bool) -> Self {
        if let Some(path) = &args.file {
            return Self::File(path.clone());
        }
        if !stdin_is_terminal {
            return Self::Stdin;
        }
        match &args.execute {
            Some(sql) if !sql.is_empty() => Self::Inline(sql.clone()),
            _ => Self::Interactive,
        }
    }
}

/// Shown in the banner when the server does not report a version
pub const UNKNOWN_VERSION: &str = "Unknown version";

/// Run the parsed command line; returns the process exit code
pub fn run(args: Args, program: &str) -> Result<i32> {
    let opts = ConnectOptions::from_args(&args);
    let stdin_is_terminal = io::stdin().is_terminal();
    let mode = Mode::select(&args, stdin_is_terminal);
    debug!("selected mode {:?}", mode);

    let connected = MysqlConnection::connect(&opts)
        .map_err(ClientError::Connection)
        .and_then(verify_connection);
    let mut conn = match connected {
        Ok(conn) => conn,
        Err(e) => return Ok(report_connection_failure(&e, &mut io::stderr().lock(), program)?),
    };
    info!("connected to {}", opts);

    let stdout = io::stdout();
    let stderr = io::stderr();

    match mode {
        Mode::File(path) => {
            let script = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read SQL file: {}", path.display()))?;
            Ok(run_script(&mut conn, &script, &mut stdout.lock(), &mut stderr.lock())?)
        }
        Mode::Stdin => {
            let script = read_piped_script(io::stdin().lock()).context("Failed to read stdin")?;
            Ok(run_script(&mut conn, &script, &mut stdout.lock(), &mut stderr.lock())?)
        }
        Mode::Inline(sql) => Ok(run_inline(&mut conn, &sql, &mut stdout.lock(), &mut stderr.lock())?),
        Mode::Interactive => run_interactive(conn),
    }
}

/// Ping a freshly opened connection
pub fn verify_connection<C: Connection>(mut conn: C) -> std::result::Result<C, ClientError> {
    conn.ping().map_err(ClientError::Connection)?;
    Ok(conn)
}

/// Print a connection error followed by usage examples; returns the exit code
pub fn report_connection_failure(
    error: &ClientError,
    err: &mut dyn Write,
    program: &str,
) -> io::Result<i32> {
    let code = report(error, err)?;
    output::write_usage(err, program)?;
    Ok(code)
}

/// Version text for the banner
pub fn banner_version<C: Connection + ?Sized>(conn: &mut C) -> String {
    server_version(conn).unwrap_or_else(|| UNKNOWN_VERSION.to_string())
}

/// Join piped lines into one script
pub fn read_piped_script(input: impl BufRead) -> io::Result<String> {
    let lines = input.lines().collect::<io::Result<Vec<_>>>()?;
    Ok(lines.join("\n"))
}

/// Execute a batch script; returns the process exit code
pub fn run_script<C: Connection + ?Sized>(
    conn: &mut C,
    script: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<i32> {
    match run_batch(conn, script) {
        Ok(count) => {
            debug!("batch executed {} statements", count);
            writeln!(out, "{}", output::format_success(BATCH_DONE))?;
            Ok(0)
        }
        Err(e) => report(&e, err),
    }
}

/// Execute a single `-e` statement; returns the process exit code
pub fn run_inline<C: Connection>(
    conn: C,
    sql: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<i32> {
    let mut dispatcher = Dispatcher::new(conn);
    match dispatcher.execute_inline(sql, out) {
        Ok(_) => Ok(0),
        Err(e) => report(&e, err),
    }
}

/// Write an error; fatal errors map to exit code 1
fn report(error: &ClientError, err: &mut dyn Write) -> io::Result<i32> {
    writeln!(err, "{}", output::format_error(error))?;
    Ok(if error.is_fatal() { 1 } else { 0 })
}

fn run_interactive(mut conn: MysqlConnection) -> Result<i32> {
    let version = banner_version(&mut conn);
    output::write_banner(&mut io::stdout().lock(), &version)?;

    let mut reader = EditorReader::new(default_history_file())?;
    let stats = repl::run(
        &mut conn,
        &mut reader,
        &mut io::stdout(),
        &mut io::stderr(),
    )?;
    debug!(
        "session ended: {} statements, {} failures",
        stats.statements, stats.failures
    );
    Ok(0)
}
