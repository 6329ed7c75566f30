//! myclient command-line interface

use clap::Parser;
use clap::error::ErrorKind;
use myclient::ClientError;
use myclient::cli::{app, args::Args, output};
use std::path::Path;

fn main() {
    human_panic::setup_panic!();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let err = ClientError::Argument(e.to_string().trim().to_string());
            eprintln!("{}", output::format_error(&err));
            std::process::exit(1);
        }
    };

    output::setup_colors(args.color);

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let program = std::env::args()
        .next()
        .as_deref()
        .and_then(|arg| Path::new(arg).file_name())
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| "mysql".to_string());

    match app::run(args, &program) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}", output::format_error(&e));
            std::process::exit(1);
        }
    }
}
