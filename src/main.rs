//! Quern - duplicate detection and retrieval for markdown note vaults
//!
//! A command-line tool for checking prospective note titles against what a
//! vault already holds, surfacing near-duplicate content, and ranking
//! stored notes by relevance to a piece of text.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use quern_core::error::QuernError;
use quern_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();
    let wants_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_parse_failure(&err, wants_json),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    // Interrupted scans exit with the conventional SIGINT code instead of
    // unwinding mid-walk
    let _ = ctrlc::set_handler(|| std::process::exit(130));

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::run(&cli, start) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Render a clap failure.
///
/// Clap prints its own message unless the invocation asked for `--format
/// json` before parsing fell over, in which case the failure becomes the
/// same structured envelope every other error uses. Help and version
/// requests always go through clap.
fn report_parse_failure(err: &clap::Error, wants_json: bool) -> ExitCode {
    use clap::error::ErrorKind;

    if !wants_json || matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        err.exit();
    }

    let mapped = match err.kind() {
        // Covers a repeated --format among other conflicts
        ErrorKind::ArgumentConflict => QuernError::DuplicateFormat,
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument => QuernError::UsageError(err.to_string()),
        _ => QuernError::Other(err.to_string()),
    };
    eprintln!("{}", mapped.to_json());
    ExitCode::from(mapped.exit_code() as u8)
}

/// Whether argv asks for JSON output, checked before clap runs so parse
/// failures can honor it.
fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format" => {
                if args.next().as_deref() == Some("json") {
                    return true;
                }
            }
            "--format=json" => return true,
            _ => {}
        }
    }
    false
}
