//! Command dispatch for quern

pub mod check;
pub mod index;
pub mod init;
pub mod list;
pub mod records;
pub mod relevant;
pub mod similar;

use std::env;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, Commands};
use quern_core::error::Result;
use quern_core::store::{NoteStore, Vault};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    // Determine the root directory
    let root = resolve_root(cli.root.clone());

    debug!(elapsed = ?start.elapsed(), "resolve_root");

    match &cli.command {
        None => {
            println!("quern {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Duplicate detection and retrieval for markdown note vaults.");
            println!();
            println!("Run `quern --help` for usage information.");
            Ok(())
        }
        Some(Commands::Init) => init::execute(cli, &root),
        Some(Commands::List { scope, r#type, tag }) => {
            list::execute(cli, &root, scope.as_deref(), *r#type, tag.as_deref())
        }
        Some(Commands::Index) => index::execute(cli, &root),
        Some(Commands::Check { title }) => check::execute(cli, &root, title),
        Some(Commands::Similar {
            text,
            file,
            threshold,
            batch,
            exclude,
        }) => similar::execute(
            cli,
            &root,
            text.as_deref(),
            file.as_deref(),
            *threshold,
            batch.as_deref(),
            exclude.as_deref(),
        ),
        Some(Commands::Relevant { text, file, limit }) => {
            relevant::execute(cli, &root, text.as_deref(), file.as_deref(), *limit)
        }
    }
}

/// Resolve the base directory for vault discovery: the --root flag if
/// given, otherwise the current working directory.
fn resolve_root(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Open a vault from --vault, or discover one from the root directory
pub fn discover_or_open_vault(cli: &Cli, root: &Path) -> Result<Vault> {
    if let Some(path) = &cli.vault {
        let resolved = if path.is_absolute() {
            path.clone()
        } else {
            root.join(path)
        };
        Vault::open(&resolved)
    } else {
        Vault::discover(root)
    }
}

/// Resolve the text a scoring command works on.
///
/// Precedence: a note named by `--file` (whose vault path is returned so
/// the caller can exclude it from results), then the positional argument,
/// then stdin.
pub fn resolve_text(
    vault: &Vault,
    text: Option<&str>,
    file: Option<&str>,
) -> Result<(String, Option<String>)> {
    if let Some(path) = file {
        let body = vault.read_body(path)?;
        return Ok((body, Some(path.to_string())));
    }
    if let Some(text) = text {
        return Ok((text.to_string(), None));
    }
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok((buffer, None))
}
