//! `quern check` command - exact duplicate check for a prospective title
//!
//! Rebuilds the duplicate index over the permanent folder and probes it
//! with the given title. Exact and alias collisions only; `quern similar`
//! covers fuzzy overlap.

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use crate::commands::records::escape_quotes;
use quern_core::error::Result;
use quern_core::index::DuplicateIndex;

/// Execute the check command
pub fn execute(cli: &Cli, root: &Path, title: &str) -> Result<()> {
    let vault = super::discover_or_open_vault(cli, root)?;
    let scope = vault.config().folders.permanent.clone();

    let mut index = DuplicateIndex::new();
    index.build(&vault, Some(scope.as_str()))?;
    let result = index.is_title_duplicate(title);

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Human => {
            if result.exists {
                // An alias hit names a different note than the queried title
                match result.original_name.as_deref() {
                    Some(original) if !original.eq_ignore_ascii_case(title) => {
                        println!("\"{}\" is an alias of \"{}\"", title, original);
                    }
                    _ => println!("\"{}\" already exists", title),
                }
            } else if !cli.quiet {
                println!("\"{}\" is available", title);
            }
        }
        OutputFormat::Records => {
            let original = result
                .original_name
                .as_deref()
                .map(escape_quotes)
                .unwrap_or_else(|| "-".to_string());
            println!(
                "H quern=1 records=1 vault={} mode=check exists={} original=\"{}\"",
                vault.root().display(),
                result.exists,
                original
            );
        }
    }

    Ok(())
}
