//! `quern index` command - rebuild the duplicate index
//!
//! The index lives in memory and every run rebuilds it from the vault, so
//! this command is really a health check: it reports what a rebuild sees.

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use quern_core::error::Result;
use quern_core::index::DuplicateIndex;

/// Execute the index command
pub fn execute(cli: &Cli, root: &Path) -> Result<()> {
    let vault = super::discover_or_open_vault(cli, root)?;
    let scope = vault.config().folders.permanent.clone();

    let mut index = DuplicateIndex::new();
    index.build(&vault, Some(scope.as_str()))?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "status": "ok",
                "scope": scope,
                "titles_indexed": index.title_count(),
                "aliases_indexed": index.alias_count(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H quern=1 records=1 vault={} mode=index scope={} titles={} aliases={}",
                vault.root().display(),
                scope,
                index.title_count(),
                index.alias_count()
            );
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "Indexed {} titles, {} aliases from {}/",
                    index.title_count(),
                    index.alias_count(),
                    scope
                );
            }
        }
    }

    Ok(())
}
