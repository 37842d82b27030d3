//! `quern init` command - create a new vault
//!
//! Idempotent and non-interactive: rerunning it leaves an existing config
//! and folder layout alone.

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use quern_core::error::Result;
use quern_core::store::Vault;

/// Execute the init command
pub fn execute(cli: &Cli, root: &Path) -> Result<()> {
    let vault = if let Some(path) = cli.vault.as_ref() {
        let resolved = if path.is_absolute() {
            path.clone()
        } else {
            root.join(path)
        };
        Vault::init(&resolved)?
    } else {
        Vault::init(root)?
    };

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "status": "ok",
                "vault": vault.root().display().to_string(),
                "message": "Vault initialized"
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Initialized quern vault at {}", vault.root().display());
            }
        }
        OutputFormat::Records => {
            println!(
                "H quern=1 records=1 vault={} mode=init status=ok",
                vault.root().display()
            );
        }
    }

    Ok(())
}
