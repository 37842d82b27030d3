//! `quern relevant` command - rank atomic notes against source text
//!
//! Keyword scoring over titles and tags. Input comes from a positional
//! argument, `--file`, or stdin.

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use crate::commands::records::{escape_quotes, format_tags};
use quern_core::error::Result;
use quern_core::similarity::SimilarityEngine;

/// Execute the relevant command
pub fn execute(
    cli: &Cli,
    root: &Path,
    text: Option<&str>,
    file: Option<&str>,
    limit: Option<usize>,
) -> Result<()> {
    let vault = super::discover_or_open_vault(cli, root)?;
    let (content, _own_path) = super::resolve_text(&vault, text, file)?;

    let limit = limit.unwrap_or(vault.config().relevance.limit);
    let engine = SimilarityEngine::new(&vault, vault.config());
    let items = engine.rank_relevant(&content, limit)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        OutputFormat::Human => {
            if items.is_empty() {
                if !cli.quiet {
                    println!("No relevant notes found");
                }
            } else {
                for item in &items {
                    println!(
                        "{:>3} {} ({})",
                        item.score, item.record.basename, item.record.path
                    );
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "H quern=1 records=1 vault={} mode=relevant limit={} results={}",
                vault.root().display(),
                limit,
                items.len()
            );
            for item in &items {
                println!(
                    "R \"{}\" score={} tags={}",
                    escape_quotes(&item.record.path),
                    item.score,
                    format_tags(&item.record.tags)
                );
            }
        }
    }

    Ok(())
}
