//! `quern similar` command - near-duplicate scan for a piece of content
//!
//! Compares the query against permanent note titles, and against the full
//! bodies of any `--batch` notes. Input comes from a positional argument,
//! `--file`, or stdin.

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use crate::commands::records::escape_quotes;
use quern_core::error::Result;
use quern_core::similarity::{SimilarityEngine, SimilarityMatch};
use quern_core::store::{NoteStore, Vault};

/// Execute the similar command
pub fn execute(
    cli: &Cli,
    root: &Path,
    text: Option<&str>,
    file: Option<&str>,
    threshold: Option<f64>,
    batch: Option<&str>,
    exclude: Option<&str>,
) -> Result<()> {
    let vault = super::discover_or_open_vault(cli, root)?;
    let (content, own_path) = super::resolve_text(&vault, text, file)?;

    // A note compared against the vault must not match itself
    let exclude = exclude.map(str::to_string).or(own_path);

    let extras = match batch {
        Some(prefix) => vault.list_notes(Some(prefix))?,
        None => Vec::new(),
    };

    let threshold = threshold.unwrap_or(vault.config().similarity.threshold);
    let engine = SimilarityEngine::new(&vault, vault.config());
    let matches = engine.find_similar(&content, threshold, &extras, exclude.as_deref())?;

    print_matches(cli, &vault, threshold, &matches)?;
    Ok(())
}

fn print_matches(
    cli: &Cli,
    vault: &Vault,
    threshold: f64,
    matches: &[SimilarityMatch],
) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(matches)?);
        }
        OutputFormat::Human => {
            if matches.is_empty() {
                if !cli.quiet {
                    println!("No similar notes found");
                }
            } else {
                for m in matches {
                    println!(
                        "{:.2} [{}] {} ({})",
                        m.score, m.reason, m.record.basename, m.record.path
                    );
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "H quern=1 records=1 vault={} mode=similar threshold={} matches={}",
                vault.root().display(),
                threshold,
                matches.len()
            );
            for m in matches {
                println!(
                    "M \"{}\" score={:.4} reason={}",
                    escape_quotes(&m.record.path),
                    m.score,
                    m.reason
                );
            }
        }
    }
    Ok(())
}
