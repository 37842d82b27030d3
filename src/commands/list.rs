//! `quern list` command - list notes
//!
//! Deterministic ordering (newest created first, then path), with optional
//! scope, type, and tag filters.

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use crate::commands::records::{escape_quotes, format_tags};
use quern_core::error::Result;
use quern_core::note::{NoteRecord, NoteType};
use quern_core::store::NoteStore;

/// Execute the list command
pub fn execute(
    cli: &Cli,
    root: &Path,
    scope: Option<&str>,
    note_type: Option<NoteType>,
    tag: Option<&str>,
) -> Result<()> {
    let vault = super::discover_or_open_vault(cli, root)?;
    let mut notes = vault.list_notes(scope)?;

    // Apply filters
    if let Some(nt) = note_type {
        notes.retain(|n| n.note_type == Some(nt));
    }

    if let Some(tag) = tag {
        notes.retain(|n| n.tags.iter().any(|t| t == tag));
    }

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&notes)?);
        }
        OutputFormat::Human => {
            if notes.is_empty() {
                if !cli.quiet {
                    println!("No notes found");
                }
            } else {
                for note in &notes {
                    println!("{} [{}] {}", note.path, type_indicator(note), note.basename);
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "H quern=1 records=1 vault={} mode=list notes={}",
                vault.root().display(),
                notes.len()
            );
            for note in &notes {
                let type_field = note
                    .note_type
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "N \"{}\" {} tags={}",
                    escape_quotes(&note.path),
                    type_field,
                    format_tags(&note.tags)
                );
            }
        }
    }

    Ok(())
}

fn type_indicator(note: &NoteRecord) -> &'static str {
    match note.note_type {
        Some(NoteType::Atomic) => "A",
        Some(NoteType::Source) => "S",
        None => "-",
    }
}
