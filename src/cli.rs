//! CLI argument parsing for quern
//!
//! Uses clap for argument parsing.
//! Supports global flags: --root, --vault, --format, --quiet, --verbose

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use quern_core::format::OutputFormat;
use quern_core::note::NoteType;

/// Quern - duplicate detection and retrieval for markdown note vaults
#[derive(Parser, Debug)]
#[command(name = "quern")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving the vault
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit vault root path
    #[arg(long, global = true, env = "QUERN_VAULT")]
    pub vault: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new quern vault
    Init,

    /// List notes
    List {
        /// Restrict to a folder prefix within the vault
        #[arg(long, short)]
        scope: Option<String>,

        /// Filter by note type
        #[arg(long, short = 'T', value_parser = parse_note_type)]
        r#type: Option<NoteType>,

        /// Filter by tag
        #[arg(long, short)]
        tag: Option<String>,
    },

    /// Rebuild the duplicate index and report its size
    Index,

    /// Check a prospective title against existing titles and aliases
    Check {
        /// Title to check
        title: String,
    },

    /// Find stored notes that nearly duplicate the given content
    Similar {
        /// Query text (omit to use --file or stdin)
        text: Option<String>,

        /// Read query content from a note in the vault (that note is
        /// excluded from results)
        #[arg(long, short = 'f')]
        file: Option<String>,

        /// Minimum score a match must strictly exceed (0.0 to 1.0)
        #[arg(long)]
        threshold: Option<f64>,

        /// Folder prefix whose notes are also compared by full content
        #[arg(long)]
        batch: Option<String>,

        /// Exclude a note path from results
        #[arg(long)]
        exclude: Option<String>,
    },

    /// Rank atomic notes by keyword relevance to the given text
    Relevant {
        /// Source text (omit to use --file or stdin)
        text: Option<String>,

        /// Read source content from a note in the vault
        #[arg(long, short = 'f')]
        file: Option<String>,

        /// Maximum number of notes to return
        #[arg(long, short)]
        limit: Option<usize>,
    },
}

/// Parse note type from string
fn parse_note_type(s: &str) -> Result<NoteType, String> {
    s.parse::<NoteType>().map_err(|e| e.to_string())
}

/// Parse output format from string
///
/// OutputFormat lives in quern-core, so it goes through a value parser
/// rather than a ValueEnum impl.
fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
