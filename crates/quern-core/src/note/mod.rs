//! Note metadata: frontmatter parsing and the record type the rest of the
//! crate works with

pub mod frontmatter;
pub mod parse;
pub mod types;

use chrono::{DateTime, Utc};
use serde::Serialize;

pub use frontmatter::NoteFrontmatter;
pub use types::NoteType;

/// Metadata for one note in the vault
///
/// The basename (filename without extension) is the note's title. Everything
/// else comes from frontmatter and may be absent; a record with nothing but
/// path and basename is still valid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteRecord {
    /// Vault-relative path, e.g. `permanent/climate feedback loops.md`
    pub path: String,
    /// Filename without extension; doubles as the note title
    pub basename: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub note_type: Option<NoteType>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl NoteRecord {
    /// Record with no metadata beyond its location
    pub fn new(path: impl Into<String>, basename: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            basename: basename.into(),
            note_type: None,
            tags: Vec::new(),
            aliases: Vec::new(),
            created: None,
            updated: None,
        }
    }

    pub fn from_frontmatter(
        path: impl Into<String>,
        basename: impl Into<String>,
        fm: NoteFrontmatter,
    ) -> Self {
        Self {
            path: path.into(),
            basename: basename.into(),
            note_type: fm.note_type,
            tags: fm.tags,
            aliases: fm.aliases,
            created: fm.created,
            updated: fm.updated,
        }
    }

    pub fn with_type(mut self, note_type: NoteType) -> Self {
        self.note_type = Some(note_type);
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn is_atomic(&self) -> bool {
        self.note_type == Some(NoteType::Atomic)
    }
}
