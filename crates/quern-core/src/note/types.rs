use crate::error::{QuernError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Note type classifier read from frontmatter
///
/// Only atomic notes participate in relevance ranking; the classifier comes
/// from metadata, never from a note's location in the vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteType {
    /// A single distilled idea, meant to stand alone
    Atomic,
    /// Long-form source material that atomic notes are distilled from
    Source,
}

impl NoteType {
    /// All valid note types
    pub const VALID_TYPES: &'static [&'static str] = &["atomic", "source"];
}

impl FromStr for NoteType {
    type Err = QuernError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "atomic" => Ok(NoteType::Atomic),
            "source" => Ok(NoteType::Source),
            other => Err(QuernError::Other(format!(
                "unknown note type: {} (expected: {})",
                other,
                Self::VALID_TYPES.join(", ")
            ))),
        }
    }
}

impl fmt::Display for NoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteType::Atomic => write!(f, "atomic"),
            NoteType::Source => write!(f, "source"),
        }
    }
}
