//! Error handling for quern
//!
//! Every failure carries one of three non-zero exit codes: 1 for runtime
//! failures, 2 for a bad invocation, 3 for a missing vault or note. Under
//! `--format json` errors render as an `{"error": {...}}` envelope on
//! stderr instead of plain text.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong running a quern command
#[derive(Error, Debug)]
pub enum QuernError {
    // exit code 2: the invocation itself is wrong
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    // exit code 3: the vault or a note is missing
    #[error("vault not found (searched from {search_root:?})")]
    VaultNotFound { search_root: PathBuf },

    #[error("note not found: {path}")]
    NoteNotFound { path: String },

    // exit code 1: everything else
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl QuernError {
    /// Exit code this error maps to
    pub fn exit_code(&self) -> ExitCode {
        match self {
            QuernError::UnknownFormat(_)
            | QuernError::DuplicateFormat
            | QuernError::UsageError(_) => ExitCode::Usage,

            QuernError::VaultNotFound { .. } | QuernError::NoteNotFound { .. } => ExitCode::Data,

            QuernError::Io(_)
            | QuernError::Yaml(_)
            | QuernError::Json(_)
            | QuernError::Toml(_)
            | QuernError::Other(_) => ExitCode::Failure,
        }
    }

    /// Structured form for `--format json` error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }

    /// Stable machine-readable identifier for the error kind
    fn error_type(&self) -> &'static str {
        match self {
            QuernError::UnknownFormat(_) => "unknown_format",
            QuernError::DuplicateFormat => "duplicate_format",
            QuernError::UsageError(_) => "usage_error",
            QuernError::VaultNotFound { .. } => "vault_not_found",
            QuernError::NoteNotFound { .. } => "note_not_found",
            QuernError::Io(_) => "io_error",
            QuernError::Yaml(_) => "yaml_error",
            QuernError::Json(_) => "json_error",
            QuernError::Toml(_) => "toml_error",
            QuernError::Other(_) => "other",
        }
    }
}

/// Process exit codes quern commits to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    /// Runtime failure
    Failure = 1,
    /// Bad flags or arguments
    Usage = 2,
    /// Missing vault or note
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

pub type Result<T> = std::result::Result<T, QuernError>;
