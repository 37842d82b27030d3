//! Vault configuration for quern
//!
//! Configuration is stored in `.quern/config.toml`. The similarity threshold
//! and the relevance weights are per-vault knobs, not constants.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{QuernError, Result};

/// Current vault format version
pub const VAULT_FORMAT_VERSION: u32 = 1;

/// Vault configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Vault format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Note folder layout
    #[serde(default)]
    pub folders: FoldersConfig,

    /// Near-duplicate detection parameters
    #[serde(default)]
    pub similarity: SimilarityConfig,

    /// Relevance ranking parameters
    #[serde(default)]
    pub relevance: RelevanceConfig,
}

impl Default for VaultConfig {
    fn default() -> Self {
        VaultConfig {
            version: default_version(),
            folders: FoldersConfig::default(),
            similarity: SimilarityConfig::default(),
            relevance: RelevanceConfig::default(),
        }
    }
}

/// Configuration for the vault's note folders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoldersConfig {
    /// Folder holding finalized knowledge (the permanent scope)
    #[serde(default = "default_permanent_folder")]
    pub permanent: String,

    /// Folder holding in-flight candidate notes awaiting review
    #[serde(default = "default_inbox_folder")]
    pub inbox: String,
}

impl Default for FoldersConfig {
    fn default() -> Self {
        FoldersConfig {
            permanent: default_permanent_folder(),
            inbox: default_inbox_folder(),
        }
    }
}

/// Configuration for near-duplicate detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityConfig {
    /// Strict lower bound on reported similarity scores (default 0.5)
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Maximum number of matches reported per scan (default 5)
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        SimilarityConfig {
            threshold: default_threshold(),
            max_results: default_max_results(),
        }
    }
}

/// Configuration for relevance ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelevanceConfig {
    /// Weight of a title-token hit (default 2)
    #[serde(default = "default_title_weight")]
    pub title_weight: u32,

    /// Weight of a tag hit (default 1)
    #[serde(default = "default_tag_weight")]
    pub tag_weight: u32,

    /// Maximum number of ranked notes returned (default 20)
    #[serde(default = "default_relevance_limit")]
    pub limit: usize,
}

impl Default for RelevanceConfig {
    fn default() -> Self {
        RelevanceConfig {
            title_weight: default_title_weight(),
            tag_weight: default_tag_weight(),
            limit: default_relevance_limit(),
        }
    }
}

fn default_version() -> u32 {
    VAULT_FORMAT_VERSION
}

fn default_permanent_folder() -> String {
    "permanent".to_string()
}

fn default_inbox_folder() -> String {
    "inbox".to_string()
}

fn default_threshold() -> f64 {
    0.5
}

fn default_max_results() -> usize {
    5
}

fn default_title_weight() -> u32 {
    2
}

fn default_tag_weight() -> u32 {
    1
}

fn default_relevance_limit() -> usize {
    20
}

impl VaultConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: VaultConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| QuernError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
