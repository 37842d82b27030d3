use std::path::{Path, PathBuf};

use crate::error::{QuernError, Result};

/// Directory that marks a vault root
pub const VAULT_DIR: &str = ".quern";

/// Config file inside the vault directory
pub const CONFIG_FILE: &str = "config.toml";

/// File extension for notes
pub const NOTE_EXTENSION: &str = "md";

/// Walk up from `start` looking for a directory containing `.quern/`.
///
/// Returns the vault root (the directory that contains `.quern`), not the
/// marker directory itself.
pub fn discover_vault_root(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(VAULT_DIR);
        if candidate.is_dir() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(QuernError::VaultNotFound {
                search_root: start.to_path_buf(),
            });
        }
    }
}

/// Path of the vault's config file
pub fn config_path(vault_root: &Path) -> PathBuf {
    vault_root.join(VAULT_DIR).join(CONFIG_FILE)
}
