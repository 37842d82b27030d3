//! Vault access: discovery, initialization, and note listing
//!
//! The scoring layers never touch the filesystem directly; they go through
//! [`NoteStore`], which keeps them testable and keeps the one expensive
//! operation (reading a body) explicit.

pub mod paths;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::VaultConfig;
use crate::error::{QuernError, Result};
use crate::note::{parse, NoteRecord};

/// Read access to a collection of notes
///
/// `list_notes` returns metadata only. Bodies are fetched one at a time via
/// `read_body` so callers control how much content they materialize.
pub trait NoteStore {
    /// List note records, optionally restricted to a folder prefix.
    ///
    /// Listing is total: notes with unreadable metadata are returned with
    /// basename only rather than dropped or turned into errors.
    fn list_notes(&self, scope: Option<&str>) -> Result<Vec<NoteRecord>>;

    /// Body of one note (frontmatter stripped)
    fn read_body(&self, path: &str) -> Result<String>;
}

/// A vault on disk: a directory tree of markdown notes marked by `.quern/`
#[derive(Debug)]
pub struct Vault {
    root: PathBuf,
    config: VaultConfig,
}

impl Vault {
    /// Open the vault at `path`, which must contain `.quern/`.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.join(paths::VAULT_DIR).is_dir() {
            return Err(QuernError::VaultNotFound {
                search_root: path.to_path_buf(),
            });
        }
        let config_path = paths::config_path(path);
        let config = if config_path.is_file() {
            VaultConfig::load(&config_path)?
        } else {
            VaultConfig::default()
        };
        Ok(Self {
            root: path.to_path_buf(),
            config,
        })
    }

    /// Find a vault by walking up from `start` and open it.
    pub fn discover(start: &Path) -> Result<Self> {
        let root = paths::discover_vault_root(start)?;
        debug!(vault = %root.display(), "discovered vault");
        Self::open(&root)
    }

    /// Create vault scaffolding at `root` and open it. Idempotent: existing
    /// config and folders are left alone.
    pub fn init(root: &Path) -> Result<Self> {
        fs::create_dir_all(root.join(paths::VAULT_DIR))?;
        let config_path = paths::config_path(root);
        if !config_path.is_file() {
            VaultConfig::default().save(&config_path)?;
        }
        let vault = Self::open(root)?;
        fs::create_dir_all(vault.root.join(&vault.config.folders.permanent))?;
        fs::create_dir_all(vault.root.join(&vault.config.folders.inbox))?;
        Ok(vault)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &VaultConfig {
        &self.config
    }

    /// Record for one file, degrading to basename-only when the file or its
    /// frontmatter cannot be read.
    fn record_for(&self, path: &Path) -> NoteRecord {
        let rel = path
            .strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();
        let basename = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        match fs::read_to_string(path) {
            Ok(content) => {
                let fm = parse::frontmatter_or_default(&content, &rel);
                NoteRecord::from_frontmatter(rel, basename, fm)
            }
            Err(e) => {
                warn!(path = %rel, error = %e, "unreadable note, keeping basename only");
                NoteRecord::new(rel, basename)
            }
        }
    }
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

impl NoteStore for Vault {
    #[tracing::instrument(skip(self), fields(vault = %self.root.display()))]
    fn list_notes(&self, scope: Option<&str>) -> Result<Vec<NoteRecord>> {
        let base = match scope {
            Some(prefix) => self.root.join(prefix),
            None => self.root.clone(),
        };
        let mut records = Vec::new();
        if !base.is_dir() {
            return Ok(records);
        }

        let walker = WalkDir::new(&base)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e));
        for entry in walker.filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if !path
                .extension()
                .is_some_and(|ext| ext == paths::NOTE_EXTENSION)
            {
                continue;
            }
            records.push(self.record_for(path));
        }

        // Newest first, path as tiebreaker; undated notes sort last
        records.sort_by(|a, b| b.created.cmp(&a.created).then_with(|| a.path.cmp(&b.path)));
        debug!(count = records.len(), "listed notes");
        Ok(records)
    }

    #[tracing::instrument(skip(self))]
    fn read_body(&self, path: &str) -> Result<String> {
        let full = self.root.join(path);
        if !full.is_file() {
            return Err(QuernError::NoteNotFound {
                path: path.to_string(),
            });
        }
        let content = fs::read_to_string(&full)?;
        Ok(parse::body_of(&content).to_string())
    }
}

/// In-memory store for callers that already hold their notes, and for tests
///
/// A record inserted without a body lists normally but fails `read_body`,
/// which is exactly how a vanished file behaves on disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<NoteRecord>,
    bodies: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: NoteRecord, body: impl Into<String>) {
        self.bodies.insert(record.path.clone(), body.into());
        self.records.push(record);
    }

    pub fn insert_metadata_only(&mut self, record: NoteRecord) {
        self.records.push(record);
    }
}

impl NoteStore for MemoryStore {
    fn list_notes(&self, scope: Option<&str>) -> Result<Vec<NoteRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| scope.is_none_or(|prefix| Path::new(&r.path).starts_with(prefix)))
            .cloned()
            .collect())
    }

    fn read_body(&self, path: &str) -> Result<String> {
        self.bodies
            .get(path)
            .cloned()
            .ok_or_else(|| QuernError::NoteNotFound {
                path: path.to_string(),
            })
    }
}
