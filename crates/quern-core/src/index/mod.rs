//! Rebuildable index of note identities for exact duplicate checks
//!
//! Titles and aliases are folded to lowercase at build time so lookups are
//! a plain hash probe. Fuzzy matching is the similarity engine's job, not
//! this one's.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::store::NoteStore;

/// Result of a title duplicate check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleDuplicate {
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
}

impl TitleDuplicate {
    fn none() -> Self {
        Self {
            exists: false,
            original_name: None,
        }
    }

    fn of(original_name: String) -> Self {
        Self {
            exists: true,
            original_name: Some(original_name),
        }
    }
}

/// Case-insensitive lookup over note titles and their aliases
#[derive(Debug, Default)]
pub struct DuplicateIndex {
    titles: HashSet<String>,
    aliases: HashMap<String, String>,
}

impl DuplicateIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from the store, discarding previous contents.
    ///
    /// Builds into local sets and swaps on success, so a failed listing
    /// leaves the index as it was rather than half-rebuilt.
    #[tracing::instrument(skip(self, store))]
    pub fn build<S: NoteStore + ?Sized>(&mut self, store: &S, scope: Option<&str>) -> Result<()> {
        let records = store.list_notes(scope)?;
        let mut titles = HashSet::new();
        let mut aliases = HashMap::new();
        for record in &records {
            titles.insert(record.basename.to_lowercase());
            for alias in &record.aliases {
                // Colliding aliases resolve to whichever note listed last
                let previous = aliases.insert(alias.to_lowercase(), record.basename.clone());
                if let Some(previous) = previous.filter(|p| p != &record.basename) {
                    debug!(alias = %alias, from = %previous, to = %record.basename, "alias reassigned");
                }
            }
        }
        debug!(
            notes = records.len(),
            titles = titles.len(),
            aliases = aliases.len(),
            "duplicate index rebuilt"
        );
        self.titles = titles;
        self.aliases = aliases;
        Ok(())
    }

    /// Check a prospective title against known titles, then aliases.
    ///
    /// A title hit reports the query's lowercase form as the colliding
    /// name; an alias hit reports the note that owns the alias. The result
    /// never depends on the query's casing.
    pub fn is_title_duplicate(&self, title: &str) -> TitleDuplicate {
        let needle = title.to_lowercase();
        if self.titles.contains(&needle) {
            return TitleDuplicate::of(needle);
        }
        if let Some(owner) = self.aliases.get(&needle) {
            return TitleDuplicate::of(owner.clone());
        }
        TitleDuplicate::none()
    }

    pub fn title_count(&self) -> usize {
        self.titles.len()
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty() && self.aliases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::NoteRecord;
    use crate::store::MemoryStore;

    fn indexed_store() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.insert(
            NoteRecord::new("permanent/climate feedback loops.md", "climate feedback loops")
                .with_aliases(&["feedback cycles"]),
            "",
        );
        store.insert(
            NoteRecord::new("permanent/grid storage.md", "grid storage"),
            "",
        );
        store
    }

    #[test]
    fn test_title_hit_reports_normalized_title() {
        let store = indexed_store();
        let mut index = DuplicateIndex::new();
        index.build(&store, None).unwrap();

        let result = index.is_title_duplicate("Climate Feedback Loops");
        assert!(result.exists);
        assert_eq!(
            result.original_name.as_deref(),
            Some("climate feedback loops")
        );
    }

    #[test]
    fn test_result_does_not_depend_on_query_casing() {
        let store = indexed_store();
        let mut index = DuplicateIndex::new();
        index.build(&store, None).unwrap();

        assert_eq!(
            index.is_title_duplicate("Climate Feedback Loops"),
            index.is_title_duplicate("climate feedback loops")
        );
        assert_eq!(
            index.is_title_duplicate("FEEDBACK CYCLES"),
            index.is_title_duplicate("feedback cycles")
        );
        assert_eq!(
            index.is_title_duplicate("Ocean Acidification"),
            index.is_title_duplicate("ocean acidification")
        );
    }

    #[test]
    fn test_alias_hit_reports_owning_note() {
        let store = indexed_store();
        let mut index = DuplicateIndex::new();
        index.build(&store, None).unwrap();

        let result = index.is_title_duplicate("Feedback Cycles");
        assert!(result.exists);
        assert_eq!(
            result.original_name.as_deref(),
            Some("climate feedback loops")
        );
    }

    #[test]
    fn test_miss_reports_nothing() {
        let store = indexed_store();
        let mut index = DuplicateIndex::new();
        index.build(&store, None).unwrap();

        let result = index.is_title_duplicate("ocean acidification");
        assert!(!result.exists);
        assert_eq!(result.original_name, None);
    }

    #[test]
    fn test_rebuild_discards_previous_contents() {
        let mut index = DuplicateIndex::new();
        index.build(&indexed_store(), None).unwrap();
        assert!(index.is_title_duplicate("grid storage").exists);

        let mut smaller = MemoryStore::new();
        smaller.insert(NoteRecord::new("permanent/only.md", "only"), "");
        index.build(&smaller, None).unwrap();

        assert!(!index.is_title_duplicate("grid storage").exists);
        assert!(index.is_title_duplicate("only").exists);
        assert_eq!(index.title_count(), 1);
        assert_eq!(index.alias_count(), 0);
    }

    #[test]
    fn test_alias_collision_last_writer_wins() {
        let mut store = MemoryStore::new();
        store.insert(
            NoteRecord::new("permanent/first.md", "first").with_aliases(&["shared"]),
            "",
        );
        store.insert(
            NoteRecord::new("permanent/second.md", "second").with_aliases(&["shared"]),
            "",
        );

        let mut index = DuplicateIndex::new();
        index.build(&store, None).unwrap();

        let result = index.is_title_duplicate("shared");
        assert_eq!(result.original_name.as_deref(), Some("second"));
        assert_eq!(index.alias_count(), 1);
    }

    #[test]
    fn test_scope_restricts_what_gets_indexed() {
        let mut store = MemoryStore::new();
        store.insert(NoteRecord::new("permanent/kept.md", "kept"), "");
        store.insert(NoteRecord::new("inbox/ignored.md", "ignored"), "");

        let mut index = DuplicateIndex::new();
        index.build(&store, Some("permanent")).unwrap();

        assert!(index.is_title_duplicate("kept").exists);
        assert!(!index.is_title_duplicate("ignored").exists);
    }

    #[test]
    fn test_empty_index() {
        let index = DuplicateIndex::new();
        assert!(index.is_empty());
        assert!(!index.is_title_duplicate("anything").exists);
    }
}
