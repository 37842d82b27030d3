//! Set-overlap similarity scoring for near-duplicate detection

pub mod relevance;

use std::collections::HashSet;
use std::fmt;
use std::time::Instant;

use serde::Serialize;
use tracing::warn;

use crate::config::VaultConfig;
use crate::error::Result;
use crate::note::NoteRecord;
use crate::store::NoteStore;
use crate::text;

/// Jaccard coefficient between two shingle sets (0.0 to 1.0).
///
/// Either set being empty scores 0.0; nothing to compare is not a match.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let shared = a.intersection(b).count();
    let union = a.len() + b.len() - shared;
    shared as f64 / union as f64
}

/// Which signal produced a match's score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchReason {
    Title,
    Content,
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchReason::Title => write!(f, "title"),
            MatchReason::Content => write!(f, "content"),
        }
    }
}

/// One near-duplicate hit
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityMatch {
    #[serde(flatten)]
    pub record: NoteRecord,
    pub score: f64,
    pub reason: MatchReason,
}

/// Scoring engine over a note store
///
/// Holds no note data itself; every call re-reads the store, so results
/// always reflect the store's current state.
pub struct SimilarityEngine<'a, S: NoteStore + ?Sized> {
    store: &'a S,
    config: &'a VaultConfig,
}

impl<'a, S: NoteStore + ?Sized> SimilarityEngine<'a, S> {
    pub fn new(store: &'a S, config: &'a VaultConfig) -> Self {
        Self { store, config }
    }

    /// Find stored notes whose title or content nearly duplicates `content`.
    ///
    /// Notes in the configured permanent folder are compared by title only;
    /// their bodies are never read. The caller-supplied `extra_candidates`
    /// are additionally compared by full body, with a read failure degrading
    /// that candidate to its title signal. A path in both pools is scored
    /// once, as a candidate.
    ///
    /// Scores must strictly exceed `threshold`; results come back best
    /// first, capped at the configured maximum.
    #[tracing::instrument(skip(self, content, extra_candidates), fields(extras = extra_candidates.len()))]
    pub fn find_similar(
        &self,
        content: &str,
        threshold: f64,
        extra_candidates: &[NoteRecord],
        exclude_path: Option<&str>,
    ) -> Result<Vec<SimilarityMatch>> {
        let start = Instant::now();
        let query = text::shingles(content, text::DEFAULT_SHINGLE_SIZE);
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let mut matches = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        for candidate in extra_candidates {
            if exclude_path == Some(candidate.path.as_str()) {
                continue;
            }
            if !seen.insert(candidate.path.as_str()) {
                continue;
            }
            let body = match self.store.read_body(&candidate.path) {
                Ok(body) => Some(body),
                Err(e) => {
                    warn!(path = %candidate.path, error = %e, "candidate body unreadable, comparing title only");
                    None
                }
            };
            if let Some(m) = score_candidate(&query, candidate, body.as_deref(), threshold) {
                matches.push(m);
            }
        }

        let permanent = self.config.folders.permanent.as_str();
        for record in self.store.list_notes(Some(permanent))? {
            if exclude_path == Some(record.path.as_str()) {
                continue;
            }
            if seen.contains(record.path.as_str()) {
                continue;
            }
            if let Some(m) = score_candidate(&query, &record, None, threshold) {
                matches.push(m);
            }
        }

        // Scores are Jaccard values, never NaN
        matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap());
        matches.truncate(self.config.similarity.max_results);
        crate::trace_time!(start, "find_similar", matches = matches.len());
        Ok(matches)
    }
}

/// Score one candidate against the query shingles, keeping whichever of the
/// title and body signals is stronger. Ties keep the title reason; the body
/// signal has to beat it outright.
fn score_candidate(
    query: &HashSet<String>,
    record: &NoteRecord,
    body: Option<&str>,
    threshold: f64,
) -> Option<SimilarityMatch> {
    let title_shingles = text::shingles(&record.basename, text::DEFAULT_SHINGLE_SIZE);
    let mut score = jaccard(query, &title_shingles);
    let mut reason = MatchReason::Title;

    if let Some(body) = body {
        let body_shingles = text::shingles(body, text::DEFAULT_SHINGLE_SIZE);
        let body_score = jaccard(query, &body_shingles);
        if body_score > score {
            score = body_score;
            reason = MatchReason::Content;
        }
    }

    if score > threshold {
        Some(SimilarityMatch {
            record: record.clone(),
            score,
            reason,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn shingle(text: &str) -> HashSet<String> {
        text::shingles(text, text::DEFAULT_SHINGLE_SIZE)
    }

    fn vault_config() -> VaultConfig {
        VaultConfig::default()
    }

    #[test]
    fn test_jaccard_identical_sets() {
        let a = shingle("solar panel efficiency depends on temperature");
        assert!((jaccard(&a, &a) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_jaccard_empty_set_scores_zero() {
        let a = shingle("solar panel efficiency");
        let empty = HashSet::new();
        assert_eq!(jaccard(&a, &empty), 0.0);
        assert_eq!(jaccard(&empty, &a), 0.0);
        assert_eq!(jaccard(&empty, &empty), 0.0);
    }

    #[test]
    fn test_jaccard_is_symmetric() {
        let a = shingle("energy storage economics");
        let b = shingle("economics of grid energy storage");
        assert_eq!(jaccard(&a, &b), jaccard(&b, &a));
    }

    #[test]
    fn test_jaccard_disjoint_sets() {
        let a = shingle("medieval trade routes");
        let b = shingle("quantum error correction");
        assert_eq!(jaccard(&a, &b), 0.0);
    }

    #[test]
    fn test_find_similar_prefers_near_identical_body() {
        let mut store = MemoryStore::new();
        let body = "Solar panel efficiency degrades roughly half a percent \
                    for every degree above twenty five celsius.";
        store.insert(
            NoteRecord::new("inbox/candidate a.md", "untitled draft one"),
            format!("{body} It also varies by cell chemistry."),
        );
        store.insert(
            NoteRecord::new("inbox/candidate b.md", "medieval trade routes"),
            "Venetian galleys carried spices from Alexandria to the lagoon.",
        );
        let extras = store.list_notes(None).unwrap();

        let config = vault_config();
        let engine = SimilarityEngine::new(&store, &config);
        let matches = engine.find_similar(body, 0.5, &extras, None).unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].record.path, "inbox/candidate a.md");
        assert_eq!(matches[0].reason, MatchReason::Content);
        assert!(matches[0].score > 0.5);
    }

    #[test]
    fn test_find_similar_empty_query_returns_nothing() {
        let mut store = MemoryStore::new();
        store.insert(
            NoteRecord::new("permanent/anything.md", "anything at all"),
            "Some body.",
        );
        let config = vault_config();
        let engine = SimilarityEngine::new(&store, &config);

        assert!(engine.find_similar("", 0.0, &[], None).unwrap().is_empty());
        assert!(engine
            .find_similar("!!! ???", 0.0, &[], None)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_find_similar_threshold_is_strict() {
        let mut store = MemoryStore::new();
        store.insert(
            NoteRecord::new("permanent/grid storage economics.md", "grid storage economics"),
            "",
        );
        let config = vault_config();
        let engine = SimilarityEngine::new(&store, &config);

        // Identical title scores exactly 1.0, which does not clear a 1.0 bar
        let at_bar = engine
            .find_similar("grid storage economics", 1.0, &[], None)
            .unwrap();
        assert!(at_bar.is_empty());

        let below_bar = engine
            .find_similar("grid storage economics", 0.99, &[], None)
            .unwrap();
        assert_eq!(below_bar.len(), 1);
        assert_eq!(below_bar[0].reason, MatchReason::Title);
    }

    #[test]
    fn test_find_similar_excludes_given_path() {
        let mut store = MemoryStore::new();
        store.insert(
            NoteRecord::new("permanent/grid storage.md", "grid storage"),
            "",
        );
        let config = vault_config();
        let engine = SimilarityEngine::new(&store, &config);

        let matches = engine
            .find_similar("grid storage", 0.1, &[], Some("permanent/grid storage.md"))
            .unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_find_similar_caps_results() {
        let mut store = MemoryStore::new();
        for i in 0..8 {
            store.insert(
                NoteRecord::new(
                    format!("permanent/grid storage {i}.md"),
                    "grid storage economics",
                ),
                "",
            );
        }
        let config = vault_config();
        let engine = SimilarityEngine::new(&store, &config);

        let matches = engine
            .find_similar("grid storage economics", 0.5, &[], None)
            .unwrap();
        assert_eq!(matches.len(), config.similarity.max_results);
    }

    #[test]
    fn test_find_similar_sorts_best_first() {
        let mut store = MemoryStore::new();
        store.insert(
            NoteRecord::new("permanent/solar panel efficiency.md", "solar panel efficiency"),
            "",
        );
        store.insert(
            NoteRecord::new(
                "permanent/solar panel efficiency curves.md",
                "solar panel efficiency curves",
            ),
            "",
        );
        let config = vault_config();
        let engine = SimilarityEngine::new(&store, &config);

        let matches = engine
            .find_similar("solar panel efficiency", 0.1, &[], None)
            .unwrap();
        assert_eq!(matches.len(), 2);
        assert!(matches[0].score >= matches[1].score);
        assert_eq!(matches[0].record.basename, "solar panel efficiency");
    }

    #[test]
    fn test_find_similar_batch_overrides_stored_duplicate() {
        // The same path appearing both stored and in the batch must be
        // scored once, with the batch's body signal in effect.
        let mut store = MemoryStore::new();
        let body = "Thermal mass smooths daily temperature swings in buildings.";
        store.insert(
            NoteRecord::new("permanent/thermal mass.md", "thermal mass"),
            body,
        );
        let extras = store.list_notes(None).unwrap();

        let config = vault_config();
        let engine = SimilarityEngine::new(&store, &config);
        let matches = engine.find_similar(body, 0.5, &extras, None).unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].reason, MatchReason::Content);
    }

    #[test]
    fn test_find_similar_degrades_on_unreadable_body() {
        let mut store = MemoryStore::new();
        store.insert_metadata_only(NoteRecord::new(
            "inbox/grid storage economics.md",
            "grid storage economics",
        ));
        let extras = store.list_notes(None).unwrap();

        let config = vault_config();
        let engine = SimilarityEngine::new(&store, &config);
        let matches = engine
            .find_similar("grid storage economics", 0.5, &extras, None)
            .unwrap();

        // Title still matches even though the body read failed
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].reason, MatchReason::Title);
        assert!((matches[0].score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_score_candidate_tie_keeps_title_reason() {
        let record = NoteRecord::new("inbox/grid storage.md", "grid storage");
        let query = shingle("grid storage");
        // Body identical to the title produces the same score; the stronger
        // claim ("the content matches") requires a strictly better score.
        let m = score_candidate(&query, &record, Some("grid storage"), 0.1).unwrap();
        assert_eq!(m.reason, MatchReason::Title);
    }
}
