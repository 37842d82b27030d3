//! Keyword relevance ranking of atomic notes against a piece of source text

use std::collections::HashSet;
use std::time::Instant;

use serde::Serialize;

use crate::error::Result;
use crate::note::NoteRecord;
use crate::store::NoteStore;
use crate::text;

use super::SimilarityEngine;

/// Query tokens of this length or shorter are dropped before matching;
/// short words carry structure, not topic.
const SHORT_TOKEN_LEN: usize = 3;

/// One relevance-ranked note
#[derive(Debug, Clone, Serialize)]
pub struct RelevanceItem {
    #[serde(flatten)]
    pub record: NoteRecord,
    pub score: u32,
}

impl<S: NoteStore + ?Sized> SimilarityEngine<'_, S> {
    /// Rank atomic notes by how well their titles and tags match the
    /// keywords of `source_text`.
    ///
    /// Only notes typed atomic in their metadata are eligible; location in
    /// the vault plays no part. Title hits weigh more than tag hits, each
    /// title token counts every time it appears, and only notes with a
    /// positive score are returned, best first, at most `limit` of them.
    #[tracing::instrument(skip(self, source_text))]
    pub fn rank_relevant(&self, source_text: &str, limit: usize) -> Result<Vec<RelevanceItem>> {
        let start = Instant::now();
        let query: HashSet<String> = text::normalize(source_text)
            .into_iter()
            .filter(|token| token.chars().count() > SHORT_TOKEN_LEN)
            .collect();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let title_weight = self.config.relevance.title_weight;
        let tag_weight = self.config.relevance.tag_weight;

        let mut items = Vec::new();
        for record in self.store.list_notes(None)? {
            if !record.is_atomic() {
                continue;
            }
            let title_hits = text::normalize(&record.basename)
                .iter()
                .filter(|token| query.contains(*token))
                .count() as u32;
            let tag_hits = record
                .tags
                .iter()
                .filter(|tag| query.contains(&tag.to_lowercase()))
                .count() as u32;
            let score = title_hits * title_weight + tag_hits * tag_weight;
            if score > 0 {
                items.push(RelevanceItem { record, score });
            }
        }

        // Stable sort: ties keep listing order
        items.sort_by(|a, b| b.score.cmp(&a.score));
        items.truncate(limit);
        crate::trace_time!(start, "rank_relevant", ranked = items.len());
        Ok(items)
    }
}
