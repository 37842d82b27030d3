//! Text normalization and shingling for similarity comparison

use std::collections::HashSet;

/// Shingle window width used for title and body comparison
pub const DEFAULT_SHINGLE_SIZE: usize = 2;

/// Normalize free text into lowercase tokens.
///
/// Characters outside the alphanumeric/whitespace class are stripped rather
/// than treated as split points, so "trade-offs" normalizes to a single
/// token "tradeoffs". Runs of whitespace collapse. Input that is entirely
/// punctuation or whitespace yields no tokens.
pub fn normalize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .map(|s| s.to_string())
        .collect()
}

/// Build the shingle set of a text: every window of `n` consecutive
/// normalized tokens, joined with a single space.
///
/// Texts shorter than `n` tokens fall back to the set of individual tokens
/// so that short titles still produce comparable sets.
pub fn shingles(text: &str, n: usize) -> HashSet<String> {
    let n = n.max(1);
    let tokens = normalize(text);

    if tokens.len() < n {
        return tokens.into_iter().collect();
    }

    tokens.windows(n).map(|w| w.join(" ")).collect()
}
