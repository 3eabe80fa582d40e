//! # Suggestion Engine
//!
//! Ranks catalog entries by how close their identifier is to a query. It backs
//! the "did you mean" list for a badge miss (candidates scoped to one
//! category) and the global `search` command (candidates from the whole
//! catalog).
//!
//! ## Scoring
//!
//! Scores live in `[0, 1]`, 1.0 meaning the identifiers are equal after case
//! folding. The score is the larger of two numbers:
//!
//! - the [`SimilarityMetric`]. The default, [`EditSimilarity`], is
//!   optimal-string-alignment distance normalized as `1 - d / (len + 1)`, where
//!   `len` is the longer of the two strings. One edit always scores at least
//!   0.5, so [`DEFAULT_THRESHOLD`] keeps every single typo.
//! - a containment floor. When the identifier contains the query
//!   (`play` in `play-store`) the candidate scores
//!   `threshold + (1 - threshold) * |query| / |id|`, which is never below the
//!   threshold and only reaches 1.0 on an exact match.
//!
//! Candidates under the threshold are dropped. The rest are sorted by
//! descending score with a stable sort, so equal scores keep catalog order.

use crate::normalize::display_label;
use std::cmp::Ordering;

pub const DEFAULT_THRESHOLD: f64 = 0.5;
pub const DEFAULT_LIMIT: usize = 5;

/// A catalog entry offered to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub category: &'a str,
    pub id: &'a str,
    pub value: &'a str,
}

impl<'a> Candidate<'a> {
    pub fn new(category: &'a str, id: &'a str, value: &'a str) -> Self {
        Self {
            category,
            id,
            value,
        }
    }

    pub fn label(&self) -> String {
        display_label(self.id)
    }
}

/// A ranked candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub category: String,
    pub id: String,
    pub label: String,
    pub value: String,
    pub score: f64,
}

/// Similarity between two case-folded strings, in `[0, 1]`.
pub trait SimilarityMetric {
    fn similarity(&self, query: &str, candidate: &str) -> f64;
}

/// Normalized optimal-string-alignment similarity. A transposition
/// (`discrod` / `discord`) costs one edit.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditSimilarity;

impl SimilarityMetric for EditSimilarity {
    fn similarity(&self, query: &str, candidate: &str) -> f64 {
        if query == candidate {
            return 1.0;
        }
        let distance = strsim::osa_distance(query, candidate);
        let longest = query.chars().count().max(candidate.chars().count());
        1.0 - distance as f64 / (longest + 1) as f64
    }
}

/// Ranks `candidates` against `query` using [`EditSimilarity`].
pub fn suggest(
    candidates: &[Candidate<'_>],
    query: &str,
    limit: usize,
    threshold: f64,
) -> Vec<Suggestion> {
    suggest_with(&EditSimilarity, candidates, query, limit, threshold)
}

/// Ranks `candidates` against `query` with any metric.
pub fn suggest_with<M: SimilarityMetric + ?Sized>(
    metric: &M,
    candidates: &[Candidate<'_>],
    query: &str,
    limit: usize,
    threshold: f64,
) -> Vec<Suggestion> {
    let query = query.trim().to_lowercase();
    if query.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &Candidate<'_>)> = candidates
        .iter()
        .filter_map(|candidate| {
            let score = score(metric, &query, &candidate.id.to_lowercase(), threshold);
            (score >= threshold).then_some((score, candidate))
        })
        .collect();

    // sort_by is stable: equal scores keep candidate order
    scored.sort_by(|(a, _), (b, _)| b.partial_cmp(a).unwrap_or(Ordering::Equal));

    tracing::debug!(
        query = %query,
        candidates = candidates.len(),
        matched = scored.len(),
        "ranked suggestions"
    );

    scored
        .into_iter()
        .take(limit)
        .map(|(score, candidate)| Suggestion {
            category: candidate.category.to_string(),
            id: candidate.id.to_string(),
            label: candidate.label(),
            value: candidate.value.to_string(),
            score,
        })
        .collect()
}

fn score<M: SimilarityMetric + ?Sized>(
    metric: &M,
    query: &str,
    candidate: &str,
    threshold: f64,
) -> f64 {
    let similarity = metric.similarity(query, candidate).clamp(0.0, 1.0);
    if !candidate.contains(query) {
        return similarity;
    }
    let coverage = query.chars().count() as f64 / candidate.chars().count() as f64;
    let floor = threshold + (1.0 - threshold) * coverage;
    similarity.max(floor.min(1.0))
}
