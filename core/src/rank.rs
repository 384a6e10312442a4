//! The ranked outcome of a search.

use crate::score::ScoredCombination;
use serde::{Deserialize, Serialize};

/// A versioned, fully materialized search outcome.
///
/// `results` holds every unique scored combination, sorted ascending by
/// `sum_sd`; ties keep discovery order (the sort is stable and enumeration
/// order is fixed), so identical inputs always produce identical rankings.
///
/// # Incomplete results
///
/// A cancelled search still returns a ranking of everything scored so far,
/// with:
///
/// - `complete == false`
/// - `warnings` containing at least one human-readable explanation
///
/// The CLI prints warnings to stderr as `Warning: ...`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    /// Schema version (currently "1").
    pub version: String,
    /// Row labels, in input order; indexes `means`/`sds` of every result.
    pub labels: Vec<String>,
    /// Arrangement length: the minimum non-zero count across rows.
    pub k: usize,
    /// Per-row non-zero value counts, in row order.
    pub nonzero_counts: Vec<usize>,
    /// Raw candidate total (product of per-row arrangement counts).
    pub total_candidates: u64,
    /// Candidates actually examined; equals `total_candidates` unless the
    /// search was cancelled.
    pub candidates_examined: u64,
    /// Whether enumeration ran to completion.
    #[serde(default = "default_complete")]
    pub complete: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    /// Unique combinations, ascending by `sum_sd`.
    pub results: Vec<ScoredCombination>,
}

fn default_complete() -> bool {
    true
}

impl Ranking {
    pub const SCHEMA_VERSION: &'static str = "1";

    /// The best-scoring combination, if any candidate survived assembly.
    pub fn best(&self) -> Option<&ScoredCombination> {
        self.results.first()
    }

    /// The top `n` results (fewer if the ranking is shorter).
    pub fn top(&self, n: usize) -> &[ScoredCombination] {
        &self.results[..n.min(self.results.len())]
    }

    pub fn unique_count(&self) -> usize {
        self.results.len()
    }

    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
        self.complete = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(sum_sd: f64) -> ScoredCombination {
        ScoredCombination {
            columns: vec![vec![1.0]],
            means: vec![100.0],
            sds: vec![sum_sd],
            sum_sd,
        }
    }

    fn ranking(results: Vec<ScoredCombination>) -> Ranking {
        Ranking {
            version: Ranking::SCHEMA_VERSION.to_string(),
            labels: vec!["A".to_string()],
            k: 1,
            nonzero_counts: vec![1],
            total_candidates: results.len() as u64,
            candidates_examined: results.len() as u64,
            complete: true,
            warnings: Vec::new(),
            results,
        }
    }

    #[test]
    fn top_clamps_to_available_results() {
        let r = ranking(vec![scored(0.1), scored(0.2)]);
        assert_eq!(r.top(10).len(), 2);
        assert_eq!(r.top(1).len(), 1);
        assert_eq!(r.best().unwrap().sum_sd, 0.1);
    }

    #[test]
    fn warnings_mark_ranking_incomplete() {
        let mut r = ranking(vec![scored(0.1)]);
        assert!(r.complete);
        r.add_warning("cancelled".to_string());
        assert!(!r.complete);
        assert_eq!(r.warnings.len(), 1);
    }

    #[test]
    fn serde_roundtrip_preserves_ranking() {
        let r = ranking(vec![scored(0.4), scored(2.2)]);
        let json = serde_json::to_string(&r).expect("serialize ranking");
        let parsed: Ranking = serde_json::from_str(&json).expect("deserialize ranking");
        assert_eq!(r, parsed);
    }
}
