//! The search engine: enumerate, deduplicate, score, rank.
//!
//! A search is a single pass. [`SearchPlan`] prepares the rows and exposes
//! the raw candidate total so a caller can warn or abort before committing
//! to a combinatorially large enumeration; `run` then walks the cartesian
//! product of per-row arrangements, skips combinations whose canonical
//! column set was already seen, scores the survivors and returns them
//! ranked ascending by `sum_sd`.

use crate::arrange::{Arrangements, TupleCursor, arrangement_count, total_candidates};
use crate::combine::{CanonicalKey, assemble_columns};
use crate::config::{ConfigError, LimitBehavior, SearchConfig};
use crate::error_codes;
use crate::progress::{CancelToken, NoProgress, ProgressObserver};
use crate::rank::Ranking;
use crate::row::{PreparedRows, RowSet};
use crate::score::{ScoredCombination, score_columns};
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Errors produced by the search APIs.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SearchError {
    #[error("[BLOTOPT_SEARCH_001] no rows to search")]
    NoRows,

    #[error(
        "[BLOTOPT_SEARCH_002] row '{label}' has no non-zero values, so no arrangement exists. Suggestion: remove the row or correct its readings."
    )]
    EmptyRow { label: String },

    #[error(
        "[BLOTOPT_SEARCH_003] candidate total {total} exceeds the limit {limit}. Suggestion: raise `max_candidates` or set `on_limit_exceeded` to `proceed_anyway`."
    )]
    CandidateLimitExceeded { total: u64, limit: u64 },

    #[error("[BLOTOPT_SEARCH_004] invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error(
        "[BLOTOPT_SEARCH_005] internal error: {message}. Suggestion: report a bug with the input rows if possible."
    )]
    Internal { message: String },
}

impl SearchError {
    pub fn code(&self) -> &'static str {
        match self {
            SearchError::NoRows => error_codes::SEARCH_NO_ROWS,
            SearchError::EmptyRow { .. } => error_codes::SEARCH_EMPTY_ROW,
            SearchError::CandidateLimitExceeded { .. } => error_codes::SEARCH_CANDIDATE_LIMIT,
            SearchError::InvalidConfig(_) => error_codes::SEARCH_INVALID_CONFIG,
            SearchError::Internal { .. } => error_codes::SEARCH_INTERNAL,
        }
    }
}

/// A prepared search: rows stripped of zeros, `k` fixed, volume known.
///
/// Splitting preparation from execution lets callers inspect
/// [`total_candidates`](SearchPlan::total_candidates) first and decide
/// whether to enumerate at all.
#[derive(Debug, Clone)]
pub struct SearchPlan {
    prepared: PreparedRows,
    arrangement_counts: Vec<u64>,
    total: u64,
}

/// What one enumeration pass produced, before global dedup and ranking.
struct Enumerated {
    pairs: Vec<(CanonicalKey, ScoredCombination)>,
    examined: u64,
    cancelled: bool,
}

impl SearchPlan {
    pub fn new(rows: &RowSet) -> Result<SearchPlan, SearchError> {
        let prepared = rows.prepare()?;
        let arrangement_counts: Vec<u64> = prepared
            .rows
            .iter()
            .map(|row| arrangement_count(row.values.len(), prepared.k))
            .collect();
        let total = total_candidates(&arrangement_counts);
        Ok(SearchPlan {
            prepared,
            arrangement_counts,
            total,
        })
    }

    /// The common arrangement length: minimum non-zero count across rows.
    pub fn k(&self) -> usize {
        self.prepared.k
    }

    pub fn labels(&self) -> Vec<String> {
        self.prepared.rows.iter().map(|r| r.label.clone()).collect()
    }

    pub fn nonzero_counts(&self) -> Vec<usize> {
        self.prepared.rows.iter().map(|r| r.values.len()).collect()
    }

    /// Per-row ordered-selection counts (`n! / (n - k)!` each).
    pub fn arrangement_counts(&self) -> &[u64] {
        &self.arrangement_counts
    }

    /// Raw candidate total before deduplication, saturating at `u64::MAX`.
    pub fn total_candidates(&self) -> u64 {
        self.total
    }

    pub fn run(&self, config: &SearchConfig) -> Result<Ranking, SearchError> {
        self.run_with_observer(config, &NoProgress, &CancelToken::new())
    }

    pub fn run_with_observer(
        &self,
        config: &SearchConfig,
        observer: &dyn ProgressObserver,
        cancel: &CancelToken,
    ) -> Result<Ranking, SearchError> {
        config.validate()?;

        let mut warnings = Vec::new();
        if self.total > config.max_candidates {
            match config.on_limit_exceeded {
                LimitBehavior::ReturnError => {
                    return Err(SearchError::CandidateLimitExceeded {
                        total: self.total,
                        limit: config.max_candidates,
                    });
                }
                LimitBehavior::ProceedAnyway => {
                    warnings.push(format!(
                        "candidate total {} exceeds the configured limit {}; enumerating anyway",
                        self.total, config.max_candidates
                    ));
                }
            }
        }

        #[cfg(feature = "parallel")]
        let enumerated = self.enumerate_parallel(config, observer, cancel);
        #[cfg(not(feature = "parallel"))]
        let enumerated = self.enumerate_serial(config, observer, cancel);

        // Merge-then-dedupe: workers only deduplicate within their own
        // partition, so equal keys can reach this point once per partition.
        // First occurrence wins, which matches serial discovery order.
        let mut seen: FxHashSet<CanonicalKey> = FxHashSet::default();
        let mut results = Vec::new();
        for (key, scored) in enumerated.pairs {
            if seen.insert(key) {
                results.push(scored);
            }
        }
        // Stable: equal scores keep discovery order.
        results.sort_by(|a, b| a.sum_sd.total_cmp(&b.sum_sd));

        let mut ranking = Ranking {
            version: Ranking::SCHEMA_VERSION.to_string(),
            labels: self.labels(),
            k: self.prepared.k,
            nonzero_counts: self.nonzero_counts(),
            total_candidates: self.total,
            candidates_examined: enumerated.examined,
            complete: true,
            warnings,
            results,
        };
        if enumerated.cancelled {
            ranking.add_warning(format!(
                "search cancelled after {} of {} candidates",
                enumerated.examined, self.total
            ));
        }
        Ok(ranking)
    }

    #[cfg_attr(feature = "parallel", allow(dead_code))]
    fn enumerate_serial(
        &self,
        config: &SearchConfig,
        observer: &dyn ProgressObserver,
        cancel: &CancelToken,
    ) -> Enumerated {
        let k = self.prepared.k;
        let row_count = self.prepared.rows.len();
        let rows: Vec<&[f64]> = self
            .prepared
            .rows
            .iter()
            .map(|r| r.values.as_slice())
            .collect();

        let mut cursor = TupleCursor::new(&rows, k);
        let mut seen: FxHashSet<CanonicalKey> = FxHashSet::default();
        let mut pairs = Vec::new();
        let mut examined = 0u64;
        let mut cancelled = false;

        while cursor.advance() {
            examined += 1;
            if examined % config.progress_interval == 0 {
                observer.on_progress(examined, self.total);
                if cancel.is_cancelled() {
                    cancelled = true;
                    break;
                }
            }

            let arrangements = cursor.current().iter().map(|a| a.as_slice());
            let Some(columns) = assemble_columns(arrangements, k) else {
                continue;
            };
            let key = CanonicalKey::from_columns(&columns);
            if !seen.insert(key.clone()) {
                continue;
            }
            pairs.push((key, score_columns(columns, row_count)));
        }

        observer.on_progress(examined, self.total);
        Enumerated {
            pairs,
            examined,
            cancelled,
        }
    }

    /// Partitions the product by first-row arrangement; each partition runs
    /// the lazy sub-product over the remaining rows with a worker-local
    /// seen-set. Partition outputs are collected in first-row order, so the
    /// merged stream is identical to the serial one for any thread count.
    #[cfg(feature = "parallel")]
    fn enumerate_parallel(
        &self,
        config: &SearchConfig,
        observer: &dyn ProgressObserver,
        cancel: &CancelToken,
    ) -> Enumerated {
        use rayon::prelude::*;
        use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

        let k = self.prepared.k;
        let row_count = self.prepared.rows.len();
        let rows: Vec<&[f64]> = self
            .prepared
            .rows
            .iter()
            .map(|r| r.values.as_slice())
            .collect();

        let first_arrangements: Vec<Vec<f64>> = Arrangements::new(rows[0], k).collect();
        let rest = &rows[1..];
        let processed = AtomicU64::new(0);
        let stop = AtomicBool::new(false);

        let partitions: Vec<Vec<(CanonicalKey, ScoredCombination)>> = first_arrangements
            .par_iter()
            .map(|first| {
                if stop.load(Ordering::Relaxed) {
                    return Vec::new();
                }

                let mut seen: FxHashSet<CanonicalKey> = FxHashSet::default();
                let mut pairs = Vec::new();
                let mut batch = 0u64;

                if rest.is_empty() {
                    // Single-row search: the fixed arrangement is the tuple.
                    emit(
                        std::iter::once(first.as_slice()),
                        k,
                        row_count,
                        &mut seen,
                        &mut pairs,
                    );
                    processed.fetch_add(1, Ordering::Relaxed);
                    return pairs;
                }

                let mut cursor = TupleCursor::new(rest, k);
                while cursor.advance() {
                    batch += 1;
                    if batch >= config.progress_interval {
                        let so_far = processed.fetch_add(batch, Ordering::Relaxed) + batch;
                        batch = 0;
                        observer.on_progress(so_far, self.total);
                        if cancel.is_cancelled() {
                            stop.store(true, Ordering::Relaxed);
                        }
                        if stop.load(Ordering::Relaxed) {
                            break;
                        }
                    }

                    let arrangements = std::iter::once(first.as_slice())
                        .chain(cursor.current().iter().map(|a| a.as_slice()));
                    emit(arrangements, k, row_count, &mut seen, &mut pairs);
                }
                if batch > 0 {
                    processed.fetch_add(batch, Ordering::Relaxed);
                }
                pairs
            })
            .collect();

        let examined = processed.load(Ordering::Relaxed);
        observer.on_progress(examined, self.total);

        Enumerated {
            pairs: partitions.into_iter().flatten().collect(),
            examined,
            cancelled: stop.load(Ordering::Relaxed) || cancel.is_cancelled(),
        }
    }
}

/// Scores one assembled candidate if its canonical column set is new.
#[cfg(feature = "parallel")]
fn emit<'a>(
    arrangements: impl Iterator<Item = &'a [f64]>,
    k: usize,
    row_count: usize,
    seen: &mut FxHashSet<CanonicalKey>,
    pairs: &mut Vec<(CanonicalKey, ScoredCombination)>,
) {
    if let Some(columns) = assemble_columns(arrangements, k) {
        let key = CanonicalKey::from_columns(&columns);
        if seen.insert(key.clone()) {
            pairs.push((key, score_columns(columns, row_count)));
        }
    }
}

/// Convenience wrapper: prepare and run in one call.
pub fn search(rows: &RowSet, config: &SearchConfig) -> Result<Ranking, SearchError> {
    SearchPlan::new(rows)?.run(config)
}
