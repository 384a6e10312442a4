//! Scoring of deduplicated combinations.
//!
//! Each column is normalized against its first (row-order-first) value and
//! expressed in percent, then per-row dispersion is measured across the `k`
//! columns. The objective `sum_sd` is the sum of the per-row sample
//! standard deviations; lower means a more internally consistent grouping.

use crate::combine::Column;
use serde::{Deserialize, Serialize};

/// One unique, scored combination.
///
/// `means` and `sds` are indexed by row, in the same order as the input
/// rows. All fields are fully materialized; consumers (display, export) can
/// rely on them without touching the engine again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCombination {
    /// The raw (unnormalized) columns, one value per row each.
    pub columns: Vec<Column>,
    /// Per-row mean of the normalized values across columns.
    pub means: Vec<f64>,
    /// Per-row sample standard deviation of the normalized values.
    pub sds: Vec<f64>,
    /// Sum of `sds`; the optimization objective.
    pub sum_sd: f64,
}

/// Normalizes each column independently: every value divided by the
/// column's first value, times 100. A zero base value collapses the column
/// to zeros; zero bases are filtered out upstream, so that branch is a
/// safety net rather than a reachable path.
pub(crate) fn normalize_columns(columns: &[Column]) -> Vec<Column> {
    columns
        .iter()
        .map(|col| {
            let base = col[0];
            if base == 0.0 {
                return vec![0.0; col.len()];
            }
            col.iter().map(|v| v / base * 100.0).collect()
        })
        .collect()
}

/// Mean and sample standard deviation (n - 1 denominator) of the finite
/// samples. Zero samples yield (0, 0); a single sample yields (value, 0).
fn mean_and_sample_sd(samples: &[f64]) -> (f64, f64) {
    let finite: Vec<f64> = samples.iter().copied().filter(|v| v.is_finite()).collect();
    match finite.len() {
        0 => (0.0, 0.0),
        1 => (finite[0], 0.0),
        n => {
            let mean = finite.iter().sum::<f64>() / n as f64;
            let variance =
                finite.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
            (mean, variance.sqrt())
        }
    }
}

/// Scores one combination: normalize, then read across rows.
pub(crate) fn score_columns(columns: Vec<Column>, row_count: usize) -> ScoredCombination {
    let normalized = normalize_columns(&columns);

    let mut means = Vec::with_capacity(row_count);
    let mut sds = Vec::with_capacity(row_count);
    for row in 0..row_count {
        let samples: Vec<f64> = normalized.iter().map(|col| col[row]).collect();
        let (mean, sd) = mean_and_sample_sd(&samples);
        means.push(mean);
        sds.push(sd);
    }

    let sum_sd = sds.iter().sum();
    ScoredCombination {
        columns,
        means,
        sds,
        sum_sd,
    }
}
