//! JSON serialization of rankings, plus a flat row form for tabular
//! consumers (spreadsheet export, grid display).

use crate::rank::Ranking;
use serde::Serialize;

/// One ranked result flattened for tabular output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingRow {
    /// 1-based rank.
    pub rank: usize,
    pub sum_sd: f64,
    /// Per-row sample standard deviations, in label order.
    pub sds: Vec<f64>,
    /// Per-row means of the normalized values, in label order.
    pub means: Vec<f64>,
    /// Raw columns, each one value per row.
    pub columns: Vec<Vec<f64>>,
}

pub fn serialize_ranking(ranking: &Ranking) -> serde_json::Result<String> {
    serde_json::to_string(ranking)
}

pub fn ranking_to_rows(ranking: &Ranking, top_n: usize) -> Vec<RankingRow> {
    ranking
        .top(top_n)
        .iter()
        .enumerate()
        .map(|(i, result)| RankingRow {
            rank: i + 1,
            sum_sd: result.sum_sd,
            sds: result.sds.clone(),
            means: result.means.clone(),
            columns: result.columns.clone(),
        })
        .collect()
}
