//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use blot_opt::{Ranking, Row, RowSet, SearchConfig, SearchPlan, search};

pub fn row_set(rows: &[(&str, &[f64])]) -> RowSet {
    rows.iter()
        .map(|(label, values)| Row::new(*label, values.to_vec()))
        .collect()
}

pub fn plan(rows: &[(&str, &[f64])]) -> SearchPlan {
    SearchPlan::new(&row_set(rows)).expect("plan should build")
}

pub fn run_search(rows: &[(&str, &[f64])]) -> Ranking {
    search(&row_set(rows), &SearchConfig::default()).expect("search should succeed")
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
