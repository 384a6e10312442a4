mod common;

use blot_opt::{RowSet, SearchError, SearchPlan};
use common::{plan, row_set};

#[test]
fn k_is_the_minimum_nonzero_count() {
    let plan = plan(&[
        ("A", &[1.0, 2.0, 3.0]),
        ("B", &[1.0, 2.0, 3.0, 4.0]),
        ("C", &[1.0, 2.0, 3.0, 4.0, 5.0]),
    ]);
    assert_eq!(plan.k(), 3);
    assert_eq!(plan.nonzero_counts(), vec![3, 4, 5]);
}

#[test]
fn zeros_do_not_count_toward_k() {
    let plan = plan(&[
        ("A", &[1.0, 0.0, 2.0, 0.0]),
        ("B", &[1.0, 2.0, 3.0, 4.0]),
    ]);
    assert_eq!(plan.k(), 2);
    assert_eq!(plan.nonzero_counts(), vec![2, 4]);
}

#[test]
fn zeros_never_reach_any_column() {
    // A literal 0 among the entries is filtered before enumeration, so no
    // ranked column may contain it.
    let ranking = common::run_search(&[("A", &[1.0, 0.0, 2.0]), ("B", &[3.0, 4.0, 0.0])]);
    assert!(!ranking.results.is_empty());
    for result in &ranking.results {
        for column in &result.columns {
            assert!(column.iter().all(|&v| v != 0.0));
        }
    }
}

#[test]
fn all_zero_row_is_an_error_not_a_crash() {
    let rows = row_set(&[("A", &[1.0, 2.0]), ("B", &[0.0, 0.0])]);
    let err = SearchPlan::new(&rows).expect_err("k = 0 must be reported");
    match err {
        SearchError::EmptyRow { label } => assert_eq!(label, "B"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn empty_row_set_is_an_error() {
    let err = SearchPlan::new(&RowSet::new()).expect_err("no rows must be reported");
    assert!(matches!(err, SearchError::NoRows));
}

#[test]
fn search_errors_carry_stable_codes() {
    let err = SearchPlan::new(&row_set(&[("A", &[0.0])])).unwrap_err();
    assert!(err.to_string().contains(err.code()));
}

#[test]
fn arrangement_counts_and_total_are_exposed_before_running() {
    // Non-zero counts {3, 4, 5} with k = 3: 3! = 6, 4!/1! = 24, 5!/2! = 60.
    let plan = plan(&[
        ("A", &[1.0, 2.0, 3.0]),
        ("B", &[1.0, 2.0, 3.0, 4.0]),
        ("C", &[1.0, 2.0, 3.0, 4.0, 5.0]),
    ]);
    assert_eq!(plan.arrangement_counts(), &[6, 24, 60]);
    assert_eq!(plan.total_candidates(), 6 * 24 * 60);
}
