mod common;

use common::{assert_close, run_search};

#[test]
fn equivalent_groupings_are_scored_once() {
    // Two rows of [1, 2] with k = 2: four raw arrangement tuples, but only
    // two distinct column multisets, {(1,1),(2,2)} and {(1,2),(2,1)}.
    let ranking = run_search(&[("A", &[1.0, 2.0]), ("B", &[1.0, 2.0])]);
    assert_eq!(ranking.total_candidates, 4);
    assert_eq!(ranking.candidates_examined, 4);
    assert_eq!(ranking.unique_count(), 2);
}

#[test]
fn duplicate_magnitudes_inflate_candidates_not_results() {
    // Positions are distinct for enumeration, so a row of equal values
    // multiplies the raw volume; dedup collapses the identical column sets.
    let ranking = run_search(&[("A", &[5.0, 5.0, 5.0]), ("B", &[1.0, 2.0, 3.0])]);
    assert_eq!(ranking.total_candidates, 36); // 3! x 3!
    // Column sets differ only by which B value lands in which column.
    assert_eq!(ranking.unique_count(), 1);
}

#[test]
fn all_equal_rows_collapse_to_a_single_zero_result() {
    // The end-to-end degenerate scenario: four rows of [1, 1, 1, 0].
    let ranking = run_search(&[
        ("A", &[1.0, 1.0, 1.0, 0.0]),
        ("B", &[1.0, 1.0, 1.0, 0.0]),
        ("C", &[1.0, 1.0, 1.0, 0.0]),
        ("D", &[1.0, 1.0, 1.0, 0.0]),
    ]);

    assert_eq!(ranking.k, 3);
    assert_eq!(ranking.nonzero_counts, vec![3, 3, 3, 3]);
    assert_eq!(ranking.total_candidates, 6 * 6 * 6 * 6);
    assert_eq!(ranking.candidates_examined, ranking.total_candidates);
    assert_eq!(ranking.unique_count(), 1);

    let best = ranking.best().unwrap();
    assert_close(best.sum_sd, 0.0);
    assert_eq!(best.columns, vec![vec![1.0; 4], vec![1.0; 4], vec![1.0; 4]]);
    for (&mean, &sd) in best.means.iter().zip(&best.sds) {
        assert_close(mean, 100.0);
        assert_close(sd, 0.0);
    }
}
