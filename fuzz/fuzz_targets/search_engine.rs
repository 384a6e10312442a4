#![no_main]

use blot_opt::{Row, RowSet, SearchConfig, SearchPlan};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let row_count = (data.first().copied().unwrap_or(0) % 4) as usize + 1;
    let values_per_row = (data.get(1).copied().unwrap_or(0) % 4) as usize + 1;

    let mut rows = RowSet::new();
    let mut i = 2usize;
    for r in 0..row_count {
        let mut values = Vec::with_capacity(values_per_row);
        for _ in 0..values_per_row {
            let byte = data.get(i).copied().unwrap_or(1);
            i += 1;
            // Small non-negative magnitudes; zeros exercise the stripping
            // path.
            values.push((byte % 16) as f64 / 2.0);
        }
        rows.push(Row::new(format!("R{r}"), values));
    }

    let plan = match SearchPlan::new(&rows) {
        Ok(plan) => plan,
        Err(_) => return,
    };
    // 4 rows x 4 values caps the raw volume at 24^4; keep a hard guard
    // anyway so a future shape change cannot hang the fuzzer.
    if plan.total_candidates() > 500_000 {
        return;
    }

    let config = SearchConfig::unbounded();
    let ranking = plan.run(&config).expect("search on valid rows");

    assert!(ranking.complete);
    assert_eq!(ranking.candidates_examined, ranking.total_candidates);
    for pair in ranking.results.windows(2) {
        assert!(pair[0].sum_sd <= pair[1].sum_sd);
    }
});
