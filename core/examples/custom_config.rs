//! Demonstrates the volume guard and a progress observer on a search that
//! is large enough to show throttled updates.

use blot_opt::{
    CancelToken, LimitBehavior, ProgressCounter, Row, RowSet, SearchConfig, SearchPlan,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let rows: RowSet = [
        ("A", vec![12.0, 25.0, 50.0, 99.0]),
        ("B", vec![26.0, 13.0, 104.0, 52.0]),
        ("C", vec![75.0, 19.0, 38.0, 150.0]),
        ("D", vec![40.0, 10.0, 21.0, 80.0]),
    ]
    .into_iter()
    .map(|(label, values)| Row::new(label, values))
    .collect();

    let plan = SearchPlan::new(&rows)?;
    println!(
        "k = {}, raw candidates = {}",
        plan.k(),
        plan.total_candidates()
    );

    let config = SearchConfig::builder()
        .top_n(3)
        .max_candidates(100_000)
        .on_limit_exceeded(LimitBehavior::ProceedAnyway)
        .progress_interval(1_000)
        .build()?;

    let counter = ProgressCounter::new();
    let ranking = plan.run_with_observer(&config, &counter, &CancelToken::new())?;

    for warning in &ranking.warnings {
        eprintln!("Warning: {warning}");
    }
    println!(
        "examined {} candidates, {} unique groupings",
        counter.processed(),
        ranking.unique_count()
    );
    for (i, result) in ranking.top(config.top_n).iter().enumerate() {
        println!("{}: sum_sd = {:.4}", i + 1, result.sum_sd);
    }

    Ok(())
}
