use blot_opt::{Row, RowSet, SearchConfig, search};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::time::Duration;

const MAX_BENCH_TIME_SECS: u64 = 30;
const WARMUP_SECS: u64 = 3;
const SAMPLE_SIZE: usize = 10;

fn make_rows(row_count: usize, values_per_row: usize) -> RowSet {
    (0..row_count)
        .map(|r| {
            let values: Vec<f64> = (0..values_per_row)
                .map(|c| 1.0 + ((r * 7 + c * 3) % 9) as f64)
                .collect();
            Row::new(format!("R{r}"), values)
        })
        .collect()
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group
        .measurement_time(Duration::from_secs(MAX_BENCH_TIME_SECS))
        .warm_up_time(Duration::from_secs(WARMUP_SECS))
        .sample_size(SAMPLE_SIZE);

    let config = SearchConfig::default();

    for (row_count, values_per_row) in [(3usize, 4usize), (4, 4), (3, 5)] {
        let rows = make_rows(row_count, values_per_row);
        let total = blot_opt::SearchPlan::new(&rows)
            .expect("plan")
            .total_candidates();
        group.throughput(Throughput::Elements(total));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{row_count}x{values_per_row}")),
            &rows,
            |b, rows| {
                b.iter(|| search(rows, &config).expect("search"));
            },
        );
    }

    group.finish();
}

fn bench_degenerate_dedup(c: &mut Criterion) {
    // All-equal rows: maximal dedup pressure, a single surviving result.
    let rows: RowSet = (0..4)
        .map(|r| Row::new(format!("R{r}"), vec![1.0; 4]))
        .collect();
    let config = SearchConfig::default();

    c.bench_function("search/all_equal_4x4", |b| {
        b.iter(|| search(&rows, &config).expect("search"));
    });
}

criterion_group!(benches, bench_search, bench_degenerate_dedup);
criterion_main!(benches);
