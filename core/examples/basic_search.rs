use blot_opt::{SearchConfig, parse_rows, search};
use std::fs;

fn usage() -> ! {
    eprintln!("Usage: basic_search <ROWS.txt> [N]");
    eprintln!("  ROWS.txt: one row per line, `LABEL, v1, v2, ...`");
    eprintln!("  N: optionally print the top N results (default 5)");
    std::process::exit(2);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| usage());
    let show_n: usize = args.next().map(|s| s.parse()).transpose()?.unwrap_or(5);

    let rows = parse_rows(&fs::read_to_string(&path)?)?;
    let ranking = search(&rows, &SearchConfig::default())?;

    println!("complete: {}", ranking.complete);
    println!("k: {}", ranking.k);
    println!("candidates: {}", ranking.total_candidates);
    println!("unique: {}", ranking.unique_count());

    for (i, result) in ranking.top(show_n).iter().enumerate() {
        println!("{:>4}: sum_sd = {:.4}", i + 1, result.sum_sd);
    }

    Ok(())
}
