use crate::commands::optimize::{describe_input, read_input};
use anyhow::{Context, Result};
use blot_opt::{SearchPlan, engine_features, parse_rows};
use std::process::ExitCode;

pub fn run(input: &str) -> Result<ExitCode> {
    let rows = parse_rows(&read_input(input)?)
        .with_context(|| format!("Failed to parse rows from {}", describe_input(input)))?;
    let plan = SearchPlan::new(&rows).context("Failed to prepare the search")?;

    let labels = plan.labels();
    let nonzero = plan.nonzero_counts();
    let arrangements = plan.arrangement_counts();

    println!("Rows: {}", labels.len());
    for ((label, count), arrangement_count) in labels.iter().zip(&nonzero).zip(arrangements) {
        println!(
            "  {}: {} non-zero values, {} arrangements",
            label, count, arrangement_count
        );
    }
    println!("k (arrangement length): {}", plan.k());
    println!("Raw candidates: {}", plan.total_candidates());
    println!(
        "Parallel enumeration: {}",
        if engine_features().parallel {
            "enabled"
        } else {
            "disabled"
        }
    );

    Ok(ExitCode::SUCCESS)
}
