use crate::commands::optimize::Verbosity;
use anyhow::Result;
use blot_opt::Ranking;
use std::io::Write;

pub fn write_text_report<W: Write>(
    w: &mut W,
    ranking: &Ranking,
    top_n: usize,
    verbosity: Verbosity,
) -> Result<()> {
    if ranking.results.is_empty() {
        writeln!(w, "No valid combination found.")?;
        return Ok(());
    }

    if verbosity != Verbosity::Quiet {
        writeln!(
            w,
            "k = {}, non-zero counts = {:?}, candidates = {}, unique groupings = {}",
            ranking.k,
            ranking.nonzero_counts,
            ranking.total_candidates,
            ranking.unique_count()
        )?;
        writeln!(w)?;
    }

    for (i, result) in ranking.top(top_n).iter().enumerate() {
        writeln!(w, "Rank {}  sum_sd = {:.4}", i + 1, result.sum_sd)?;
        if verbosity == Verbosity::Quiet {
            continue;
        }

        writeln!(w, "  SDs:   {}", per_label(&ranking.labels, &result.sds))?;
        writeln!(w, "  Means: {}", per_label(&ranking.labels, &result.means))?;

        if verbosity == Verbosity::Verbose {
            writeln!(w, "  Columns:")?;
            for (j, column) in result.columns.iter().enumerate() {
                let cells: Vec<String> = column.iter().map(|v| format!("{v:.3}")).collect();
                writeln!(w, "    {}: {}", j + 1, cells.join(", "))?;
            }
        }
        writeln!(w)?;
    }

    Ok(())
}

fn per_label(labels: &[String], values: &[f64]) -> String {
    labels
        .iter()
        .zip(values)
        .map(|(label, value)| format!("{label}={value:.3}"))
        .collect::<Vec<_>>()
        .join(", ")
}
