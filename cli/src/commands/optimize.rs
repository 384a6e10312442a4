use crate::OutputFormat;
use crate::output::{json, text, xlsx};
use anyhow::{Context, Result};
use blot_opt::{
    CancelToken, LimitBehavior, ProgressCounter, SearchConfig, SearchPlan, parse_rows,
};
use std::io::{self, Read, Write};
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    input: &str,
    top: Option<usize>,
    format: OutputFormat,
    xlsx_path: Option<&str>,
    progress: bool,
    max_candidates: Option<u64>,
    force: bool,
    quiet: bool,
    verbose: bool,
) -> Result<ExitCode> {
    let verbosity = if quiet {
        Verbosity::Quiet
    } else if verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    };

    let rows = parse_rows(&read_input(input)?)
        .with_context(|| format!("Failed to parse rows from {}", describe_input(input)))?;
    let plan = SearchPlan::new(&rows).context("Failed to prepare the search")?;

    let mut builder = SearchConfig::builder();
    if let Some(top) = top {
        builder = builder.top_n(top);
    }
    if let Some(limit) = max_candidates {
        builder = builder.max_candidates(limit);
    }
    if force {
        builder = builder.on_limit_exceeded(LimitBehavior::ProceedAnyway);
    }
    let config = builder.build().context("Invalid search options")?;

    let ranking = if progress {
        run_with_progress_bar(&plan, &config)?
    } else {
        plan.run(&config).context("Search failed")?
    };

    for warning in &ranking.warnings {
        eprintln!("Warning: {}", warning);
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    match format {
        OutputFormat::Text => {
            text::write_text_report(&mut handle, &ranking, config.top_n, verbosity)?;
        }
        OutputFormat::Json => {
            json::write_json_report(&mut handle, &ranking)?;
        }
    }

    if let Some(path) = xlsx_path {
        xlsx::write_xlsx_report(path.as_ref(), &ranking, config.top_n)
            .with_context(|| format!("Failed to write workbook: {}", path))?;
        if verbosity != Verbosity::Quiet {
            eprintln!("Wrote {}", path);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Runs the search while a helper thread redraws a coarse percentage bar on
/// stderr from the pull-side progress counter.
fn run_with_progress_bar(plan: &SearchPlan, config: &SearchConfig) -> Result<blot_opt::Ranking> {
    let counter = ProgressCounter::new();
    let done = Arc::new(AtomicBool::new(false));

    let bar = {
        let counter = counter.clone();
        let done = Arc::clone(&done);
        std::thread::spawn(move || {
            while !done.load(Ordering::Relaxed) {
                draw_bar(counter.processed(), counter.total());
                std::thread::sleep(Duration::from_millis(100));
            }
            draw_bar(counter.processed(), counter.total());
            eprintln!();
        })
    };

    let result = plan
        .run_with_observer(config, &counter, &CancelToken::new())
        .context("Search failed");
    done.store(true, Ordering::Relaxed);
    let _ = bar.join();
    result
}

fn draw_bar(processed: u64, total: u64) {
    if total == 0 {
        return;
    }
    let percent = (processed as f64 / total as f64 * 100.0).min(100.0);
    eprint!("\r{:>3.0}% ({}/{})", percent, processed, total);
    let _ = io::stderr().flush();
}

pub(crate) fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read rows from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read row file: {}", input))
    }
}

pub(crate) fn describe_input(input: &str) -> String {
    if input == "-" {
        "stdin".to_string()
    } else {
        input.to_string()
    }
}
