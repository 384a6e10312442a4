mod commands;
mod output;

use blot_opt::SearchError;
use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "blot-opt")]
#[command(about = "Find the most internally consistent regrouping of replicate readings")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Search for the minimal-dispersion column groupings")]
    Optimize {
        #[arg(help = "Path to the row file (one `LABEL, v1, v2, ...` per line), or `-` for stdin")]
        input: String,
        #[arg(long, short, help = "How many top results to show/export")]
        top: Option<usize>,
        #[arg(long, short, value_enum, default_value = "text", help = "Output format")]
        format: OutputFormat,
        #[arg(long, value_name = "PATH", help = "Also export the top results to an .xlsx workbook with a chart")]
        xlsx: Option<String>,
        #[arg(long, help = "Show a progress bar on stderr")]
        progress: bool,
        #[arg(long, value_name = "N", help = "Refuse searches above this raw candidate count")]
        max_candidates: Option<u64>,
        #[arg(long, help = "Run even when the candidate count exceeds the limit")]
        force: bool,
        #[arg(long, short, help = "Quiet mode: only show ranks and scores")]
        quiet: bool,
        #[arg(long, short, help = "Verbose mode: show the grouped columns")]
        verbose: bool,
    },
    #[command(about = "Show the search volume for a row file without searching")]
    Info {
        #[arg(help = "Path to the row file, or `-` for stdin")]
        input: String,
    },
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Optimize {
            input,
            top,
            format,
            xlsx,
            progress,
            max_candidates,
            force,
            quiet,
            verbose,
        } => commands::optimize::run(
            &input,
            top,
            format,
            xlsx.as_deref(),
            progress,
            max_candidates,
            force,
            quiet,
            verbose,
        ),
        Commands::Info { input } => commands::info::run(&input),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_code_for_error(&e)
        }
    }
}

fn exit_code_for_error(err: &anyhow::Error) -> ExitCode {
    if is_internal_error(err) {
        ExitCode::from(3)
    } else {
        ExitCode::from(2)
    }
}

// Parse and configuration problems are always the caller's to fix; only
// engine bugs rate the internal exit code.
fn is_internal_error(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<SearchError>(),
            Some(SearchError::Internal { .. })
        )
    })
}
