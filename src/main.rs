use anyhow::{bail, Context, Result};
use clap::Parser;
use fileflat::{Dispatcher, Outcome};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "fileflat")]
#[command(version)]
#[command(about = "Flatten JSON, XML and CSV files into numbered *_out.txt listings", long_about = None)]
struct Args {
    /// Directory holding the input files
    #[arg(short = 'd', long = "dir", default_value = ".")]
    base_dir: PathBuf,

    /// Process only these files (relative to the base directory) instead of
    /// every file in it
    files: Vec<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Diagnostics go to stderr; stdout carries the per-file reports
    let log_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("fileflat={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let start_time = Instant::now();

    if !args.base_dir.is_dir() {
        bail!("Not a directory: {}", args.base_dir.display());
    }

    let dispatcher = Dispatcher::new();
    tracing::info!(
        "Registered {} handlers for {}",
        dispatcher.registry().handler_count(),
        dispatcher.registry().registered_extensions().join(", ")
    );

    let outcomes = if args.files.is_empty() {
        dispatcher
            .process_directory(&args.base_dir)
            .with_context(|| format!("Failed to scan {}", args.base_dir.display()))?
    } else {
        let paths: Vec<PathBuf> = args.files.iter().map(|f| args.base_dir.join(f)).collect();
        dispatcher.process_all(&paths)
    };

    let processed = outcomes.iter().filter(|o| o.is_processed()).count();
    let failed = outcomes
        .iter()
        .filter(|o| matches!(o, Outcome::Failed { .. }))
        .count();
    let not_found = outcomes
        .iter()
        .filter(|o| matches!(o, Outcome::NotFound))
        .count();

    tracing::info!(
        "{} inputs: {} processed, {} failed, {} not found, {} skipped [{:.2}s]",
        outcomes.len(),
        processed,
        failed,
        not_found,
        outcomes.len() - processed - failed - not_found,
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
