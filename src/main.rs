use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use warpsum_io::SequenceReader;
use warpsum_pairs::{Execution, PairSumConfig, PairTotal};

#[derive(Parser)]
#[command(name = "warpsum")]
#[command(about = "Sum of DTW distances over every pair of series in a CSV file")]
#[command(version)]
struct Cli {
    /// Input CSV: header row, then `label,v0,v1,...` per series
    input: PathBuf,

    /// Evaluate pairs on the rayon pool (same total as the sequential run)
    #[arg(long)]
    parallel: bool,

    /// Number of threads for parallel evaluation (defaults to all cores)
    #[arg(long)]
    threads: Option<usize>,

    /// Print a JSON summary instead of the plain two-line report
    #[arg(long)]
    json: bool,

    /// Enable verbose (debug-level) logging
    #[arg(long)]
    verbose: bool,

    /// Suppress all logging except errors
    #[arg(long)]
    quiet: bool,
}

#[derive(Serialize)]
struct SumOutput {
    input: String,
    n_series: usize,
    series_len: usize,
    n_pairs: usize,
    total: f64,
    elapsed_ms: u64,
    execution: String,
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, u64) {
    let start = Instant::now();
    let out = f();
    let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    (out, elapsed_ms)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match (cli.verbose, cli.quiet) {
        (true, _) => "debug",
        (_, true) => "error",
        _ => "info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure thread pool")?;
        info!(threads, "thread pool configured");
    }

    let dataset = SequenceReader::new(&cli.input)
        .read()
        .context("failed to read input CSV")?;

    let execution = if cli.parallel {
        Execution::Parallel
    } else {
        Execution::Sequential
    };
    let config = PairSumConfig::new().with_execution(execution);

    let (result, elapsed_ms) = timed(|| config.sum(&dataset.series));
    let total: PairTotal = result.context("pairwise DTW sum failed")?;
    info!(%total, elapsed_ms, %execution, "sum complete");

    if cli.json {
        let output = SumOutput {
            input: cli.input.display().to_string(),
            n_series: dataset.len(),
            series_len: dataset.series_len(),
            n_pairs: total.n_pairs(),
            total: total.value(),
            elapsed_ms,
            execution: execution.to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{elapsed_ms} ms");
        println!("Total error: {}", total.value());
    }

    Ok(())
}
