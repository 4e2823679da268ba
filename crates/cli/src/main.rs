//! Virtual memory simulator CLI.
//!
//! Replays a memory trace against a fixed number of page frames and prints the page fault
//! and writeback counts. It supports:
//! 1. **Single run:** `vmsim -n 8 -a lru trace.txt`.
//! 2. **Comparison:** `vmsim -n 8 -a opt,lru,second trace.txt` replays the same parsed trace
//!    once per policy.
//! 3. **JSON:** `--config run.json` supplies defaults; `--json` prints machine-readable stats.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vmsim_core::config::{Config, EvictionPolicy};
use vmsim_core::{SimResult, SimStats, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "vmsim",
    author,
    version,
    about = "Trace-driven virtual memory page replacement simulator",
    long_about = "Replay a load/store trace against a fixed set of page frames and count page faults and writes to disk.\n\nTrace lines have the form `<l|s> <hex address>`.\n\nExamples:\n  vmsim -n 8 -a opt traces/gcc.trace\n  vmsim -n 16 -a opt,lru,second traces/swim.trace\n  vmsim --config run.json --json"
)]
struct Cli {
    /// Number of physical frames.
    #[arg(short = 'n', long = "frames")]
    frames: Option<usize>,

    /// Replacement policy: opt, lru, or second. Several may be given, comma separated.
    #[arg(short = 'a', long = "algorithm", value_delimiter = ',')]
    algorithms: Vec<EvictionPolicy>,

    /// Page size exponent (12 = 4 KiB pages).
    #[arg(long)]
    offset_bits: Option<u32>,

    /// JSON configuration file; command-line flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print statistics as JSON instead of the text report.
    #[arg(long)]
    json: bool,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,

    /// Trace file to replay.
    trace: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    }
}

/// Installs a stderr `tracing` subscriber filtered by `RUST_LOG`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Merges flags over the optional config file and runs every requested policy.
fn run(cli: Cli) -> SimResult<()> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    if let Some(frames) = cli.frames {
        config.frames = frames;
    }
    if let Some(offset_bits) = cli.offset_bits {
        config.offset_bits = offset_bits;
    }
    if let Some(trace) = cli.trace {
        config.trace_file = Some(trace);
    }
    let policies = if cli.algorithms.is_empty() {
        vec![config.policy]
    } else {
        config.policy = cli.algorithms[0];
        cli.algorithms
    };

    tracing::debug!(?config, ?policies, "resolved configuration");
    let simulator = Simulator::from_config(config)?;
    let results = simulator.compare(&policies)?;
    report(&results, cli.json)
}

/// Prints each run's statistics as text, or as JSON: one object for a single run, an array
/// for a comparison.
fn report(results: &[SimStats], json: bool) -> SimResult<()> {
    if json {
        let out = match results {
            [stats] => stats.to_json()?,
            _ => serde_json::to_string_pretty(results)?,
        };
        println!("{out}");
        return Ok(());
    }
    for (i, stats) in results.iter().enumerate() {
        if i > 0 {
            println!();
        }
        stats.print();
    }
    Ok(())
}
