use std::path::PathBuf;

use clap::Parser;
use simulator::{format_summary_table, initialize_logging, load_results, parse_strategies, summarize};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

/// Summarizes the result files written by the simulator.
#[derive(Parser)]
struct Args {
    /// Directory containing the JSON result files
    #[arg(short, long, default_value = "./results")]
    directory: PathBuf,

    /// Only include these strategies, by tag from 0 to 5 (default: all of them)
    #[arg(short, long, value_delimiter = ',')]
    strategies: Vec<u8>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let strategies = parse_strategies(&args.strategies)?;
    let mut records = load_results(&args.directory)?;
    records.retain(|record| strategies.contains(&record.strategy));
    info!(num_records = records.len(), "Records loaded");
    if records.is_empty() {
        anyhow::bail!(
            "No game records found in '{}'",
            args.directory.display()
        );
    }

    print!("{}", format_summary_table(&summarize(&records)));

    Ok(())
}
