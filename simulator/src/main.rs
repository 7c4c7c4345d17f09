use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use simulator::{
    format_summary_table, initialize_logging, parse_strategies, simulate_strategy, summarize,
    BatchResult, Config, Dashboard, Recorder,
};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
struct Args {
    /// Strategies to simulate, by tag from 0 to 5 (default: all of them)
    #[arg(short, long, value_delimiter = ',')]
    strategies: Vec<u8>,

    /// How many games to play per strategy
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Save the game records as CSV and JSON files into this directory
    #[arg(short, long)]
    results_directory: Option<PathBuf>,

    /// Play the games of each strategy on all cores
    #[arg(short, long, default_value_t = false)]
    parallel: bool,

    /// Refresh the running statistics every this many games
    #[arg(long, default_value_t = 100)]
    progress_interval: usize,

    /// Do not show the progress dashboard
    #[arg(short, long, default_value_t = false)]
    quiet: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn print_batch_result(batch: &BatchResult, dashboard: &Dashboard) {
    let (avg_score, avg_tiles_closed) = dashboard.averages();
    println!("Results for strategy {}:", batch.strategy);
    println!("  Games played: {}", batch.records.len());
    println!("  Average score: {:.2}", avg_score);
    println!("  Average tiles closed: {:.1}", avg_tiles_closed);
    println!(
        "  Time taken: {:.2} seconds ({:.0} games/s)",
        batch.elapsed.as_secs_f64(),
        batch.games_per_second()
    );
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);

    let config = Config {
        num_games: args.num_games,
        seed,
        strategies: parse_strategies(&args.strategies)?,
        progress_interval: args.progress_interval,
        parallel: args.parallel,
        quiet: args.quiet,
    };

    let mut recorder = if let Some(dir_path) = args.results_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let start = Instant::now();
    let mut all_records = Vec::new();
    let num_strategies = config.strategies.len();
    for (idx, &strategy) in config.strategies.iter().enumerate() {
        eprintln!(
            "[{}/{}] Starting simulation for strategy: {}",
            idx + 1,
            num_strategies,
            strategy
        );
        let dashboard = if config.quiet {
            Dashboard::hidden(config.num_games)
        } else {
            Dashboard::new(strategy, config.num_games, config.progress_interval)?
        };
        let batch = simulate_strategy(&config, strategy, &dashboard)?;
        if let Some(recorder) = &mut recorder {
            recorder.write_results(&batch.records)?;
        }
        print_batch_result(&batch, &dashboard);
        all_records.extend(batch.records);
    }

    if num_strategies > 1 {
        println!("\nSummary (best average score first):\n");
        print!("{}", format_summary_table(&summarize(&all_records)));
    }
    if let Some(recorder) = &recorder {
        println!(
            "\nResults saved to {} and {}",
            recorder.csv_path().display(),
            recorder.json_path().display()
        );
    }
    println!(
        "\nTotal time: {:.2} seconds",
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
