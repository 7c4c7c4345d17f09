use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use simulator::{initialize_logging, play_interactive};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

/// Play a game of Shut the Box on the terminal.
#[derive(Parser)]
struct Args {
    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut dice = StdRng::seed_from_u64(seed);

    let mut input = std::io::stdin().lock();
    let mut output = std::io::stdout().lock();
    let game = play_interactive(&mut input, &mut output, &mut dice)?;
    info!(score = game.score(), tiles_closed = game.tiles_closed(), "Game ended");

    Ok(())
}
