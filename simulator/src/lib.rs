mod dashboard;
mod interactive;
mod recording;
mod simulation;
mod summary;
pub use dashboard::*;
pub use interactive::*;
pub use recording::*;
pub use simulation::*;
pub use summary::*;

use shut_the_box::Strategy;
use tracing::error;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Settings for one simulation run, passed down explicitly.
#[derive(Clone, Debug)]
pub struct Config {
    /// Games per strategy.
    pub num_games: usize,
    /// Game `i` of every strategy batch draws its dice from `seed + i`.
    pub seed: u64,
    pub strategies: Vec<Strategy>,
    /// Refresh the dashboard statistics every this many games.
    pub progress_interval: usize,
    /// Run the games of a batch on the rayon thread pool.
    pub parallel: bool,
    /// Hide the dashboard.
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_games: 100,
            seed: 0,
            strategies: Strategy::ALL.to_vec(),
            progress_interval: 100,
            parallel: false,
            quiet: false,
        }
    }
}

/// Parses strategy tags, where no tags at all means every strategy.
pub fn parse_strategies(tags: &[u8]) -> anyhow::Result<Vec<Strategy>> {
    if tags.is_empty() {
        return Ok(Strategy::ALL.to_vec());
    }
    let strategies = tags
        .iter()
        .map(|&tag| Strategy::try_from(tag))
        .collect::<Result<Vec<Strategy>, _>>()?;
    Ok(strategies)
}

/// Logs an error and each of its sources on its own line.
pub fn log_error_chain(err: &(dyn std::error::Error + 'static)) {
    let mut err_dyn = err;
    while let Some(src_err) = err_dyn.source() {
        error!("{}", err_dyn);
        err_dyn = src_err;
    }
    error!("{}", err_dyn);
}

/// Logs go to stderr, so that stdout stays free for results and prompts.
pub fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
