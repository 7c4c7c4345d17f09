use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use shut_the_box::{
    visualize_tiles, Game, GameRecord, Strategy, StrategyPlayer, TurnError, TurnOutcome,
};
use tracing::{debug, info, trace};

use crate::{log_error_chain, Config, Dashboard};

/// All games of one strategy.
#[derive(Clone, Debug)]
pub struct BatchResult {
    pub strategy: Strategy,
    /// Ordered by game number.
    pub records: Vec<GameRecord>,
    pub elapsed: Duration,
}

impl BatchResult {
    pub fn games_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.records.len() as f64 / secs
        } else {
            0.0
        }
    }
}

/// The dice for game `game_idx` of a batch.
pub fn game_rng(seed: u64, game_idx: usize) -> StdRng {
    StdRng::seed_from_u64(seed.wrapping_add(game_idx as u64))
}

/// Plays one game to the end. The player's randomness is seeded from `dice`.
pub fn simulate_game(
    strategy: Strategy,
    game_number: usize,
    dice: &mut StdRng,
) -> Result<GameRecord, TurnError> {
    let mut player = StrategyPlayer::new(strategy, StdRng::seed_from_u64(dice.gen()));
    let mut game = Game::new();
    debug!(game_number, "Starting game");
    while !game.is_over() {
        trace!(game_number, tiles = %visualize_tiles(game.tiles()), "Tiles remaining");
        match game.play_turn(dice, &mut player)? {
            TurnOutcome::Closed(mv) => {
                trace!(game_number, roll = ?game.rolls().last(), tiles = %mv, "Closed tiles");
            }
            TurnOutcome::BoxShut(mv) => {
                debug!(game_number, tiles = %mv, "The box has been shut");
            }
            TurnOutcome::Stuck(roll) => {
                debug!(game_number, %roll, "No possible moves");
            }
        }
    }
    let record = GameRecord::new(game_number, strategy, &game);
    debug!(
        game_number,
        score = record.final_score,
        tiles_closed = record.tiles_closed,
        "Game ended"
    );
    Ok(record)
}

/// Plays `config.num_games` games with `strategy`.
///
/// Sequential and parallel runs give the same records for the same seed.
pub fn simulate_strategy(
    config: &Config,
    strategy: Strategy,
    dashboard: &Dashboard,
) -> anyhow::Result<BatchResult> {
    info!(
        num_games = config.num_games,
        strategy = strategy.name(),
        "Simulation beginning"
    );
    let start = Instant::now();
    let run = |game_idx: usize| -> Result<GameRecord, TurnError> {
        let mut dice = game_rng(config.seed, game_idx);
        let record = simulate_game(strategy, game_idx + 1, &mut dice)?;
        dashboard.record(&record);
        Ok(record)
    };
    let result = if config.parallel {
        (0..config.num_games)
            .into_par_iter()
            .map(run)
            .collect::<Result<Vec<GameRecord>, TurnError>>()
    } else {
        (0..config.num_games)
            .map(run)
            .collect::<Result<Vec<GameRecord>, TurnError>>()
    };
    dashboard.finish();
    let records = match result {
        Ok(records) => records,
        Err(err) => {
            // Strategies only pick legal moves, so this is a bug
            log_error_chain(&err);
            return Err(err.into());
        }
    };
    let batch = BatchResult {
        strategy,
        records,
        elapsed: start.elapsed(),
    };
    info!(
        strategy = strategy.name(),
        elapsed_secs = batch.elapsed.as_secs_f64(),
        "Simulation ended"
    );
    Ok(batch)
}
