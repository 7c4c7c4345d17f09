use rand::Rng;

use crate::{EmptyLegalMoveSet, Move, Roll, Strategy, TileSet};

/// Something that picks the tiles to close during autonomous play.
pub trait Player {
    /// `legal` holds every move that may be played for `roll` with the open `tiles`.
    fn choose_move(
        &mut self,
        tiles: TileSet,
        roll: Roll,
        legal: &[Move],
    ) -> Result<Move, EmptyLegalMoveSet>;
}

/// Plays by a fixed [`Strategy`], drawing any randomness from its own RNG.
#[derive(Clone, Debug)]
pub struct StrategyPlayer<R> {
    strategy: Strategy,
    rng: R,
}

impl<R: Rng> StrategyPlayer<R> {
    pub fn new(strategy: Strategy, rng: R) -> Self {
        Self { strategy, rng }
    }
}

impl<R: Rng> Player for StrategyPlayer<R> {
    fn choose_move(
        &mut self,
        _tiles: TileSet,
        roll: Roll,
        legal: &[Move],
    ) -> Result<Move, EmptyLegalMoveSet> {
        self.strategy.choose(legal, roll, &mut self.rng).cloned()
    }
}
