use crate::{
    apply_move, enumerate_moves, DieSource, InvalidMove, Move, Player, Roll, TileSet, TurnError,
    TILES_SUM,
};

/// Summarizes the outcome of one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The tiles were closed and the game goes on.
    Closed(Move),
    /// The tiles were closed and no tile is left open.
    BoxShut(Move),
    /// No tiles could be closed for this roll, which ends the game.
    Stuck(Roll),
}

/// The state of a single game.
///
/// A game is driven turn by turn, either with [`Game::play_turn()`] for a
/// [`Player`], or with [`Game::take_roll()`] and [`Game::close_tiles()`] when
/// the moves come from somewhere else (e.g. typed in by a person).
#[derive(Clone, Debug)]
pub struct Game {
    tiles: TileSet,
    game_over: bool,
    rolls: Vec<Roll>,
    moves: Vec<Move>,
    // The roll that the next move has to match.
    pending_roll: Option<Roll>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self {
            tiles: TileSet::full(),
            game_over: false,
            rolls: Vec::new(),
            moves: Vec::new(),
            pending_roll: None,
        }
    }

    /// The tiles that are still open.
    pub fn tiles(&self) -> TileSet {
        self.tiles
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Every roll for which tiles were closed (or are about to be).
    ///
    /// The roll that ended the game by leaving no legal move is not part of this.
    pub fn rolls(&self) -> &[Roll] {
        &self.rolls
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn pending_roll(&self) -> Option<Roll> {
        self.pending_roll
    }

    /// Sum of the open tiles; 0 means the box was shut.
    pub fn score(&self) -> u32 {
        self.tiles.sum()
    }

    pub fn tiles_closed(&self) -> u32 {
        TileSet::full().len() - self.tiles.len()
    }

    /// Starts a turn with `roll` and returns the moves that may be played for it.
    ///
    /// If there are none, the game is over and the roll is not recorded.
    /// A roll that is still pending is replaced.
    pub fn take_roll(&mut self, roll: Roll) -> Vec<Move> {
        if self.game_over {
            return Vec::new();
        }
        if self.pending_roll.take().is_some() {
            self.rolls.pop();
        }
        let legal = enumerate_moves(self.tiles, roll.total());
        if legal.is_empty() {
            self.game_over = true;
        } else {
            self.rolls.push(roll);
            self.pending_roll = Some(roll);
        }
        legal
    }

    /// Closes the tiles of `mv` for the pending roll.
    ///
    /// On error nothing changes, so a corrected move can be submitted for the same roll.
    pub fn close_tiles(&mut self, mv: Move) -> Result<TurnOutcome, InvalidMove> {
        if self.game_over {
            return Err(InvalidMove::GameOver);
        }
        let roll = self.pending_roll.ok_or(InvalidMove::NoPendingRoll)?;
        self.tiles = apply_move(self.tiles, &mv, roll.total())?;
        self.pending_roll = None;
        self.moves.push(mv.clone());
        if self.tiles.is_empty() {
            self.game_over = true;
            Ok(TurnOutcome::BoxShut(mv))
        } else {
            Ok(TurnOutcome::Closed(mv))
        }
    }

    /// Rolls the dice and lets `player` close tiles.
    pub fn play_turn<D, P>(&mut self, dice: &mut D, player: &mut P) -> Result<TurnOutcome, TurnError>
    where
        D: DieSource + ?Sized,
        P: Player + ?Sized,
    {
        if self.game_over {
            return Err(InvalidMove::GameOver.into());
        }
        let roll = Roll::from_source(dice)?;
        let legal = self.take_roll(roll);
        if legal.is_empty() {
            return Ok(TurnOutcome::Stuck(roll));
        }
        let mv = player.choose_move(self.tiles, roll, &legal)?;
        Ok(self.close_tiles(mv)?)
    }

    /// Plays turns until the game is over.
    ///
    /// As every successful turn closes at least one tile, this takes at most 10 turns.
    pub fn play<D, P>(&mut self, dice: &mut D, player: &mut P) -> Result<(), TurnError>
    where
        D: DieSource + ?Sized,
        P: Player + ?Sized,
    {
        while !self.game_over {
            self.play_turn(dice, player)?;
        }
        debug_assert_eq!(
            self.score() + self.moves.iter().map(Move::sum).sum::<u32>(),
            TILES_SUM
        );
        Ok(())
    }
}
