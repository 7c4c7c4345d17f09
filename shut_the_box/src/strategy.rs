use std::cmp::Reverse;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{EmptyLegalMoveSet, Move, Roll, UnknownStrategy, MAX_TILE};

/// A policy for picking one of the legal moves.
///
/// Strategies are identified by their integer tag in configuration and result files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Strategy {
    /// Pick uniformly at random.
    RandomChoice = 0,
    /// Close the tile showing the total, else the tiles showing the two dice,
    /// else pick at random.
    SingleTile = 1,
    /// Close as many tiles as possible.
    MaximumImmediateReward = 2,
    /// Close the tiles that are least likely to be rollable later.
    LeastProbability = 3,
    /// Close the tile closest to the middle tile.
    InsideOut = 4,
    /// Close the tile farthest from the middle tile.
    OutsideIn = 5,
}

/// Number of ways (out of 36) to roll each total, indexed by the total.
const TOTAL_WAYS: [u32; 13] = [0, 0, 1, 2, 3, 4, 5, 6, 5, 4, 3, 2, 1];

const MIDDLE_TILE: u8 = 5;

/// How likely a tile is to still be needed, in 36ths.
///
/// A tile accumulates the probability of every total between itself and 9.
fn tile_weight(tile: u8) -> u32 {
    (tile.max(2)..=MAX_TILE)
        .map(|total| TOTAL_WAYS[usize::from(total)])
        .sum()
}

/// The probability mass used by [`Strategy::LeastProbability`] for a tile.
///
/// ```
/// # use shut_the_box::tile_probability;
/// assert_eq!(tile_probability(9), 4.0 / 36.0);
/// assert_eq!(tile_probability(1), tile_probability(2));
/// ```
pub fn tile_probability(tile: u8) -> f64 {
    f64::from(tile_weight(tile)) / 36.0
}

fn distance_from_middle(mv: &Move) -> u8 {
    mv.tiles()
        .iter()
        .map(|&tile| tile.abs_diff(MIDDLE_TILE))
        .min()
        .unwrap_or(u8::MAX)
}

impl Strategy {
    pub const ALL: [Strategy; 6] = [
        Strategy::RandomChoice,
        Strategy::SingleTile,
        Strategy::MaximumImmediateReward,
        Strategy::LeastProbability,
        Strategy::InsideOut,
        Strategy::OutsideIn,
    ];

    pub fn tag(self) -> u8 {
        self as u8
    }

    /// The name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::RandomChoice => "Random Choice Strategy",
            Strategy::SingleTile => "Single Tile",
            Strategy::MaximumImmediateReward => "Maximum Immediate Reward",
            Strategy::LeastProbability => "Tiles of Least Probability",
            Strategy::InsideOut => "Inside Out",
            Strategy::OutsideIn => "Outside In",
        }
    }

    /// Picks one of the `legal` moves for `roll`.
    ///
    /// Only [`Strategy::RandomChoice`] and the fallback of [`Strategy::SingleTile`]
    /// consume randomness. All other ties go to the earliest move in `legal`.
    pub fn choose<'a, R: Rng + ?Sized>(
        self,
        legal: &'a [Move],
        roll: Roll,
        rng: &mut R,
    ) -> Result<&'a Move, EmptyLegalMoveSet> {
        let chosen = match self {
            Strategy::RandomChoice => legal.choose(rng),
            Strategy::SingleTile => {
                let total = roll.total();
                let dice = [roll.die1(), roll.die2()];
                legal
                    .iter()
                    .find(|mv| mv.tiles() == [total])
                    .or_else(|| {
                        // Doubles can never match here, as tiles are distinct
                        let faces = crate::TileSet::from_iter(dice);
                        legal.iter().find(|mv| mv.to_set() == faces)
                    })
                    .or_else(|| legal.choose(rng))
            }
            // min_by_key() keeps the first of several equal elements, max_by_key() the last
            Strategy::MaximumImmediateReward => legal.iter().min_by_key(|mv| Reverse(mv.len())),
            Strategy::LeastProbability => legal
                .iter()
                .min_by_key(|mv| mv.tiles().iter().map(|&t| tile_weight(t)).sum::<u32>()),
            Strategy::InsideOut => legal.iter().min_by_key(|mv| distance_from_middle(mv)),
            Strategy::OutsideIn => legal
                .iter()
                .min_by_key(|mv| Reverse(distance_from_middle(mv))),
        };
        chosen.ok_or(EmptyLegalMoveSet)
    }
}

impl TryFrom<u8> for Strategy {
    type Error = UnknownStrategy;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.tag() == tag)
            .ok_or(UnknownStrategy { tag })
    }
}

impl From<Strategy> for u8 {
    fn from(strategy: Strategy) -> Self {
        strategy.tag()
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.tag(), self.name())
    }
}
