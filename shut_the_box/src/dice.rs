use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::InvalidMove;

/// Anything that can produce the result of a single six-sided die.
///
/// Every [`rand::Rng`] is a `DieSource`. Tests can substitute a scripted
/// source to make a game reproducible roll by roll.
pub trait DieSource {
    /// Returns a value in `1..=6`.
    fn roll_die(&mut self) -> u8;
}

impl<R: Rng + ?Sized> DieSource for R {
    fn roll_die(&mut self) -> u8 {
        self.gen_range(1..=6)
    }
}

/// The result of throwing both dice once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Roll {
    die1: u8,
    die2: u8,
}

impl Roll {
    pub fn new(die1: u8, die2: u8) -> Result<Self, InvalidMove> {
        for value in [die1, die2] {
            if !(1..=6).contains(&value) {
                return Err(InvalidMove::DieOutOfRange { value });
            }
        }
        Ok(Self { die1, die2 })
    }

    /// Throws both dice.
    pub fn from_source<D: DieSource + ?Sized>(dice: &mut D) -> Result<Self, InvalidMove> {
        let die1 = dice.roll_die();
        let die2 = dice.roll_die();
        Self::new(die1, die2)
    }

    pub fn die1(self) -> u8 {
        self.die1
    }

    pub fn die2(self) -> u8 {
        self.die2
    }

    /// Between 2 and 12.
    pub fn total(self) -> u8 {
        self.die1 + self.die2
    }
}

impl TryFrom<(u8, u8)> for Roll {
    type Error = InvalidMove;

    fn try_from((die1, die2): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(die1, die2)
    }
}

impl From<Roll> for (u8, u8) {
    fn from(roll: Roll) -> Self {
        (roll.die1, roll.die2)
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} + {} = {}", self.die1, self.die2, self.total())
    }
}
