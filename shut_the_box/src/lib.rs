//! Rules and strategies for the dice game "Shut the Box".
//!
//! Tiles 1 to 9 start open. Each turn two dice are rolled, and open tiles
//! adding up to the total are closed. The game ends when the box is shut or
//! when no combination of open tiles matches a roll. The score is the sum of
//! the tiles left open.
//!
//! This crate does no I/O: it enumerates and validates moves, selects moves by
//! [`Strategy`], and exposes the trace of a game as a [`GameRecord`].

pub use dice::*;
pub use errors::*;
pub use game::*;
pub use moves::*;
pub use player::*;
pub use record::*;
pub use strategy::*;
pub use tiles::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod dice;
mod errors;
mod game;
mod moves;
mod player;
mod record;
mod strategy;
mod tiles;
mod visualization;
