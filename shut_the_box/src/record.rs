use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Game, Move, Roll, Strategy};

/// Moves are written with this many entries, padded with zeros.
///
/// No move closes more than four tiles, as 1 + 2 + 3 + 4 + 5 exceeds 12.
pub const PADDED_MOVE_LEN: usize = 5;

/// The trace of one finished game, as handed to result files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Counts from 1 within one batch of games.
    pub game_number: usize,
    pub strategy: Strategy,
    /// Sum of the tiles left open.
    #[serde(rename = "score")]
    pub final_score: u32,
    pub tiles_closed: u32,
    /// Excludes the roll that ended the game without a move.
    pub rolls: Vec<Roll>,
    #[serde(
        serialize_with = "serialize_padded",
        deserialize_with = "deserialize_padded"
    )]
    pub moves: Vec<Move>,
}

impl GameRecord {
    pub fn new(game_number: usize, strategy: Strategy, game: &Game) -> Self {
        Self {
            game_number,
            strategy,
            final_score: game.score(),
            tiles_closed: game.tiles_closed(),
            rolls: game.rolls().to_vec(),
            moves: game.moves().to_vec(),
        }
    }

    /// Whether every tile was closed.
    pub fn is_perfect(&self) -> bool {
        self.final_score == 0
    }

    /// The moves with each one padded to [`PADDED_MOVE_LEN`] entries.
    pub fn padded_moves(&self) -> Vec<Vec<u8>> {
        self.moves.iter().map(pad_move).collect()
    }
}

fn pad_move(mv: &Move) -> Vec<u8> {
    let mut tiles = mv.tiles().to_vec();
    if tiles.len() < PADDED_MOVE_LEN {
        tiles.resize(PADDED_MOVE_LEN, 0);
    }
    tiles
}

fn serialize_padded<S: Serializer>(moves: &[Move], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(moves.iter().map(pad_move))
}

fn deserialize_padded<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Move>, D::Error> {
    let padded = Vec::<Vec<u8>>::deserialize(deserializer)?;
    Ok(padded
        .into_iter()
        .map(|tiles| Move::new(tiles.into_iter().filter(|&t| t != 0).collect()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> GameRecord {
        GameRecord {
            game_number: 3,
            strategy: Strategy::LeastProbability,
            final_score: 33,
            tiles_closed: 4,
            rolls: vec![Roll::new(6, 6).unwrap()],
            moves: vec![Move::new(vec![1, 2, 3, 6])],
        }
    }

    #[test]
    fn json_layout() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "game_number": 3,
                "strategy": 3,
                "score": 33,
                "tiles_closed": 4,
                "rolls": [[6, 6]],
                "moves": [[1, 2, 3, 6, 0]],
            })
        );
    }

    #[test]
    fn padding_is_stripped_when_reading() {
        let json = serde_json::to_string(&record()).unwrap();
        assert_eq!(serde_json::from_str::<GameRecord>(&json).unwrap(), record());
    }

    #[test]
    fn from_finished_game() {
        let mut game = Game::new();
        game.take_roll(Roll::new(6, 6).unwrap());
        game.close_tiles(Move::new(vec![1, 2, 3, 6])).unwrap();
        assert!(game.take_roll(Roll::new(1, 2).unwrap()).is_empty());
        let record = GameRecord::new(3, Strategy::LeastProbability, &game);
        assert_eq!(record, self::record());
        assert!(!record.is_perfect());
        assert_eq!(record.padded_moves(), vec![vec![1, 2, 3, 6, 0]]);
    }
}
