//! The rules of the game: which tiles may be closed for a given roll.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{InvalidMove, TileSet};

/// The tiles to close in one turn.
///
/// The order is the order in which the tiles were given and only matters for
/// reporting. Moves produced by [`enumerate_moves`] are ascending.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Move(Vec<u8>);

impl Move {
    pub fn new(tiles: Vec<u8>) -> Self {
        Self(tiles)
    }

    pub fn tiles(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sum(&self) -> u32 {
        self.0.iter().map(|&t| u32::from(t)).sum()
    }

    /// The move as an unordered set. Duplicates and non-tiles are lost.
    pub fn to_set(&self) -> TileSet {
        self.0.iter().copied().filter(|t| (1..=9).contains(t)).collect()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (idx, tile) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", tile)?;
        }
        write!(f, "]")
    }
}

/// Parses tiles separated by whitespace and/or commas, e.g. `"1 2"` or `"3,4"`.
///
/// ```
/// # use shut_the_box::Move;
/// let mv: Move = "1, 8".parse().unwrap();
/// assert_eq!(mv.tiles(), &[1, 8]);
/// assert!("one".parse::<Move>().is_err());
/// ```
impl FromStr for Move {
    type Err = InvalidMove;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<u8>())
            .collect::<Result<Vec<u8>, _>>()
            .map(Move)
            .map_err(|_| InvalidMove::Malformed {
                input: String::from(s.trim()),
            })
    }
}

/// Returns every non-empty subset of `tiles` that sums to `total`.
///
/// Subsets of all sizes are considered. The order is deterministic: by
/// number of tiles first, then lexicographically, each move ascending.
pub fn enumerate_moves(tiles: TileSet, total: u8) -> Vec<Move> {
    let open: Vec<u8> = tiles.into_iter().collect();
    let mut moves = Vec::new();
    let mut current = Vec::with_capacity(open.len());
    for size in 1..=open.len() {
        collect_combinations(&open, size, u32::from(total), &mut current, &mut moves);
    }
    moves
}

// Extends `current` by `size` more tiles taken from `remaining`, in ascending order.
// Since the tiles are ascending, a branch whose next tile already overshoots can be cut.
fn collect_combinations(
    remaining: &[u8],
    size: usize,
    target: u32,
    current: &mut Vec<u8>,
    moves: &mut Vec<Move>,
) {
    if size == 0 {
        if target == 0 {
            moves.push(Move(current.clone()));
        }
        return;
    }
    for (idx, &tile) in remaining.iter().enumerate() {
        let tile_value = u32::from(tile);
        if tile_value > target || remaining.len() - idx < size {
            break;
        }
        current.push(tile);
        collect_combinations(&remaining[idx + 1..], size - 1, target - tile_value, current, moves);
        current.pop();
    }
}

/// Checks a move against the open tiles and the roll total, reporting the first problem.
pub fn validate_move(mv: &Move, tiles: TileSet, total: u8) -> Result<(), InvalidMove> {
    if mv.is_empty() {
        return Err(InvalidMove::NoTiles);
    }
    let mut seen = TileSet::new();
    for &tile in mv.tiles() {
        if !tiles.contains(tile) {
            return Err(InvalidMove::TileNotOpen { tile });
        }
        if seen.contains(tile) {
            return Err(InvalidMove::DuplicateTile { tile });
        }
        seen = seen.insert(tile);
    }
    let actual = mv.sum();
    if actual != u32::from(total) {
        return Err(InvalidMove::WrongSum {
            expected: total,
            actual,
        });
    }
    Ok(())
}

/// Whether `mv` may be played: it sums to `total` and closes distinct open tiles.
pub fn is_valid(mv: &Move, tiles: TileSet, total: u8) -> bool {
    validate_move(mv, tiles, total).is_ok()
}

/// Closes the tiles of `mv`, returning the remaining open tiles.
///
/// Fails without touching anything if the move is not valid for `total`.
pub fn apply_move(tiles: TileSet, mv: &Move, total: u8) -> Result<TileSet, InvalidMove> {
    validate_move(mv, tiles, total)?;
    Ok(tiles & !mv.to_set())
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::Total;

    fn moves_of(list: &[&[u8]]) -> Vec<Move> {
        list.iter().map(|tiles| Move(tiles.to_vec())).collect()
    }

    // Reference enumeration over all 2^n subsets.
    fn brute_force(tiles: TileSet, total: u8) -> Vec<TileSet> {
        let open: Vec<u8> = tiles.into_iter().collect();
        let mut subsets = Vec::new();
        for mask in 1u32..(1 << open.len()) {
            let subset: TileSet = open
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, &t)| t)
                .collect();
            if subset.sum() == u32::from(total) {
                subsets.push(subset);
            }
        }
        subsets
    }

    quickcheck! {
        fn enumerated_moves_are_legal(tiles: TileSet, total: Total) -> bool {
            enumerate_moves(tiles, total.0).iter().all(|mv| {
                mv.sum() == u32::from(total.0)
                    && mv.to_set().is_subset(tiles)
                    && mv.to_set().len() as usize == mv.len()
                    && is_valid(mv, tiles, total.0)
            })
        }
    }

    quickcheck! {
        fn enumeration_is_complete(tiles: TileSet, total: Total) -> bool {
            let mut expected = brute_force(tiles, total.0);
            let mut actual: Vec<TileSet> =
                enumerate_moves(tiles, total.0).iter().map(Move::to_set).collect();
            let distinct = actual.len();
            expected.sort_by_key(|s| s.bits);
            actual.sort_by_key(|s| s.bits);
            actual.dedup();
            distinct == actual.len() && expected == actual
        }
    }

    quickcheck! {
        fn closed_tiles_are_never_offered_again(tiles: TileSet, first: Total, second: Total) -> bool {
            match enumerate_moves(tiles, first.0).first() {
                None => true,
                Some(mv) => {
                    let remaining = apply_move(tiles, mv, first.0).unwrap();
                    let closed = mv.to_set();
                    remaining.len() + closed.len() == tiles.len()
                        && enumerate_moves(remaining, second.0)
                            .iter()
                            .all(|next| (next.to_set() & closed).is_empty())
                }
            }
        }
    }

    quickcheck! {
        fn validation_is_repeatable(tiles: TileSet, total: Total, raw: Vec<u8>) -> bool {
            let mv = Move(raw);
            is_valid(&mv, tiles, total.0) == is_valid(&mv, tiles, total.0)
        }
    }

    #[test]
    fn ten_on_a_full_box() {
        let moves = enumerate_moves(TileSet::full(), 10);
        assert_eq!(
            moves,
            moves_of(&[
                &[1, 9],
                &[2, 8],
                &[3, 7],
                &[4, 6],
                &[1, 2, 7],
                &[1, 3, 6],
                &[1, 4, 5],
                &[2, 3, 5],
                &[1, 2, 3, 4],
            ])
        );
    }

    #[test]
    fn nine_on_a_full_box() {
        let moves = enumerate_moves(TileSet::full(), 9);
        assert_eq!(
            moves,
            moves_of(&[
                &[9],
                &[1, 8],
                &[2, 7],
                &[3, 6],
                &[4, 5],
                &[1, 2, 6],
                &[1, 3, 5],
                &[2, 3, 4],
            ])
        );
    }

    #[test]
    fn few_tiles_need_multi_tile_sums() {
        let tiles = TileSet::from_iter([1, 2, 4]);
        assert_eq!(enumerate_moves(tiles, 7), moves_of(&[&[1, 2, 4]]));
        assert_eq!(enumerate_moves(tiles, 6), moves_of(&[&[2, 4]]));
        assert!(enumerate_moves(tiles, 8).is_empty());
        assert!(enumerate_moves(TileSet::new(), 2).is_empty());
    }

    #[test]
    fn validation_errors() {
        let tiles = TileSet::from_iter([1, 2, 3, 7, 9]);
        assert_eq!(validate_move(&Move(vec![]), tiles, 4), Err(InvalidMove::NoTiles));
        assert_eq!(
            validate_move(&Move(vec![4]), tiles, 4),
            Err(InvalidMove::TileNotOpen { tile: 4 })
        );
        assert_eq!(
            validate_move(&Move(vec![2, 2]), tiles, 4),
            Err(InvalidMove::DuplicateTile { tile: 2 })
        );
        assert_eq!(
            validate_move(&Move(vec![1, 2]), tiles, 4),
            Err(InvalidMove::WrongSum {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(validate_move(&Move(vec![3, 1]), tiles, 4), Ok(()));
    }

    #[test]
    fn apply_closes_tiles() {
        let tiles = TileSet::full();
        let remaining = apply_move(tiles, &Move(vec![7, 2]), 9).unwrap();
        assert_eq!(remaining, TileSet::from_iter([1, 3, 4, 5, 6, 8, 9]));
        assert_eq!(
            apply_move(remaining, &Move(vec![7]), 7),
            Err(InvalidMove::TileNotOpen { tile: 7 })
        );
    }

    #[test]
    fn parse_moves() {
        assert_eq!("1 2".parse::<Move>(), Ok(Move(vec![1, 2])));
        assert_eq!(" 3,4 ".parse::<Move>(), Ok(Move(vec![3, 4])));
        assert_eq!("7, 2".parse::<Move>(), Ok(Move(vec![7, 2])));
        assert_eq!("".parse::<Move>(), Ok(Move(vec![])));
        assert_eq!(
            "1 x".parse::<Move>(),
            Err(InvalidMove::Malformed {
                input: String::from("1 x")
            })
        );
        assert!("1.5".parse::<Move>().is_err());
        assert!("-3".parse::<Move>().is_err());
        assert!("300".parse::<Move>().is_err());
    }
}
