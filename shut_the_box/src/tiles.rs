use std::iter::FusedIterator;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use serde::{Deserialize, Serialize};

/// The lowest numbered tile.
pub const MIN_TILE: u8 = 1;
/// The highest numbered tile.
pub const MAX_TILE: u8 = 9;
/// Sum of all tiles, i.e. the score of a game in which nothing was closed.
pub const TILES_SUM: u32 = 45;

/// The open tiles of a box, stored as one bit per tile.
///
/// `&`, `|`, `^` and `!` act as intersection, union, symmetric difference and
/// complement, where the complement is taken within the tiles 1 to 9. Iterating
/// yields the tiles in ascending order.
///
/// ```
/// use shut_the_box::TileSet;
/// let open = TileSet::full().remove(3).remove(6);
/// assert_eq!(open.sum(), 36);
/// assert_eq!(Vec::from_iter(!open), vec![3, 6]);
/// ```
///
/// The type is `Copy` and its methods return updated sets rather than mutating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<u8>", into = "Vec<u8>")]
pub struct TileSet {
    // Bit `i` is set iff tile `i` is open. Only bits 1 to 9 are used.
    pub(crate) bits: u16,
}

const VALID_BITS: u16 = 0b11_1111_1110;

fn is_tile(tile: u8) -> bool {
    (MIN_TILE..=MAX_TILE).contains(&tile)
}

impl TileSet {
    /// An empty set, i.e. a shut box.
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    /// The box at the start of a game: every tile from 1 to 9 open.
    pub fn full() -> Self {
        Self { bits: VALID_BITS }
    }

    pub fn len(self) -> u32 {
        self.bits.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Values outside of 1..=9 are never contained.
    pub fn contains(self, tile: u8) -> bool {
        is_tile(tile) && (self.bits & (1u16 << tile)) != 0
    }

    #[must_use]
    pub fn insert(self, tile: u8) -> Self {
        debug_assert!(is_tile(tile), "{} is not a tile", tile);
        Self {
            bits: (self.bits | (1u16 << tile)) & VALID_BITS,
        }
    }

    #[must_use]
    pub fn remove(self, tile: u8) -> Self {
        if !is_tile(tile) {
            return self;
        }
        Self {
            bits: self.bits & !(1u16 << tile),
        }
    }

    /// Sum of the tile values in this set.
    pub fn sum(self) -> u32 {
        self.into_iter().map(u32::from).sum()
    }

    pub fn is_subset(self, other: TileSet) -> bool {
        self.bits & !other.bits == 0
    }
}

macro_rules! tile_set_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for TileSet {
            type Output = TileSet;

            fn $method(self, rhs: TileSet) -> TileSet {
                TileSet {
                    bits: self.bits $op rhs.bits,
                }
            }
        }
    };
}

tile_set_op!(BitAnd, bitand, &);
tile_set_op!(BitOr, bitor, |);
tile_set_op!(BitXor, bitxor, ^);

impl Not for TileSet {
    type Output = TileSet;

    fn not(self) -> TileSet {
        TileSet {
            bits: !self.bits & VALID_BITS,
        }
    }
}

impl FromIterator<u8> for TileSet {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        iter.into_iter().fold(TileSet::new(), TileSet::insert)
    }
}

impl IntoIterator for TileSet {
    type Item = u8;

    type IntoIter = TileSetIter;

    fn into_iter(self) -> Self::IntoIter {
        TileSetIter { bits: self.bits }
    }
}

impl From<Vec<u8>> for TileSet {
    fn from(tiles: Vec<u8>) -> Self {
        tiles.into_iter().filter(|&t| is_tile(t)).collect()
    }
}

impl From<TileSet> for Vec<u8> {
    fn from(set: TileSet) -> Self {
        set.into_iter().collect()
    }
}

impl std::fmt::Display for TileSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (idx, tile) in self.into_iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", tile)?;
        }
        write!(f, "]")
    }
}

/// Iterator for a [`TileSet`] that returns tiles in ascending order.
#[derive(Clone, Copy, Debug)]
pub struct TileSetIter {
    bits: u16,
}

impl Iterator for TileSetIter {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            None
        } else {
            // The number of trailing zeros is the tile value
            let tile = self.bits.trailing_zeros() as u8;
            self.bits ^= 1u16 << tile;
            Some(tile)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bits.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TileSetIter {}

impl FusedIterator for TileSetIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_box() {
        let full = TileSet::full();
        assert_eq!(full.len(), 9);
        assert_eq!(full.sum(), TILES_SUM);
        assert_eq!(Vec::from_iter(full), (1..=9).collect::<Vec<u8>>());
        assert!(!full.contains(0));
        assert!(!full.contains(10));
        assert!(!full.contains(200));
    }

    #[test]
    fn complement_stays_within_tiles() {
        let set = TileSet::from_iter([1, 5, 9]);
        assert_eq!(!set, TileSet::from_iter([2, 3, 4, 6, 7, 8]));
        assert_eq!(!TileSet::full(), TileSet::new());
        assert_eq!(set | !set, TileSet::full());
        assert_eq!(set & !set, TileSet::default());
        assert_eq!(set ^ TileSet::from_iter([1, 2]), TileSet::from_iter([2, 5, 9]));
    }

    #[test]
    fn remove_ignores_non_tiles() {
        let set = TileSet::full().remove(12).remove(0);
        assert_eq!(set, TileSet::full());
        assert_eq!(set.remove(4).sum(), 41);
    }

    #[test]
    fn subset() {
        let small = TileSet::from_iter([2, 3]);
        assert!(small.is_subset(TileSet::full()));
        assert!(!TileSet::full().is_subset(small));
        assert!(TileSet::new().is_subset(small));
    }

    #[test]
    fn display() {
        assert_eq!(TileSet::from_iter([9, 1, 4]).to_string(), "[1, 4, 9]");
        assert_eq!(TileSet::new().to_string(), "[]");
    }

    #[test]
    fn serde_as_list() {
        let set = TileSet::from_iter([3, 8]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[3,8]");
        assert_eq!(serde_json::from_str::<TileSet>(&json).unwrap(), set);
    }
}
