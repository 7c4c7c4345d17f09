use crate::{TileSet, MAX_TILE, MIN_TILE};

/// Renders the box as a single line, with closed tiles shown as `·`.
///
/// ```
/// # use shut_the_box::{visualize_tiles, TileSet};
/// let tiles = TileSet::from_iter([1, 2, 5, 9]);
/// assert_eq!(visualize_tiles(tiles), "│ 1 2 · · 5 · · · 9 │");
/// ```
pub fn visualize_tiles(tiles: TileSet) -> String {
    let mut result = String::from("│");
    for tile in MIN_TILE..=MAX_TILE {
        if tiles.contains(tile) {
            result += &format!(" {}", tile);
        } else {
            result += " ·";
        }
    }
    result += " │";
    result
}
