//! Fixed-size tile buffer shared by the player and the Zoomba.

use crate::entities::Tile;

/// A `width` × `height` buffer of tiles, row-major, origin top-left.
///
/// Queries accept any coordinate; writes require an in-bounds cell, so every
/// caller checks [`Grid::is_out_of_bounds`] first.
#[derive(Clone, Debug)]
pub struct Grid {
    width: i32,
    height: i32,
    tiles: Vec<Vec<Tile>>,
}

impl Grid {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: width as i32,
            height: height as i32,
            tiles: vec![vec![Tile::Empty; width as usize]; height as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn is_out_of_bounds(&self, x: i32, y: i32) -> bool {
        x < 0 || x >= self.width || y < 0 || y >= self.height
    }

    /// True if `(x, y)` is in bounds and holds `tile`.
    pub fn is_collision(&self, x: i32, y: i32, tile: Tile) -> bool {
        if self.is_out_of_bounds(x, y) {
            return false;
        }
        self.tiles[y as usize][x as usize] == tile
    }

    /// Tile at `(x, y)`, or `None` outside the grid.
    pub fn tile(&self, x: i32, y: i32) -> Option<Tile> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some(self.tiles[y as usize][x as usize])
    }

    /// Overwrite one cell. `(x, y)` must be in bounds.
    pub fn set_tile(&mut self, x: i32, y: i32, tile: Tile) {
        debug_assert!(
            !self.is_out_of_bounds(x, y),
            "set_tile({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        self.tiles[y as usize][x as usize] = tile;
    }

    pub fn tiles(&self) -> &[Vec<Tile>] {
        &self.tiles
    }
}
