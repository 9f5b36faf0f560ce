//! The Zoomba: an enemy that sweeps the bottom row from one edge to the other.
//!
//! It is drawn two cells wide (its position plus the cell behind it) and
//! only moves on every [`ZOOMBA_CADENCE`]th update.

use log::debug;
use rand::Rng;

use crate::entities::{Side, Tile};
use crate::grid::Grid;
use crate::tuning::ZOOMBA_CADENCE;

#[derive(Clone, Debug, Default)]
pub struct Zoomba {
    x: i32,
    y: i32,
    speed: i32,
    alive: bool,
    frames: u32,
}

impl Zoomba {
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// +1 when travelling right, -1 when travelling left.
    pub fn speed(&self) -> i32 {
        self.speed
    }

    /// Bring the Zoomba to life at a randomly chosen edge.
    pub fn spawn(&mut self, grid: &Grid, rng: &mut impl Rng) {
        let side = if rng.gen_bool(0.5) { Side::Left } else { Side::Right };
        self.enter(grid, side);
    }

    /// Place the Zoomba just outside `side` of the bottom row, heading inward.
    /// Nothing is drawn until its first move.
    pub fn enter(&mut self, grid: &Grid, side: Side) {
        (self.x, self.speed) = match side {
            Side::Left => (-1, 1),
            Side::Right => (grid.width(), -1),
        };
        self.y = grid.height() - 1;
        self.alive = true;
        debug!("zoomba entering from {side:?} at x={}", self.x);
    }

    /// Kill the Zoomba and wipe it from the grid.
    pub fn squash(&mut self, grid: &mut Grid) {
        self.alive = false;
        self.paint(grid, Tile::Empty);
        debug!("zoomba squashed at x={}", self.x);
    }

    pub fn update(&mut self, grid: &mut Grid) {
        if !self.alive {
            return;
        }

        if self.frames < ZOOMBA_CADENCE - 1 {
            self.frames += 1;
            return;
        }
        self.frames = 0;

        self.paint(grid, Tile::Empty);
        self.x += self.speed;

        if self.x == -2 || self.x == grid.width() + 1 {
            self.alive = false;
            debug!("zoomba left the grid at x={}", self.x);
            return;
        }

        self.paint(grid, Tile::Zoomba);
    }

    // Head and trailing cell, skipping whichever lies off the grid.
    fn paint(&self, grid: &mut Grid, tile: Tile) {
        for x in [self.x, self.x - self.speed] {
            if !grid.is_out_of_bounds(x, self.y) {
                grid.set_tile(x, self.y, tile);
            }
        }
    }
}
