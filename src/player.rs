//! The player: free horizontal movement plus a momentum-driven jump arc.
//!
//! Vertical speed is added to a momentum accumulator every tick and the
//! player only moves one row once |momentum| exceeds [`MOMENTUM_THRESHOLD`].
//! High speeds cross the threshold in fewer ticks than low ones, so the arc
//! is fast off the ground and slow near its apex using integers alone.
//! Positive vertical speed is rising, negative is falling.

use log::{info, trace};

use crate::entities::{Intent, Tile};
use crate::grid::Grid;
use crate::tuning::{
    COMBO_LAUNCH_BONUS, FLOOR_SPEED, GRAVITY_STEP, LAUNCH_SPEED, MOMENTUM_THRESHOLD,
};

#[derive(Clone, Debug)]
pub struct Player {
    x: i32,
    y: i32,
    speed_x: i32,
    speed_y: i32,
    momentum: i32,
    /// Zoomba bounces since the player last stood on the ground.
    bounces: u32,
    points: u32,
    hit_ceiling: bool,
}

impl Player {
    /// A player at rest at `(x, y)`. The cell must lie inside the grid it is
    /// updated against.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            speed_x: 0,
            speed_y: 0,
            momentum: 0,
            bounces: 0,
            points: 0,
            hit_ceiling: false,
        }
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn horizontal_speed(&self) -> i32 {
        self.speed_x
    }

    pub fn vertical_speed(&self) -> i32 {
        self.speed_y
    }

    pub fn momentum(&self) -> i32 {
        self.momentum
    }

    /// Current combo depth.
    pub fn bounces(&self) -> u32 {
        self.bounces
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    /// Set once the player has tried to rise past the top row. Never cleared.
    pub fn is_victorious(&self) -> bool {
        self.hit_ceiling
    }

    pub fn is_rising(&self) -> bool {
        self.speed_y > 0
    }

    /// Standing on the bottom row.
    pub fn is_grounded(&self, grid: &Grid) -> bool {
        grid.is_out_of_bounds(self.x, self.y + 1)
    }

    /// Bounce off a Zoomba directly below, if there is one and the player is
    /// not rising. Returns whether a bounce happened; the caller is
    /// responsible for squashing the Zoomba.
    pub fn collide(&mut self, grid: &Grid) -> bool {
        if self.is_rising() {
            return false;
        }
        if !grid.is_collision(self.x, self.y + 1, Tile::Zoomba) {
            return false;
        }

        self.bounces += 1;
        self.points += self.bounces;
        self.momentum = 0;
        self.speed_y = LAUNCH_SPEED + COMBO_LAUNCH_BONUS * self.bounces as i32;
        info!(
            "bounce x{} at ({}, {}), score {}",
            self.bounces, self.x, self.y, self.points
        );
        true
    }

    /// Advance one tick: apply `intent`, gravity and momentum, then redraw.
    pub fn update(&mut self, grid: &mut Grid, intent: Intent) {
        let grounded = self.is_grounded(grid);

        match intent {
            Intent::Left => self.speed_x = -1,
            Intent::Right => self.speed_x = 1,
            // A held key repeats Up while the launch is still on the floor.
            Intent::Up if grounded => {
                if !self.is_rising() {
                    self.speed_y = LAUNCH_SPEED;
                    self.momentum = 0;
                    trace!("launch from ({}, {})", self.x, self.y);
                }
            }
            _ => self.speed_x = 0,
        }

        grid.set_tile(self.x, self.y, Tile::Empty);

        if !grounded && self.speed_y > FLOOR_SPEED {
            self.speed_y -= GRAVITY_STEP;
        }

        self.momentum += self.speed_y;
        if self.momentum.abs() > MOMENTUM_THRESHOLD {
            self.step_vertically(grid);
            self.momentum = 0;
        }

        if !grid.is_out_of_bounds(self.x + self.speed_x, self.y) {
            self.x += self.speed_x;
        }

        if self.is_grounded(grid) {
            self.bounces = 0;
        }

        grid.set_tile(self.x, self.y, Tile::Player);
    }

    fn step_vertically(&mut self, grid: &Grid) {
        if self.speed_y > 0 {
            if grid.is_out_of_bounds(self.x, self.y - 1) {
                if !self.hit_ceiling {
                    info!("reached the top with {} points", self.points);
                }
                self.hit_ceiling = true;
            } else {
                self.y -= 1;
            }
        } else if self.speed_y < 0 {
            if grid.is_out_of_bounds(self.x, self.y + 1) {
                self.speed_y = 0;
            } else {
                self.y += 1;
            }
        }
    }
}
