//! One game session: owns the grid, the player and the Zoomba and advances
//! them in a fixed order each tick.

use rand::Rng;

use crate::entities::{Intent, Outcome};
use crate::grid::Grid;
use crate::player::Player;
use crate::tuning::PLAYER_START;
use crate::zoomba::Zoomba;

#[derive(Clone, Debug)]
pub struct Game {
    grid: Grid,
    player: Player,
    zoomba: Zoomba,
}

impl Game {
    /// Fresh session on a `width` × `height` grid. The player starts at
    /// [`PLAYER_START`], pulled inside the grid when it is smaller than that.
    /// Both dimensions must be non-zero.
    pub fn new(width: u16, height: u16) -> Self {
        let grid = Grid::new(width, height);
        let x = PLAYER_START.0.min(grid.width() - 1);
        let y = PLAYER_START.1.min(grid.height() - 1);
        Self::from_parts(grid, Player::new(x, y), Zoomba::default())
    }

    /// Session assembled from prepared parts. The player's cell must be in
    /// bounds.
    pub fn from_parts(grid: Grid, player: Player, zoomba: Zoomba) -> Self {
        Self { grid, player, zoomba }
    }

    /// Advance one tick: resolve a bounce, move the player, then move or
    /// respawn the Zoomba.
    pub fn update(&mut self, intent: Intent, rng: &mut impl Rng) {
        if self.player.collide(&self.grid) {
            self.zoomba.squash(&mut self.grid);
        }

        self.player.update(&mut self.grid, intent);

        if self.zoomba.is_alive() {
            self.zoomba.update(&mut self.grid);
        } else {
            self.zoomba.spawn(&self.grid, rng);
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn zoomba(&self) -> &Zoomba {
        &self.zoomba
    }

    pub fn points(&self) -> u32 {
        self.player.points()
    }

    pub fn is_victorious(&self) -> bool {
        self.player.is_victorious()
    }

    /// `Some(Outcome::Victory)` once the top has been reached.
    pub fn outcome(&self) -> Option<Outcome> {
        self.is_victorious().then_some(Outcome::Victory)
    }
}
