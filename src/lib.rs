//! Zoomba Bounce: a fixed-timestep terminal arcade game.
//!
//! The player bounces on a Zoomba sweeping the bottom row; chained bounces
//! build a combo and reaching the top row wins. Everything in this crate is
//! terminal-agnostic except the key mapping in [`input`].

pub mod entities;
pub mod game;
pub mod grid;
pub mod input;
pub mod player;
pub mod tuning;
pub mod zoomba;

pub use entities::{Intent, Outcome, Side, Tile};
pub use game::Game;
pub use grid::Grid;
pub use player::Player;
pub use zoomba::Zoomba;
