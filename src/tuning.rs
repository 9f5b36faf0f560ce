//! Tuning constants. These values define how the game feels; tests depend
//! on them being exact.

use std::time::Duration;

/// The Zoomba moves once every this many updates.
pub const ZOOMBA_CADENCE: u32 = 4;

/// Vertical speed lost per airborne tick.
pub const GRAVITY_STEP: i32 = 1;

/// Gravity stops applying once vertical speed is at or below this.
pub const FLOOR_SPEED: i32 = -30;

/// |momentum| must exceed this before the player moves one row.
pub const MOMENTUM_THRESHOLD: i32 = 40;

/// Vertical speed given by a jump from the ground.
pub const LAUNCH_SPEED: i32 = 20;

/// Extra launch speed per combo level when bouncing off a Zoomba.
pub const COMBO_LAUNCH_BONUS: i32 = 5;

/// Where the player appears at the start of a session.
pub const PLAYER_START: (i32, i32) = (15, 10);

/// Fixed simulation and render rate.
pub const FRAMES_PER_SECOND: u32 = 30;

/// Duration of one tick at [`FRAMES_PER_SECOND`].
pub const FRAME: Duration = Duration::from_millis(1000 / FRAMES_PER_SECOND as u64);

/// Narrowest terminal the game can run in.
pub const MIN_WIDTH: u16 = 2;

/// Shortest terminal the game can run in.
pub const MIN_HEIGHT: u16 = 2;

/// How long the final score stays on screen before the terminal is restored.
pub const FAREWELL_HOLD: Duration = Duration::from_secs(5);
