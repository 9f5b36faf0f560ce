//! Shared game value types: pure data, no logic beyond glyph lookup.

// ── Tiles ─────────────────────────────────────────────────────────────────────

/// Content of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tile {
    #[default]
    Empty,
    Player,
    Zoomba,
}

impl Tile {
    /// Character drawn for this tile.
    pub fn glyph(self) -> char {
        match self {
            Tile::Empty => ' ',
            Tile::Player => '@',
            Tile::Zoomba => 'Z',
        }
    }
}

// ── Per-tick input ────────────────────────────────────────────────────────────

/// What the player asked for during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Intent {
    Left,
    Right,
    /// Jump (only honoured while grounded).
    Up,
    #[default]
    None,
    Quit,
}

// ── Zoomba entry & session end ────────────────────────────────────────────────

/// Edge of the grid a Zoomba enters from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Quit,
    Victory,
}
