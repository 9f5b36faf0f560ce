//! Rendering layer: all terminal output lives here.
//!
//! Functions take a writer and an immutable view of the game; nothing here
//! touches game state.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use zoomba_bounce::{Game, Tile};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PLAYER: Color = Color::White;
const C_ZOOMBA: Color = Color::Green;
const C_SCORE: Color = Color::Yellow;
const C_VICTORY: Color = Color::Cyan;

// ── Per-frame grid ────────────────────────────────────────────────────────────

/// Draw the whole grid, one terminal row per grid row.
pub fn render<W: Write>(out: &mut W, game: &Game) -> std::io::Result<()> {
    for (y, row) in game.grid().tiles().iter().enumerate() {
        out.queue(cursor::MoveTo(0, y as u16))?;
        let mut current = None;
        for &tile in row {
            let color = match tile {
                Tile::Player => C_PLAYER,
                Tile::Zoomba => C_ZOOMBA,
                Tile::Empty => Color::Reset,
            };
            if current != Some(color) {
                out.queue(style::SetForegroundColor(color))?;
                current = Some(color);
            }
            out.queue(Print(tile.glyph()))?;
        }
    }

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

// ── End of session ────────────────────────────────────────────────────────────

/// Overlay the final score at (height/2, width/4).
pub fn draw_farewell<W: Write>(out: &mut W, game: &Game) -> std::io::Result<()> {
    let grid = game.grid();
    let col = (grid.width() / 4) as u16;
    let row = (grid.height() / 2) as u16;

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    if game.is_victorious() {
        out.queue(cursor::MoveTo(col, row.saturating_sub(1)))?;
        out.queue(style::SetForegroundColor(C_VICTORY))?;
        out.queue(Print("You reached the top!"))?;
    }

    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_SCORE))?;
    out.queue(Print(format!("You earned {} points!", game.points())))?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}
