//! Key mapping from terminal events to per-tick intents.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::Intent;

/// Map one key press to an intent.
pub fn intent_for_key(key: KeyEvent) -> Intent {
    if key.kind == KeyEventKind::Release {
        return Intent::None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Intent::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Intent::Quit,

        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Intent::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Intent::Right,
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char(' ') => Intent::Up,

        _ => Intent::None,
    }
}

/// Fold every key seen during one frame into a single intent: quitting wins,
/// otherwise the most recent meaningful key.
pub fn latest_intent(keys: impl IntoIterator<Item = KeyEvent>) -> Intent {
    let mut latest = Intent::None;
    for key in keys {
        match intent_for_key(key) {
            Intent::Quit => return Intent::Quit,
            Intent::None => {}
            intent => latest = intent,
        }
    }
    latest
}
