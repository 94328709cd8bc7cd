//! Key mapping from terminal events to snake turns.

use crate::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a turn. Unmapped keys mean "keep going".
pub fn key_to_direction(key: KeyEvent) -> Option<Direction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('i') | KeyCode::Char('I') => Some(Direction::Up),
        KeyCode::Left | KeyCode::Char('j') | KeyCode::Char('J') => Some(Direction::Left),
        KeyCode::Down | KeyCode::Char('k') | KeyCode::Char('K') => Some(Direction::Down),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(Direction::Right),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
