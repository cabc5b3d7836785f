//! Key mapping from terminal events to UI actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions the terminal frontend understands. Cursor movement and selection
/// live here, not in the engine: the engine only ever sees `select_tile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    Select,
    Restart,
}

/// Map keyboard input to UI actions.
pub fn handle_key_event(key: KeyEvent) -> Option<UiAction> {
    match key.code {
        // Cursor movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(UiAction::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(UiAction::CursorRight),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(UiAction::CursorUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(UiAction::CursorDown),

        // Selection / swap
        KeyCode::Char(' ') | KeyCode::Enter => Some(UiAction::Select),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(UiAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
