//! Terminal frontend - pure view building plus a crossterm renderer
//!
//! The view maps engine snapshots into a styled frame with no I/O; the
//! renderer flushes frames to the real terminal. All game logic stays in
//! the core.

pub mod game_view;
pub mod renderer;

pub use game_view::{encouragement_for, status_line, Frame, GameView, UiState, Viewport};
pub use renderer::TerminalRenderer;
