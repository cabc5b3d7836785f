//! Read-only game snapshot for renderer bootstrap

use crate::types::{Cell, GameResult};

/// Complete observable state of a game at one instant.
///
/// Renderers use this to draw from scratch; everything incremental travels
/// through sequence results instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Flat row-major cells, row 0 first
    pub cells: Vec<Cell>,
    pub score: u32,
    pub moves_left: u32,
    /// Chain depth of the most recent cascade sequence
    pub combos: u32,
    /// Highest chain depth within the currently resolving sequence; zero
    /// between sequences
    pub highest_combo: u32,
    pub target_score: u32,
    pub result: GameResult,
    /// Increments on restart
    pub episode_id: u32,
    /// Tile-source state, usable to reproduce the continuation
    pub seed: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.result == GameResult::InProgress
    }
}
