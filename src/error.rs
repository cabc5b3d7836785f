//! Engine error types
//!
//! Every variant is recoverable by the caller. Internal invariant violations
//! (cell-array length mismatch, refill over a live tile) are programming
//! defects and fail fast with a panic instead of appearing here.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Tile index outside the grid
    #[error("tile index {0} is outside the grid")]
    OutOfRange(usize),

    /// Swap target does not share an edge with the selected tile
    #[error("tiles are not adjacent")]
    NotAdjacent,

    /// Command issued while a cascade sequence is resolving
    #[error("a cascade sequence is still resolving")]
    Busy,

    /// Board construction with dimensions below the 3x3 minimum
    #[error("board dimensions {width}x{height} are below the 3x3 minimum")]
    InvalidDimension { width: u8, height: u8 },

    /// Palette size outside the supported range
    #[error("palette size {0} is outside the supported 2..=5 range")]
    InvalidPalette(u8),

    /// Command issued after the game was won or lost; only restart is accepted
    #[error("game is over; only restart is accepted")]
    GameOver,
}
