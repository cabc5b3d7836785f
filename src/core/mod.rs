//! Core module - pure game logic with no external dependencies
//!
//! This module contains the whole board-state engine: grid primitives,
//! match detection, cascade resolution, scoring, and the turn state machine.
//! It has zero dependencies on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: same seed and command stream, identical game
//! - **Testable**: every rule has unit tests against crafted boards
//! - **Portable**: runs in any environment (terminal, adapter, headless)

pub mod board;
pub mod cascade;
pub mod game_state;
pub mod matcher;
pub mod rng;
pub mod scoring;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use cascade::{CascadeOutcome, CascadeRound, ColumnDrop, RefillSpec};
pub use game_state::{GameState, SelectionOutcome, SequenceResult};
pub use rng::{RandomTileSource, SimpleRng, TileSource};
pub use snapshot::GameSnapshot;
