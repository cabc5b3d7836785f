//! Protocol module - JSON message types for the stdio adapter
//!
//! Cells travel as `u8` codes: 0 is empty, 1..=5 is palette index + 1.
//! Empty never appears in a settled snapshot, but round refill events can
//! be replayed against a board mid-clear, so the code space keeps it.

use serde::{Deserialize, Serialize};

use crate::core::snapshot::GameSnapshot;
use crate::core::{CascadeRound, SequenceResult};
use crate::error::EngineError;
use crate::types::{Cell, Color};

// ============== Client -> Engine Messages ==============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Select a tile (or swap with the pending selection)
    Select { index: usize },
    /// Reinitialize all mutable state
    Restart,
    /// Request a full snapshot
    Snapshot,
    /// End the session
    Quit,
}

// ============== Engine -> Client Messages ==============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    Snapshot(SnapshotMsg),
    Selected { index: usize },
    SwapRejected { index: usize },
    Sequence(SequenceMsg),
    Error { kind: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotMsg {
    pub width: u8,
    pub height: u8,
    pub cells: Vec<u8>,
    pub score: u32,
    pub moves_left: u32,
    pub combos: u32,
    pub highest_combo: u32,
    pub target_score: u32,
    pub result: String,
    pub episode_id: u32,
    pub seed: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundMsg {
    pub cleared: Vec<usize>,
    /// `[col, moved]` pairs for columns where tiles fell
    pub drops: Vec<[u8; 2]>,
    pub refills: Vec<RefillMsg>,
    pub score: u32,
    pub combo: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefillMsg {
    pub col: u8,
    /// Color codes for the refilled cells, top row first
    pub colors: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceMsg {
    pub rounds: Vec<RoundMsg>,
    pub score: u32,
    pub moves_left: u32,
    pub penalty_applied: bool,
    pub highest_combo: u32,
    pub result: String,
}

/// Wire code for a cell (0 = empty)
pub fn cell_code(cell: Cell) -> u8 {
    match cell {
        None => 0,
        Some(color) => color.index() + 1,
    }
}

/// Wire code for a generated color
pub fn color_code(color: Color) -> u8 {
    color.index() + 1
}

/// Stable kind string for an engine error
pub fn error_kind(err: EngineError) -> &'static str {
    match err {
        EngineError::OutOfRange(_) => "out_of_range",
        EngineError::NotAdjacent => "not_adjacent",
        EngineError::Busy => "busy",
        EngineError::InvalidDimension { .. } => "invalid_dimension",
        EngineError::InvalidPalette(_) => "invalid_palette",
        EngineError::GameOver => "game_over",
    }
}

impl SnapshotMsg {
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Self {
        Self {
            width: snapshot.width,
            height: snapshot.height,
            cells: snapshot.cells.iter().map(|&cell| cell_code(cell)).collect(),
            score: snapshot.score,
            moves_left: snapshot.moves_left,
            combos: snapshot.combos,
            highest_combo: snapshot.highest_combo,
            target_score: snapshot.target_score,
            result: snapshot.result.as_str().to_string(),
            episode_id: snapshot.episode_id,
            seed: snapshot.seed,
        }
    }
}

impl RoundMsg {
    pub fn from_round(round: &CascadeRound) -> Self {
        Self {
            cleared: round.cleared.clone(),
            drops: round.drops.iter().map(|d| [d.col, d.moved]).collect(),
            refills: round
                .refills
                .iter()
                .map(|r| RefillMsg {
                    col: r.col,
                    colors: r.colors.iter().map(|&c| color_code(c)).collect(),
                })
                .collect(),
            score: round.score,
            combo: round.combo,
        }
    }
}

impl SequenceMsg {
    pub fn from_result(sequence: &SequenceResult) -> Self {
        Self {
            rounds: sequence.rounds.iter().map(RoundMsg::from_round).collect(),
            score: sequence.score,
            moves_left: sequence.moves_left,
            penalty_applied: sequence.penalty_applied,
            highest_combo: sequence.highest_combo,
            result: sequence.result.as_str().to_string(),
        }
    }
}
