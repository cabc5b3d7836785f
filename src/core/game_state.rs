//! Game state module - the turn state machine
//!
//! Ties the core components together: board, tile source, match detection,
//! cascade resolution, and scoring. One `GameState` is one independent game
//! session; all mutation goes through its methods, so replays with the same
//! seed and command stream are identical.

use crate::core::board::Board;
use crate::core::cascade::{self, CascadeRound};
use crate::core::rng::RandomTileSource;
use crate::core::scoring;
use crate::core::snapshot::GameSnapshot;
use crate::error::EngineError;
use crate::types::{EngineConfig, GameResult};

/// Selection state machine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    AwaitingFirst,
    AwaitingSecond(usize),
    Resolving,
}

/// Outcome of a [`GameState::select_tile`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// First tile recorded; the next selection is the swap target
    Selected,
    /// Swap target was not adjacent; selection cleared, board untouched
    SwapRejected,
    /// Swap accepted and resolved to quiescence
    Sequence(SequenceResult),
}

/// Everything that happened while resolving one accepted swap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceResult {
    /// Completed rounds in order; empty when the swap produced no match
    pub rounds: Vec<CascadeRound>,
    /// Score after the sequence
    pub score: u32,
    /// Move budget after the sequence
    pub moves_left: u32,
    pub penalty_applied: bool,
    /// Peak chain depth of the sequence
    pub highest_combo: u32,
    pub result: GameResult,
}

/// Complete game session state
#[derive(Debug, Clone)]
pub struct GameState {
    config: EngineConfig,
    board: Board,
    tiles: RandomTileSource,
    phase: Phase,
    score: u32,
    moves_left: u32,
    combos: u32,
    highest_combo: u32,
    result: GameResult,
    /// Monotonic episode id (increments on restart)
    episode_id: u32,
}

impl GameState {
    /// Create a new game with a freshly filled board.
    ///
    /// Pre-existing runs on the initial board are not suppressed; they are
    /// swept into the first swap's resolution.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let mut tiles = RandomTileSource::new(config.seed, config.palette_size)?;
        let board = Board::filled(config.width, config.height, &mut tiles)?;

        Ok(Self {
            config,
            board,
            tiles,
            phase: Phase::AwaitingFirst,
            score: 0,
            moves_left: config.starting_moves,
            combos: 0,
            highest_combo: 0,
            result: GameResult::InProgress,
            episode_id: 0,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves_left(&self) -> u32 {
        self.moves_left
    }

    pub fn combos(&self) -> u32 {
        self.combos
    }

    pub fn highest_combo(&self) -> u32 {
        self.highest_combo
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Currently selected tile, if the machine is awaiting a swap target
    pub fn selection(&self) -> Option<usize> {
        match self.phase {
            Phase::AwaitingSecond(index) => Some(index),
            _ => None,
        }
    }

    /// Select a tile, or swap with the previous selection.
    ///
    /// The first call records the selection. The second call attempts the
    /// swap: a non-adjacent target clears the selection and mutates nothing;
    /// an adjacent one is swapped unconditionally and resolved to
    /// quiescence before this returns. Terminal games only accept
    /// [`GameState::restart`].
    pub fn select_tile(&mut self, index: usize) -> Result<SelectionOutcome, EngineError> {
        if self.phase == Phase::Resolving {
            return Err(EngineError::Busy);
        }
        if self.result != GameResult::InProgress {
            return Err(EngineError::GameOver);
        }
        if !self.board.contains(index) {
            return Err(EngineError::OutOfRange(index));
        }

        match self.phase {
            Phase::AwaitingFirst => {
                self.phase = Phase::AwaitingSecond(index);
                Ok(SelectionOutcome::Selected)
            }
            Phase::AwaitingSecond(first) => {
                // Selection is spent by this attempt whatever the outcome.
                self.phase = Phase::AwaitingFirst;
                match self.board.swap(first, index) {
                    Ok(()) => {
                        self.phase = Phase::Resolving;
                        let sequence = self.resolve_swap();
                        self.phase = Phase::AwaitingFirst;
                        Ok(SelectionOutcome::Sequence(sequence))
                    }
                    Err(EngineError::NotAdjacent) => Ok(SelectionOutcome::SwapRejected),
                    Err(err) => Err(err),
                }
            }
            Phase::Resolving => Err(EngineError::Busy),
        }
    }

    /// Reinitialize all mutable state and return the fresh snapshot.
    ///
    /// The tile source is reseeded from its current state, so the new board
    /// differs from the last one but the whole session stays reproducible
    /// from the original seed.
    pub fn restart(&mut self) -> GameSnapshot {
        let mut tiles = self.tiles.split();
        self.board = Board::filled(self.config.width, self.config.height, &mut tiles)
            .expect("dimensions validated at construction");
        self.tiles = tiles;
        self.phase = Phase::AwaitingFirst;
        self.score = 0;
        self.moves_left = self.config.starting_moves;
        self.combos = 0;
        self.highest_combo = 0;
        self.result = GameResult::InProgress;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.snapshot()
    }

    /// Read-only snapshot for renderer bootstrap
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            width: self.board.width(),
            height: self.board.height(),
            cells: self.board.cells().to_vec(),
            score: self.score,
            moves_left: self.moves_left,
            combos: self.combos,
            highest_combo: self.highest_combo,
            target_score: self.config.target_score,
            result: self.result,
            episode_id: self.episode_id,
            seed: self.tiles.state(),
        }
    }

    /// Resolve the just-performed swap and settle budgets and results.
    fn resolve_swap(&mut self) -> SequenceResult {
        self.combos = 0;
        self.highest_combo = 0;

        let outcome = cascade::resolve(&mut self.board, &mut self.tiles);

        for round in &outcome.rounds {
            self.combos = round.combo;
            self.highest_combo = self.highest_combo.max(round.combo);
            self.score = self.score.saturating_add(round.score);
            self.moves_left = self.moves_left.saturating_add(self.config.move_bonus);
            if self.result == GameResult::InProgress && self.score >= self.config.target_score {
                self.result = GameResult::Won;
            }
        }

        let penalty_applied = outcome.penalty;
        if penalty_applied {
            self.moves_left = self.moves_left.saturating_sub(self.config.penalty_moves);
            self.score = scoring::penalized_score(self.score, self.config.penalty_points);
            if self.result == GameResult::InProgress && self.moves_left == 0 {
                self.result = GameResult::Lost;
            }
        }

        let highest_combo = self.highest_combo;
        // The peak resets once the sequence is over; the last chain depth
        // stays observable until the next swap.
        self.highest_combo = 0;

        SequenceResult {
            rounds: outcome.rounds,
            score: self.score,
            moves_left: self.moves_left,
            penalty_applied,
            highest_combo,
            result: self.result,
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn force_resolving(&mut self) {
        self.phase = Phase::Resolving;
    }
}
