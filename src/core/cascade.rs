//! Cascade resolution - clear, gravity, refill, re-check until stable
//!
//! One accepted swap is resolved to quiescence in a single synchronous loop.
//! Each completed round is reported as plain data (cleared indices, column
//! drops, refill colors, round score, combo depth) so an external renderer
//! can pace the animation; the engine never sleeps between rounds.

use crate::core::board::Board;
use crate::core::matcher;
use crate::core::rng::TileSource;
use crate::core::scoring;
use crate::types::Color;

/// Tiles that fell within one column during a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDrop {
    pub col: u8,
    /// Number of tiles that changed row
    pub moved: u8,
}

/// Colors generated for the top of one column during a round (top row first)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefillSpec {
    pub col: u8,
    pub colors: Vec<Color>,
}

/// One completed clearing round within a cascade sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeRound {
    /// Matched cell indices cleared this round, ascending
    pub cleared: Vec<usize>,
    /// Per-column fall counts, only columns where something moved
    pub drops: Vec<ColumnDrop>,
    /// Per-column refills, only columns that lost tiles
    pub refills: Vec<RefillSpec>,
    pub score: u32,
    /// 1-indexed position of this round in the sequence
    pub combo: u32,
}

/// Result of resolving one accepted swap to quiescence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeOutcome {
    pub rounds: Vec<CascadeRound>,
    /// True when the very first check found nothing: the swap whiffed and
    /// the caller should apply the penalty.
    pub penalty: bool,
}

/// Run the check -> clear -> drop -> refill loop until no window matches.
///
/// Columns are processed left to right and refilled top to bottom, so the
/// tile source consumption order is reproducible from the seed.
pub fn resolve<S: TileSource>(board: &mut Board, source: &mut S) -> CascadeOutcome {
    let mut rounds: Vec<CascadeRound> = Vec::new();
    let mut penalty_eligible = true;

    loop {
        let matched = matcher::find_matches(board);
        if matched.is_empty() {
            break;
        }
        penalty_eligible = false;

        let cleared: Vec<usize> = matched.into_iter().collect();
        board.clear_cells(&cleared);

        let combo = rounds.len() as u32 + 1;
        let score = scoring::round_score(cleared.len(), combo);

        let mut drops = Vec::new();
        let mut refills = Vec::new();
        for col in 0..board.width() {
            let moved = board.compact_column(col);
            if moved > 0 {
                drops.push(ColumnDrop { col, moved });
            }
            let missing = board.empty_in_column(col);
            if missing > 0 {
                let colors = board.refill_column(col, missing, source);
                refills.push(RefillSpec { col, colors });
            }
        }

        rounds.push(CascadeRound {
            cleared,
            drops,
            refills,
            score,
            combo,
        });
    }

    CascadeOutcome {
        rounds,
        penalty: penalty_eligible,
    }
}
