//! Match-3 board engine with a terminal frontend and a JSON stdio adapter.
//!
//! The engine core ([`core`]) is pure and synchronous: a swap command is
//! validated, applied, and resolved to quiescence in one call, returning the
//! ordered list of cascade rounds as data. Renderers pace the animation on
//! their side; the engine never sleeps, ticks, or schedules anything.
//!
//! # Example
//!
//! ```
//! use tui_match3::core::{GameState, SelectionOutcome};
//! use tui_match3::types::EngineConfig;
//!
//! let mut game = GameState::new(EngineConfig::default()).unwrap();
//!
//! // First selection is recorded; the second attempts the swap.
//! assert_eq!(game.select_tile(0).unwrap(), SelectionOutcome::Selected);
//! match game.select_tile(1).unwrap() {
//!     SelectionOutcome::Sequence(sequence) => {
//!         // Accepted swap, fully resolved: rounds carry everything a
//!         // renderer needs to animate.
//!         assert_eq!(sequence.moves_left, game.moves_left());
//!     }
//!     SelectionOutcome::SwapRejected => unreachable!("0 and 1 are adjacent"),
//!     SelectionOutcome::Selected => unreachable!("selection was pending"),
//! }
//! ```

pub mod adapter;
pub mod core;
pub mod error;
pub mod input;
pub mod term;
pub mod types;
