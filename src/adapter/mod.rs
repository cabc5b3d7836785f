//! Adapter module - drive the engine over line-delimited JSON
//!
//! An external controller (AI, alternative renderer, test harness) writes
//! one command per line on stdin and reads one event per line on stdout.
//! The engine is synchronous, so every command produces its full outcome
//! before the next line is read.

pub mod protocol;
pub mod server;

pub use protocol::{Command, Event};
pub use server::{run, run_stdio};
