//! RNG module - seedable tile color generation
//!
//! A small LCG drives color selection so that whole games replay from a
//! single seed: the initial fill and every refill consult one owned source
//! in a documented order (columns left to right, rows top to bottom).

use crate::error::EngineError;
use crate::types::{Color, MAX_PALETTE_SIZE, MIN_PALETTE_SIZE};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current internal state (usable as a seed to continue the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Anything that can supply a color for an empty cell.
///
/// The engine owns a [`RandomTileSource`]; tests substitute scripted sources
/// to make refills fully predictable.
pub trait TileSource {
    fn next_color(&mut self) -> Color;
}

/// Seedable color generator drawing uniformly from a palette prefix
#[derive(Debug, Clone)]
pub struct RandomTileSource {
    rng: SimpleRng,
    palette_size: u8,
}

impl RandomTileSource {
    /// Create a source for the first `palette_size` colors of the palette
    pub fn new(seed: u32, palette_size: u8) -> Result<Self, EngineError> {
        if !(MIN_PALETTE_SIZE..=MAX_PALETTE_SIZE).contains(&palette_size) {
            return Err(EngineError::InvalidPalette(palette_size));
        }
        Ok(Self {
            rng: SimpleRng::new(seed),
            palette_size,
        })
    }

    /// Current RNG state (for restarting a game with a fresh but
    /// reproducible board)
    pub fn state(&self) -> u32 {
        self.rng.state()
    }

    pub fn palette_size(&self) -> u8 {
        self.palette_size
    }

    /// Fresh source that continues this one's sequence. Infallible because
    /// the palette was validated at construction.
    pub fn split(&self) -> Self {
        Self {
            rng: SimpleRng::new(self.state()),
            palette_size: self.palette_size,
        }
    }
}

impl TileSource for RandomTileSource {
    fn next_color(&mut self) -> Color {
        let index = self.rng.next_range(self.palette_size as u32) as usize;
        Color::ALL[index]
    }
}

impl Default for RandomTileSource {
    fn default() -> Self {
        Self {
            rng: SimpleRng::new(1),
            palette_size: MAX_PALETTE_SIZE,
        }
    }
}
