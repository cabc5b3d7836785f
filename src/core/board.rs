//! Board module - manages the tile grid
//!
//! The board is a width x height grid of colored tiles stored in a flat
//! array, row-major order (index = row * width + col). Row 0 is the top;
//! gravity compacts tiles toward higher rows. Empty cells exist only
//! transiently between a clear and the refill that follows.

use arrayvec::ArrayVec;

use crate::core::rng::TileSource;
use crate::error::EngineError;
use crate::types::{Cell, Color, MIN_DIMENSION};

/// The tile grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board with every cell filled from the tile source.
    ///
    /// Fails with `InvalidDimension` when either dimension is below 3, the
    /// minimum needed for any match. Pre-existing runs are not suppressed;
    /// they are swept into the first swap's resolution.
    pub fn filled<S: TileSource>(
        width: u8,
        height: u8,
        source: &mut S,
    ) -> Result<Self, EngineError> {
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(EngineError::InvalidDimension { width, height });
        }
        let len = width as usize * height as usize;
        let cells = (0..len).map(|_| Some(source.next_color())).collect();
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    pub fn index(&self, row: u8, col: u8) -> usize {
        debug_assert!(row < self.height && col < self.width);
        row as usize * self.width as usize + col as usize
    }

    /// (row, col) coordinates for a flat index
    #[inline(always)]
    pub fn coords(&self, index: usize) -> (u8, u8) {
        let w = self.width as usize;
        ((index / w) as u8, (index % w) as u8)
    }

    /// Whether a flat index addresses a cell on this board
    pub fn contains(&self, index: usize) -> bool {
        index < self.cells.len()
    }

    /// Get cell at a flat index, `None` if out of bounds
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Set cell at a flat index; returns false if out of bounds
    pub fn set(&mut self, index: usize, cell: Cell) -> bool {
        match self.cells.get_mut(index) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Four-directional neighbors of a cell, clipped at the edges
    pub fn neighbors(&self, index: usize) -> ArrayVec<usize, 4> {
        let mut out = ArrayVec::new();
        if !self.contains(index) {
            return out;
        }
        let (row, col) = self.coords(index);
        if row > 0 {
            out.push(self.index(row - 1, col));
        }
        if row + 1 < self.height {
            out.push(self.index(row + 1, col));
        }
        if col > 0 {
            out.push(self.index(row, col - 1));
        }
        if col + 1 < self.width {
            out.push(self.index(row, col + 1));
        }
        out
    }

    /// True iff `a` and `b` differ by exactly one row or one column step.
    /// Four-directional: never diagonal, never equal, never out of range.
    pub fn is_adjacent(&self, a: usize, b: usize) -> bool {
        if a == b || !self.contains(a) || !self.contains(b) {
            return false;
        }
        let (row_a, col_a) = self.coords(a);
        let (row_b, col_b) = self.coords(b);
        (row_a == row_b && col_a.abs_diff(col_b) == 1)
            || (col_a == col_b && row_a.abs_diff(row_b) == 1)
    }

    /// Exchange the colors of two adjacent cells.
    ///
    /// The swap is unconditional once adjacency holds; whether it produced a
    /// match is the caller's concern.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), EngineError> {
        if !self.contains(a) {
            return Err(EngineError::OutOfRange(a));
        }
        if !self.contains(b) {
            return Err(EngineError::OutOfRange(b));
        }
        if !self.is_adjacent(a, b) {
            return Err(EngineError::NotAdjacent);
        }
        self.cells.swap(a, b);
        Ok(())
    }

    /// Set each given cell to empty. Indices must be on the board.
    pub fn clear_cells(&mut self, indices: &[usize]) {
        for &index in indices {
            assert!(self.contains(index), "clear index {index} out of range");
            self.cells[index] = None;
        }
    }

    /// Move all tiles in one column downward, preserving relative order
    /// (stable gravity), leaving empty cells at the top.
    /// Returns how many tiles changed position, for fall animation.
    pub fn compact_column(&mut self, col: u8) -> u8 {
        assert!(col < self.width, "column {col} out of range");
        let mut moved = 0;
        let mut write_row = self.height;

        // Scan from bottom to top, writing tiles back from the bottom.
        for read_row in (0..self.height).rev() {
            let src = self.index(read_row, col);
            if self.cells[src].is_some() {
                write_row -= 1;
                if write_row != read_row {
                    let dst = self.index(write_row, col);
                    self.cells[dst] = self.cells[src];
                    self.cells[src] = None;
                    moved += 1;
                }
            }
        }

        moved
    }

    /// Count of empty cells in a column (all at the top after compaction)
    pub fn empty_in_column(&self, col: u8) -> u8 {
        assert!(col < self.width, "column {col} out of range");
        (0..self.height)
            .filter(|&row| self.cells[self.index(row, col)].is_none())
            .count() as u8
    }

    /// Fill the top `count` cells of a column with freshly generated colors.
    /// Returns the colors in row order (top first).
    pub fn refill_column<S: TileSource>(
        &mut self,
        col: u8,
        count: u8,
        source: &mut S,
    ) -> Vec<Color> {
        assert!(col < self.width, "column {col} out of range");
        assert!(count <= self.height, "refill count {count} exceeds column");
        let mut colors = Vec::with_capacity(count as usize);
        for row in 0..count {
            let index = self.index(row, col);
            debug_assert!(self.cells[index].is_none(), "refill over a live tile");
            let color = source.next_color();
            self.cells[index] = Some(color);
            colors.push(color);
        }
        colors
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Create from rows of cells for testing (top row first)
    #[cfg(test)]
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let height = rows.len() as u8;
        let width = rows.first().map(|r| r.len()).unwrap_or(0) as u8;
        assert!(width >= MIN_DIMENSION && height >= MIN_DIMENSION);
        assert!(rows.iter().all(|row| row.len() == width as usize));

        Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    /// Get a mutable reference to the internal cells array (for testing)
    #[cfg(test)]
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}
