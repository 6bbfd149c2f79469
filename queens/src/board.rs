use crate::{OutOfBounds, Placement};

/// An N×N grid of queen occupancy flags, stored row-major.
///
/// During a solve, the search engine holds the only mutable borrow and
/// maintains the invariant that every column left of the current search
/// column contains exactly one queen, and no column at or right of it
/// contains any. A fresh board is created per solve attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<bool>,
}

impl Board {
    /// Creates a board of the given size with every cell unoccupied.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// The board dimension N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Sets the occupancy of a single cell.
    pub fn set(&mut self, row: usize, col: usize, occupied: bool) -> Result<(), OutOfBounds> {
        let idx = self.index(row, col)?;
        self.cells[idx] = occupied;
        Ok(())
    }

    /// Returns the occupancy of a single cell.
    pub fn get(&self, row: usize, col: usize) -> Result<bool, OutOfBounds> {
        Ok(self.cells[self.index(row, col)?])
    }

    /// Every occupied cell, in row-major order. Pure read.
    pub fn occupied_cells(&self) -> Vec<Placement> {
        let mut placements = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if self.cells[row * self.size + col] {
                    placements.push(Placement { row, col });
                }
            }
        }
        placements
    }

    // Infallible accessors for the search engine, which only ever queries
    // coordinates it has already proven in-range.

    pub(crate) fn occupied(&self, row: usize, col: usize) -> bool {
        debug_assert!(row < self.size && col < self.size);
        self.cells[row * self.size + col]
    }

    pub(crate) fn place(&mut self, row: usize, col: usize) {
        debug_assert!(row < self.size && col < self.size);
        self.cells[row * self.size + col] = true;
    }

    pub(crate) fn retract(&mut self, row: usize, col: usize) {
        debug_assert!(row < self.size && col < self.size);
        self.cells[row * self.size + col] = false;
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, OutOfBounds> {
        if row >= self.size || col >= self.size {
            return Err(OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(row * self.size + col)
    }
}
