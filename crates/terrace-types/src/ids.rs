//! Strongly-typed grid coordinates.
//!
//! Vertex `(row, col)` on a grid of side `S` lives at linear index
//! `row * S + col`. Every buffer in the workspace uses this mapping.

use serde::{Deserialize, Serialize};

use crate::error::{TerraceError, TerraceResult};

/// A `(row, col)` position on a square grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoord {
    pub row: usize,
    pub col: usize,
}

impl GridCoord {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row-major linear index on a grid of the given side.
    #[inline]
    pub fn linear(self, side: usize) -> usize {
        self.row * side + self.col
    }

    /// Recovers the coordinate of a linear index.
    #[inline]
    pub fn from_linear(index: usize, side: usize) -> Self {
        Self {
            row: index / side,
            col: index % side,
        }
    }

    /// Returns `Ok(self)` if the coordinate lies inside a grid of `side`.
    pub fn checked(self, side: usize) -> TerraceResult<Self> {
        if self.row < side && self.col < side {
            Ok(self)
        } else {
            Err(TerraceError::IndexOutOfBounds {
                row: self.row,
                col: self.col,
                side,
            })
        }
    }

    /// Offsets the coordinate, returning `None` when it leaves the grid.
    #[inline]
    pub fn offset(self, d_row: isize, d_col: isize, side: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        (row < side && col < side).then_some(Self { row, col })
    }
}
