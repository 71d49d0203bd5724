//! Square height grid of side `2^n + 1`.

use serde::{Deserialize, Serialize};
use terrace_types::{GridCoord, TerraceError, TerraceResult};

/// Row-major grid of heights.
///
/// The side is always `2^n + 1` with `n >= 1`; every constructor checks it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeightGrid {
    side: usize,
    heights: Vec<f32>,
}

impl HeightGrid {
    /// Creates a grid of the given side filled with zeros.
    pub fn zeros(side: usize) -> TerraceResult<Self> {
        Self::filled(side, 0.0)
    }

    /// Creates a grid of the given side with every cell set to `height`.
    pub fn filled(side: usize, height: f32) -> TerraceResult<Self> {
        check_side(side)?;
        Ok(Self {
            side,
            heights: vec![height; side * side],
        })
    }

    /// Wraps existing row-major heights.
    pub fn from_heights(side: usize, heights: Vec<f32>) -> TerraceResult<Self> {
        check_side(side)?;
        if heights.len() != side * side {
            return Err(TerraceError::InvalidMesh(format!(
                "Expected {} heights for a {side}x{side} grid, got {}",
                side * side,
                heights.len()
            )));
        }
        Ok(Self { side, heights })
    }

    /// Builds a grid by evaluating `f(row, col)` for every cell.
    pub fn from_fn(side: usize, mut f: impl FnMut(usize, usize) -> f32) -> TerraceResult<Self> {
        check_side(side)?;
        let mut heights = Vec::with_capacity(side * side);
        for row in 0..side {
            for col in 0..side {
                heights.push(f(row, col));
            }
        }
        Ok(Self { side, heights })
    }

    /// Number of cells along each axis.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Detail level `n` such that `side = 2^n + 1`.
    #[inline]
    pub fn detail(&self) -> u32 {
        (self.side - 1).trailing_zeros()
    }

    /// Number of quads along each axis (`side - 1`).
    #[inline]
    pub fn divisions(&self) -> usize {
        self.side - 1
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.heights.len()
    }

    /// Height at `(row, col)`. Panics outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.heights[row * self.side + col]
    }

    /// Height at `coord`, or `IndexOutOfBounds`.
    pub fn try_get(&self, coord: GridCoord) -> TerraceResult<f32> {
        let coord = coord.checked(self.side)?;
        Ok(self.heights[coord.linear(self.side)])
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, height: f32) {
        self.heights[row * self.side + col] = height;
    }

    /// All heights, row-major.
    #[inline]
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// Corner heights in seeding order: (0,0), (0,S-1), (S-1,0), (S-1,S-1).
    pub fn corners(&self) -> [f32; 4] {
        let last = self.side - 1;
        [
            self.get(0, 0),
            self.get(0, last),
            self.get(last, 0),
            self.get(last, last),
        ]
    }

    /// Returns `(min, max)` over every cell.
    pub fn height_range(&self) -> (f32, f32) {
        self.heights
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &h| {
                (lo.min(h), hi.max(h))
            })
    }
}

/// Returns true if `side` has the form `2^n + 1` with `n >= 1`.
#[inline]
pub fn is_valid_side(side: usize) -> bool {
    side >= 3 && (side - 1).is_power_of_two()
}

fn check_side(side: usize) -> TerraceResult<()> {
    if is_valid_side(side) {
        Ok(())
    } else {
        Err(TerraceError::Configuration(format!(
            "Grid side must be 2^n + 1 with n >= 1, got {side}"
        )))
    }
}
