//! Diamond-square height-field generation.
//!
//! Each octave halves the step distance and runs two passes over the
//! active sub-grid:
//!
//! - **square**: cells at odd multiples of the half-step on both axes take
//!   the mean of their diagonal corners;
//! - **diamond**: cells whose sub-grid indices sum to an odd number take the
//!   mean of their axis-aligned neighbors.
//!
//! Both passes then add the current roughness and subtract a fresh draw
//! from the current displacement range. Roughness and the range shrink by
//! [`ROUGHNESS_DECAY`] after every octave.

use rand::Rng;
use terrace_types::constants::ROUGHNESS_DECAY;
use terrace_types::TerraceResult;

use crate::config::{grid_side, validate_detail, SeedRange};
use crate::grid::HeightGrid;

/// Diagonal corner offsets read by the square pass.
const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Axis neighbor offsets read by the diamond pass.
const AXES: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

/// Summary of one completed octave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OctaveReport {
    /// Octave index, `0..n`.
    pub step: u32,
    /// Half-step distance `2^(n - step - 1)`.
    pub half_step: usize,
    /// Roughness added to every cell written in this octave.
    pub roughness: f32,
    /// Displacement draw range used in this octave.
    pub lower: f32,
    pub upper: f32,
    pub square_cells: usize,
    pub diamond_cells: usize,
}

/// A configured diamond-square generator.
#[derive(Debug, Clone, Copy)]
pub struct DiamondSquare {
    detail: u32,
    seed_range: SeedRange,
}

impl DiamondSquare {
    /// Creates a generator, rejecting an unsupported detail level or an
    /// invalid seed range before any work is done.
    pub fn new(detail: u32, seed_range: SeedRange) -> TerraceResult<Self> {
        validate_detail(detail)?;
        seed_range.validate()?;
        Ok(Self { detail, seed_range })
    }

    #[inline]
    pub fn detail(&self) -> u32 {
        self.detail
    }

    /// Side of the grids this generator produces.
    #[inline]
    pub fn side(&self) -> usize {
        grid_side(self.detail)
    }

    /// Generates a grid.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> HeightGrid {
        self.generate_observed(rng, |_| {})
    }

    /// Generates a grid, reporting each octave to `on_octave` as it completes.
    ///
    /// Exactly one value is drawn from `rng` per corner and per written
    /// cell, so the consumed sequence depends only on the detail level.
    pub fn generate_observed<R, F>(&self, rng: &mut R, mut on_octave: F) -> HeightGrid
    where
        R: Rng + ?Sized,
        F: FnMut(&OctaveReport),
    {
        let n = self.detail;
        let side = self.side();
        let last = side - 1;
        let mut grid = blank(side);

        let SeedRange { low, high } = self.seed_range;
        for (row, col) in [(0, 0), (0, last), (last, 0), (last, last)] {
            grid.set(row, col, draw(rng, low, high));
        }

        let mut roughness = grid.corners().iter().sum::<f32>() / 4.0;
        let mut lower = low;
        let mut upper = high;

        for step in 0..n {
            let half = 1usize << (n - step - 1);
            let intervals = 1usize << (step + 1);

            let mut square_cells = 0;
            for i in (1..intervals).step_by(2) {
                for j in (1..intervals).step_by(2) {
                    let (row, col) = (i * half, j * half);
                    let mean = neighbor_mean(&grid, row, col, half, &DIAGONALS);
                    grid.set(row, col, mean + roughness - draw(rng, lower, upper));
                    square_cells += 1;
                }
            }

            let mut diamond_cells = 0;
            for i in 0..=intervals {
                for j in 0..=intervals {
                    if (i + j) % 2 == 1 {
                        let (row, col) = (i * half, j * half);
                        let mean = neighbor_mean(&grid, row, col, half, &AXES);
                        grid.set(row, col, mean + roughness - draw(rng, lower, upper));
                        diamond_cells += 1;
                    }
                }
            }

            let report = OctaveReport {
                step,
                half_step: half,
                roughness,
                lower,
                upper,
                square_cells,
                diamond_cells,
            };
            tracing::debug!(
                step,
                half_step = half,
                roughness,
                square_cells,
                diamond_cells,
                "diamond-square octave complete"
            );
            on_octave(&report);

            roughness /= ROUGHNESS_DECAY;
            upper /= ROUGHNESS_DECAY;
            lower /= ROUGHNESS_DECAY;
        }

        grid
    }
}

/// Generates a `(2^detail + 1)`-sided grid.
pub fn generate<R: Rng + ?Sized>(
    detail: u32,
    seed_range: SeedRange,
    rng: &mut R,
) -> TerraceResult<HeightGrid> {
    Ok(DiamondSquare::new(detail, seed_range)?.generate(rng))
}

/// Uniform draw in `[lower, upper]`.
#[inline]
fn draw<R: Rng + ?Sized>(rng: &mut R, lower: f32, upper: f32) -> f32 {
    lower + rng.random::<f32>() * (upper - lower)
}

/// Mean of the neighbors at `offsets * distance` that exist on the grid.
///
/// Divides by the number of neighbors found, not by the offset count.
fn neighbor_mean(
    grid: &HeightGrid,
    row: usize,
    col: usize,
    distance: usize,
    offsets: &[(isize, isize)],
) -> f32 {
    let side = grid.side();
    let mut sum = 0.0;
    let mut count = 0u32;
    for &(dr, dc) in offsets {
        let r = row.checked_add_signed(dr * distance as isize);
        let c = col.checked_add_signed(dc * distance as isize);
        if let (Some(r), Some(c)) = (r, c) {
            if r < side && c < side {
                sum += grid.get(r, c);
                count += 1;
            }
        }
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f32
    }
}

/// Zero-filled grid for a side already known to be valid.
fn blank(side: usize) -> HeightGrid {
    match HeightGrid::zeros(side) {
        Ok(grid) => grid,
        Err(_) => unreachable!("grid_side always yields 2^n + 1"),
    }
}
