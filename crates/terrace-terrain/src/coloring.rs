//! Height-to-color strategies.
//!
//! Every strategy is a pure function of a height and the mesh's height
//! range. [`BandedPalette`] is the default; [`LinearGradient`] and
//! [`TrigPalette`] are alternatives selected through [`ColorMode`].

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use terrace_types::TerraceError;

use crate::mesh::TerrainMesh;

/// Height statistics a strategy may key on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightRange {
    pub min: f32,
    pub max: f32,
    /// Offset added to every sampled height (the palette's sea level).
    pub offset: f32,
}

impl HeightRange {
    pub fn of(mesh: &TerrainMesh) -> Self {
        Self {
            min: mesh.min_height,
            max: mesh.max_height,
            offset: mesh.height_offset,
        }
    }
}

/// Maps a height to an RGB color in `[0, 1]`.
pub trait ColorBandingStrategy: Send + Sync {
    fn color(&self, height: f32, range: &HeightRange) -> [f32; 3];

    /// Returns a short identifier for logs and exports.
    fn name(&self) -> &'static str;
}

/// Discrete bands keyed on `t = (h - offset) / (max - offset)`.
///
/// | t        | band          |
/// |----------|---------------|
/// | > 0.9    | snow          |
/// | > 0.8    | dark green    |
/// | > 0.6    | light green   |
/// | > 0.45   | brown         |
/// | > 0.35   | tan           |
/// | > 0.25   | sand          |
/// | > 0.2    | cyan          |
/// | > 0.15   | light blue    |
/// | > 0      | blue          |
/// | > -0.1   | deep blue     |
/// | ≤ -0.1   | deepest blue  |
#[derive(Debug, Clone, Copy, Default)]
pub struct BandedPalette;

/// Band thresholds (exclusive lower bound) and 8-bit colors, highest first.
const BANDS: [(f32, [u8; 3]); 10] = [
    (0.9, [255, 255, 255]),
    (0.8, [34, 44, 33]),
    (0.6, [49, 82, 33]),
    (0.45, [178, 96, 41]),
    (0.35, [165, 138, 109]),
    (0.25, [255, 223, 158]),
    (0.2, [55, 209, 215]),
    (0.15, [69, 168, 226]),
    (0.0, [31, 113, 198]),
    (-0.1, [31, 81, 255]),
];

const ABYSS: [u8; 3] = [21, 0, 255];

impl BandedPalette {
    /// Normalized band key for `height`.
    pub fn relative_height(height: f32, range: &HeightRange) -> f32 {
        ratio(height - range.offset, range.max - range.offset)
    }
}

impl ColorBandingStrategy for BandedPalette {
    fn color(&self, height: f32, range: &HeightRange) -> [f32; 3] {
        let t = Self::relative_height(height, range);
        let rgb = BANDS
            .iter()
            .find(|(threshold, _)| t > *threshold)
            .map_or(ABYSS, |&(_, rgb)| rgb);
        unit_rgb(rgb)
    }

    fn name(&self) -> &'static str {
        "banded"
    }
}

/// Linear blend over `[min, max]`: `k·peak + (1 - k)·base`,
/// `k = (h - min) / (max - min)`.
#[derive(Debug, Clone, Copy)]
pub struct LinearGradient {
    /// Color at the highest vertex.
    pub peak: [f32; 3],
    /// Color at the lowest vertex.
    pub base: [f32; 3],
}

impl Default for LinearGradient {
    fn default() -> Self {
        Self {
            peak: [0.0, 0.8, 0.0],
            base: [0.5, 1.0, 0.8],
        }
    }
}

impl ColorBandingStrategy for LinearGradient {
    fn color(&self, height: f32, range: &HeightRange) -> [f32; 3] {
        let k = ratio(height - range.min, range.max - range.min);
        [0, 1, 2].map(|c| k * self.peak[c] + (1.0 - k) * self.base[c])
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}

/// Three cosine waves over `h / max` with periods 3π, π and 2π.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrigPalette;

impl ColorBandingStrategy for TrigPalette {
    fn color(&self, height: f32, range: &HeightRange) -> [f32; 3] {
        let t = ratio(height, range.max);
        let r = (1.0 - (3.0 * PI * t).cos()) / 2.0;
        let g = (1.0 - (PI * t).cos()) / 2.0;
        let b = (1.0 + (2.0 * PI * t).cos()) / 2.0;
        [r, g, b]
    }

    fn name(&self) -> &'static str {
        "trig"
    }
}

/// Configurable choice among the built-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Banded,
    Linear,
    Trig,
}

impl ColorMode {
    /// Returns every mode.
    pub fn all() -> &'static [ColorMode] {
        &[ColorMode::Banded, ColorMode::Linear, ColorMode::Trig]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColorMode::Banded => "banded",
            ColorMode::Linear => "linear",
            ColorMode::Trig => "trig",
        }
    }

    pub fn strategy(&self) -> Box<dyn ColorBandingStrategy> {
        match self {
            ColorMode::Banded => Box::new(BandedPalette),
            ColorMode::Linear => Box::new(LinearGradient::default()),
            ColorMode::Trig => Box::new(TrigPalette),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorMode {
    type Err = TerraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorMode::all()
            .iter()
            .copied()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| {
                TerraceError::Configuration(format!(
                    "Unknown color mode '{s}'. Available: banded, linear, trig"
                ))
            })
    }
}

/// Colors for every vertex of `mesh`, interleaved in vertex order.
pub fn colorize(mesh: &TerrainMesh, strategy: &dyn ColorBandingStrategy) -> Vec<f32> {
    let range = HeightRange::of(mesh);
    let mut colors = Vec::with_capacity(mesh.positions.len());
    for xyz in mesh.positions.chunks_exact(3) {
        colors.extend_from_slice(&strategy.color(xyz[2], &range));
    }
    colors
}

/// `num / den`, or 0 when `den` is 0.
#[inline]
fn ratio(num: f32, den: f32) -> f32 {
    if den == 0.0 {
        0.0
    } else {
        num / den
    }
}

#[inline]
fn unit_rgb(rgb: [u8; 3]) -> [f32; 3] {
    rgb.map(|c| c as f32 / 255.0)
}
