//! Terrain configuration.
//!
//! Parameters that control synthesis: grid detail, the domain box the
//! height field is mapped into, the corner seed range and the coloring.

use serde::{Deserialize, Serialize};
use terrace_types::constants::{
    DEFAULT_DETAIL, DEFAULT_DOMAIN_HALF_EXTENT, DEFAULT_HEIGHT_OFFSET, DEFAULT_SEED_HIGH,
    DEFAULT_SEED_LOW, MAX_DETAIL, MAX_SEED, MIN_DETAIL,
};
use terrace_types::{TerraceError, TerraceResult};

use crate::coloring::ColorMode;

/// Configuration for a terrain instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Detail level `n`. The grid side is `2^n + 1`.
    pub detail: u32,

    /// Added to every sampled height. Shifts what the banded palette
    /// treats as sea level.
    pub height_offset: f32,

    /// PRNG seed. `None` draws a fresh seed from entropy per run.
    pub seed: Option<u64>,

    /// Per-vertex coloring strategy.
    pub color_mode: ColorMode,

    /// Spatial box the grid is mapped into.
    pub domain: Domain,

    /// Range for the four corner seed draws.
    pub seed_range: SeedRange,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            detail: DEFAULT_DETAIL,
            height_offset: DEFAULT_HEIGHT_OFFSET,
            seed: None,
            color_mode: ColorMode::default(),
            domain: Domain::default(),
            seed_range: SeedRange::default(),
        }
    }
}

impl TerrainConfig {
    /// Creates a small config for quick previews (33×33 grid).
    pub fn preview() -> Self {
        Self {
            detail: 5,
            ..Default::default()
        }
    }

    /// Creates a high-detail config (1025×1025 grid).
    pub fn high_detail() -> Self {
        Self {
            detail: 10,
            ..Default::default()
        }
    }

    /// Returns the grid side `2^detail + 1`.
    ///
    /// Only meaningful for a validated config.
    pub fn side(&self) -> usize {
        grid_side(self.detail)
    }

    /// Checks every parameter, failing with `TerraceError::Configuration`.
    pub fn validate(&self) -> TerraceResult<()> {
        validate_detail(self.detail)?;
        self.domain.validate()?;
        self.seed_range.validate()?;
        if let Some(seed) = self.seed.filter(|&s| s > MAX_SEED) {
            return Err(TerraceError::Configuration(format!(
                "seed {seed} exceeds the maximum {MAX_SEED}"
            )));
        }
        if !self.height_offset.is_finite() {
            return Err(TerraceError::Configuration(
                "height_offset must be finite".into(),
            ));
        }
        Ok(())
    }

    /// Parses a TOML document and validates the result.
    pub fn from_toml_str(source: &str) -> TerraceResult<Self> {
        let config: Self = toml::from_str(source)
            .map_err(|e| TerraceError::Serialization(format!("TOML parse failed: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the config to TOML.
    pub fn to_toml_string(&self) -> TerraceResult<String> {
        toml::to_string(self)
            .map_err(|e| TerraceError::Serialization(format!("TOML serialization failed: {e}")))
    }
}

/// Axis-aligned box the height field is mapped into.
///
/// x follows the column index, y follows the row index, z carries height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl Default for Domain {
    fn default() -> Self {
        Self::cube(DEFAULT_DOMAIN_HALF_EXTENT)
    }
}

impl Domain {
    /// A cube centered on the origin, `[-half, half]` on every axis.
    pub fn cube(half: f32) -> Self {
        Self {
            min_x: -half,
            max_x: half,
            min_y: -half,
            max_y: half,
            min_z: -half,
            max_z: half,
        }
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn depth(&self) -> f32 {
        self.max_y - self.min_y
    }

    pub fn validate(&self) -> TerraceResult<()> {
        let bounds = [
            self.min_x, self.max_x, self.min_y, self.max_y, self.min_z, self.max_z,
        ];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(TerraceError::Configuration(
                "Domain bounds must be finite".into(),
            ));
        }
        if self.min_x >= self.max_x {
            return Err(TerraceError::Configuration(format!(
                "Domain min_x ({}) must be < max_x ({})",
                self.min_x, self.max_x
            )));
        }
        if self.min_y >= self.max_y {
            return Err(TerraceError::Configuration(format!(
                "Domain min_y ({}) must be < max_y ({})",
                self.min_y, self.max_y
            )));
        }
        if self.min_z > self.max_z {
            return Err(TerraceError::Configuration(format!(
                "Domain min_z ({}) must be <= max_z ({})",
                self.min_z, self.max_z
            )));
        }
        Ok(())
    }
}

/// Uniform draw range for the four corner seeds.
///
/// The same range, decayed per octave, bounds the displacement draws.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeedRange {
    pub low: f32,
    pub high: f32,
}

impl Default for SeedRange {
    fn default() -> Self {
        Self {
            low: DEFAULT_SEED_LOW,
            high: DEFAULT_SEED_HIGH,
        }
    }
}

impl SeedRange {
    pub fn new(low: f32, high: f32) -> Self {
        Self { low, high }
    }

    /// Returns true if `value` lies in `[low, high]`.
    pub fn contains(&self, value: f32) -> bool {
        value >= self.low && value <= self.high
    }

    pub fn validate(&self) -> TerraceResult<()> {
        if !self.low.is_finite() || !self.high.is_finite() {
            return Err(TerraceError::Configuration(
                "Seed range bounds must be finite".into(),
            ));
        }
        if self.low > self.high {
            return Err(TerraceError::Configuration(format!(
                "Seed range low ({}) must be <= high ({})",
                self.low, self.high
            )));
        }
        Ok(())
    }
}

/// Grid side for detail level `n`: `2^n + 1`.
#[inline]
pub fn grid_side(detail: u32) -> usize {
    (1usize << detail) + 1
}

/// Checks that `detail` is inside the supported range.
pub fn validate_detail(detail: u32) -> TerraceResult<()> {
    if detail < MIN_DETAIL {
        return Err(TerraceError::Configuration(format!(
            "detail must be >= {MIN_DETAIL}, got {detail}"
        )));
    }
    if detail > MAX_DETAIL {
        return Err(TerraceError::Configuration(format!(
            "detail {detail} exceeds the supported maximum {MAX_DETAIL} \
             (grid side {})",
            grid_side(detail.min(usize::BITS - 2))
        )));
    }
    Ok(())
}
