//! Terrain synthesis constants and configuration defaults.

/// Divisor applied to roughness and the displacement range after every octave.
pub const ROUGHNESS_DECAY: f32 = 1.8;

/// Default detail level `n` (grid side = 2^n + 1).
pub const DEFAULT_DETAIL: u32 = 9;

/// Smallest supported detail level.
pub const MIN_DETAIL: u32 = 1;

/// Largest supported detail level. A 2049×2049 grid keeps every vertex
/// index well inside `u32` and the render buffers around 150 MB.
pub const MAX_DETAIL: u32 = 11;

/// Default vertical shift applied to every sampled height.
pub const DEFAULT_HEIGHT_OFFSET: f32 = -0.3;

/// Largest accepted PRNG seed. Seeds must fit a TOML integer (`i64`).
pub const MAX_SEED: u64 = i64::MAX as u64;

/// Default lower bound for the corner seed draws.
pub const DEFAULT_SEED_LOW: f32 = 0.0;

/// Default upper bound for the corner seed draws.
pub const DEFAULT_SEED_HIGH: f32 = 0.3;

/// Default half-extent of the domain box on every axis.
pub const DEFAULT_DOMAIN_HALF_EXTENT: f32 = 0.5;

/// Tolerance used when checking that a vector is unit length.
pub const UNIT_TOLERANCE: f32 = 1.0e-5;
