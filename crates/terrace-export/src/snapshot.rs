//! Binary height-grid snapshots.
//!
//! A snapshot stores a generated grid with the configuration and seed that
//! produced it, so the derived buffers can be rebuilt later without
//! regenerating.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use terrace_terrain::{HeightFieldSynthesizer, HeightGrid, Terrain, TerrainConfig};
use terrace_types::{TerraceError, TerraceResult};

/// Layout version written into every snapshot.
pub const SNAPSHOT_VERSION: u32 = 1;

/// A height grid plus its provenance.
///
/// Serialized with `bincode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub version: u32,
    pub config: TerrainConfig,
    /// Seed the grid was generated from, when known.
    pub seed: Option<u64>,
    pub grid: HeightGrid,
}

impl GridSnapshot {
    pub fn new(config: TerrainConfig, seed: Option<u64>, grid: HeightGrid) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            config,
            seed,
            grid,
        }
    }

    /// Captures a completed terrain.
    pub fn from_terrain(config: &TerrainConfig, terrain: &Terrain) -> Self {
        Self::new(config.clone(), terrain.seed, terrain.grid.clone())
    }

    /// Serializes to compact binary format.
    pub fn to_bytes(&self) -> TerraceResult<Vec<u8>> {
        bincode::serialize(self)
            .map_err(|e| TerraceError::Serialization(format!("Snapshot serialization failed: {e}")))
    }

    /// Deserializes from binary format, rejecting other layout versions,
    /// invalid configs and grids whose side does not match the stored detail.
    pub fn from_bytes(data: &[u8]) -> TerraceResult<Self> {
        let snapshot: Self = bincode::deserialize(data).map_err(|e| {
            TerraceError::Serialization(format!("Snapshot deserialization failed: {e}"))
        })?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(TerraceError::Serialization(format!(
                "Unsupported snapshot version {} (expected {SNAPSHOT_VERSION})",
                snapshot.version
            )));
        }
        snapshot.config.validate()?;
        let side = snapshot.config.side();
        if snapshot.grid.side() != side || snapshot.grid.heights().len() != side * side {
            return Err(TerraceError::Serialization(format!(
                "Snapshot grid side {} does not match detail {}",
                snapshot.grid.side(),
                snapshot.config.detail
            )));
        }
        Ok(snapshot)
    }

    pub fn save(&self, path: &Path) -> TerraceResult<()> {
        let bytes = self.to_bytes()?;
        fs::write(path, &bytes)?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "snapshot saved");
        Ok(())
    }

    pub fn load(path: &Path) -> TerraceResult<Self> {
        let bytes = fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Rebuilds mesh, normals and colors from the stored grid.
    pub fn resample(&self) -> TerraceResult<Terrain> {
        let mut synth = HeightFieldSynthesizer::new(self.config.clone())?;
        synth.resample(self.grid.clone())?;
        let mut terrain = synth.take_terrain()?;
        terrain.seed = self.seed;
        Ok(terrain)
    }
}
