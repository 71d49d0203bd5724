//! # terrace-terrain
//!
//! Fractal terrain synthesis as pure data transformations.
//!
//! ## Pipeline
//!
//! - [`diamond_square`]: builds a `(2^n + 1)²` [`HeightGrid`] by
//!   recursive midpoint displacement.
//! - [`sampler`]: maps the grid onto a [`Domain`] box, producing
//!   positions, triangles and wireframe edges ([`TerrainMesh`]).
//! - [`normals`]: per-vertex normals from the six-neighbor ring.
//! - [`coloring`]: height-keyed color strategies.
//! - [`HeightFieldSynthesizer`]: runs all of the above and answers
//!   queries once a run has completed.

pub mod coloring;
pub mod config;
pub mod diamond_square;
pub mod grid;
pub mod mesh;
pub mod normals;
pub mod sampler;
pub mod synthesizer;

pub use coloring::{ColorBandingStrategy, ColorMode, HeightRange};
pub use config::{Domain, SeedRange, TerrainConfig};
pub use diamond_square::DiamondSquare;
pub use grid::HeightGrid;
pub use mesh::{RenderBuffers, TerrainMesh, Vertex};
pub use synthesizer::{HeightFieldSynthesizer, Terrain};
