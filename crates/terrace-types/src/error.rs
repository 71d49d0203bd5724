//! Error types for the terrace workspace.
//!
//! All crates return `TerraceResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for terrain synthesis.
#[derive(Debug, Error)]
pub enum TerraceError {
    /// A configuration value is invalid. Raised before any generation work.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Mesh or grid buffers are malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// A derived structure was queried before synthesis completed.
    #[error("Terrain not ready: {0}")]
    NotReady(String),

    /// A grid coordinate lies outside the grid.
    #[error("Grid coordinate ({row}, {col}) is outside a {side}x{side} grid")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        side: usize,
    },

    /// `pop` was called on a transform stack with no saved snapshot.
    #[error("Invalid pop: transform stack is empty")]
    EmptyTransformStack,

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, TerraceError>`.
pub type TerraceResult<T> = Result<T, TerraceError>;
