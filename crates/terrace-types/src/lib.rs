//! # terrace-types
//!
//! Shared types, grid coordinates, error types, and constants
//! for the terrace terrain synthesis workspace.
//!
//! This crate has zero domain logic. It defines the vocabulary
//! that all other terrace crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{TerraceError, TerraceResult};
pub use ids::GridCoord;
