//! # terrace-export
//!
//! Writers for synthesized terrain.
//!
//! Provides a `TerrainExporter` trait with JSON and Wavefront OBJ
//! implementations, and `GridSnapshot` for saving a height grid together
//! with the configuration that produced it.

pub mod exporter;
pub mod json;
pub mod obj;
pub mod snapshot;

pub use exporter::{ExportFormat, TerrainExporter};
pub use json::JsonExporter;
pub use obj::ObjExporter;
pub use snapshot::GridSnapshot;
