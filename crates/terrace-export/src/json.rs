//! JSON exporter. Writes every render buffer for inspection in external
//! viewers.

use std::io::Write;

use serde::Serialize;
use terrace_terrain::RenderBuffers;
use terrace_types::{TerraceError, TerraceResult};

use crate::exporter::TerrainExporter;

/// Serialized layout. Buffers are interleaved `[x0, y0, z0, x1, ...]`.
#[derive(Serialize)]
struct TerrainDocument<'a> {
    side: usize,
    vertex_count: usize,
    triangle_count: usize,
    min_height: f32,
    max_height: f32,
    height_offset: f32,
    positions: &'a [f32],
    normals: &'a [f32],
    colors: &'a [f32],
    indices: &'a [u32],
    edges: &'a [u32],
}

/// Exports render buffers as one JSON object.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter {
    /// Indent the output.
    pub pretty: bool,
}

impl JsonExporter {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl TerrainExporter for JsonExporter {
    fn name(&self) -> &str {
        "json"
    }

    fn extension(&self) -> &str {
        "json"
    }

    fn write(&self, buffers: &RenderBuffers, writer: &mut dyn Write) -> TerraceResult<()> {
        let mesh = &buffers.mesh;
        let doc = TerrainDocument {
            side: mesh.side,
            vertex_count: mesh.vertex_count(),
            triangle_count: mesh.triangle_count(),
            min_height: mesh.min_height,
            max_height: mesh.max_height,
            height_offset: mesh.height_offset,
            positions: &mesh.positions,
            normals: &buffers.normals,
            colors: &buffers.colors,
            indices: &mesh.indices,
            edges: &mesh.edges,
        };
        let result = if self.pretty {
            serde_json::to_writer_pretty(writer, &doc)
        } else {
            serde_json::to_writer(writer, &doc)
        };
        result.map_err(|e| TerraceError::Serialization(format!("JSON serialization failed: {e}")))
    }
}
