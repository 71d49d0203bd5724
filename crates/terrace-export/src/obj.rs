//! Wavefront OBJ exporter.

use std::io::Write;

use terrace_terrain::RenderBuffers;
use terrace_types::TerraceResult;

use crate::exporter::TerrainExporter;

/// Writes `v` and `vn` lines for every vertex, then one `f` line per
/// triangle. Face indices are 1-based and reuse the vertex index for the
/// normal (`f a//a b//b c//c`).
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjExporter;

impl TerrainExporter for ObjExporter {
    fn name(&self) -> &str {
        "obj"
    }

    fn extension(&self) -> &str {
        "obj"
    }

    fn write(&self, buffers: &RenderBuffers, writer: &mut dyn Write) -> TerraceResult<()> {
        let mesh = &buffers.mesh;
        writeln!(
            writer,
            "# terrace terrain {side}x{side}, {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count(),
            side = mesh.side,
        )?;
        for v in mesh.positions.chunks_exact(3) {
            writeln!(writer, "v {} {} {}", v[0], v[1], v[2])?;
        }
        for n in buffers.normals.chunks_exact(3) {
            writeln!(writer, "vn {} {} {}", n[0], n[1], n[2])?;
        }
        for tri in mesh.indices.chunks_exact(3) {
            let (a, b, c) = (tri[0] + 1, tri[1] + 1, tri[2] + 1);
            writeln!(writer, "f {a}//{a} {b}//{b} {c}//{c}")?;
        }
        Ok(())
    }
}
