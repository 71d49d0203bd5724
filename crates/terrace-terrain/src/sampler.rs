//! Maps a height grid onto a domain box.
//!
//! Columns spread over x, rows over y, heights become z. Two triangles
//! per cell share the diagonal from `(row, col + 1)` to `(row + 1, col)`.

use crate::config::Domain;
use crate::grid::HeightGrid;
use crate::mesh::TerrainMesh;

/// Samples `grid` over `domain`, adding `height_offset` to every height.
///
/// Min/max heights are tracked during the single vertex pass.
///
/// # Example
/// ```
/// use terrace_terrain::config::Domain;
/// use terrace_terrain::grid::HeightGrid;
/// use terrace_terrain::sampler::sample;
/// let grid = HeightGrid::zeros(5).unwrap();
/// let mesh = sample(&grid, &Domain::cube(0.5), 0.0);
/// assert_eq!(mesh.vertex_count(), 25);
/// assert_eq!(mesh.triangle_count(), 32);
/// ```
pub fn sample(grid: &HeightGrid, domain: &Domain, height_offset: f32) -> TerrainMesh {
    let side = grid.side();
    let div = grid.divisions();
    let step_x = domain.width() / div as f32;
    let step_y = domain.depth() / div as f32;

    let mut positions = Vec::with_capacity(side * side * 3);
    let mut min_height = f32::INFINITY;
    let mut max_height = f32::NEG_INFINITY;

    for row in 0..side {
        for col in 0..side {
            let z = grid.get(row, col) + height_offset;
            positions.push(domain.min_x + step_x * col as f32);
            positions.push(domain.min_y + step_y * row as f32);
            positions.push(z);
            min_height = min_height.min(z);
            max_height = max_height.max(z);
        }
    }

    let indices = triangulate(div);
    let edges = wireframe_edges(&indices);

    TerrainMesh {
        side,
        positions,
        indices,
        edges,
        min_height,
        max_height,
        height_offset,
    }
}

/// Triangle indices for a `div × div` cell grid, two triangles per cell.
pub fn triangulate(div: usize) -> Vec<u32> {
    let stride = (div + 1) as u32;
    let mut indices = Vec::with_capacity(div * div * 6);
    for i in 0..div {
        for j in 0..div {
            let vid = i as u32 * stride + j as u32;

            indices.push(vid);
            indices.push(vid + 1);
            indices.push(vid + stride);

            indices.push(vid + 1);
            indices.push(vid + stride + 1);
            indices.push(vid + stride);
        }
    }
    indices
}

/// Line-list for wireframe drawing: `(a,b) (b,c) (c,a)` per triangle.
pub fn wireframe_edges(indices: &[u32]) -> Vec<u32> {
    let mut edges = Vec::with_capacity(indices.len() * 2);
    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0], tri[1], tri[2]);
        edges.extend_from_slice(&[a, b, b, c, c, a]);
    }
    edges
}
