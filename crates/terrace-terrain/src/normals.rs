//! Per-vertex normal estimation on the terrain tessellation.
//!
//! A vertex sees up to six neighbors, the ones it shares a triangle with:
//! right, up, upper-left, left, down and lower-right. Each pair of
//! consecutive neighbors that both exist spans one incident triangle. The
//! unit face normals of those triangles are summed and the sum normalized.
//! Missing triangles add nothing and the sum is not rescaled by the
//! number of triangles found.

use terrace_math::{face_normal, normalize_or_zero, Vec3};
use terrace_types::{GridCoord, TerraceResult};

use crate::mesh::TerrainMesh;

/// Neighbor offsets as `(d_row, d_col)`, counter-clockwise starting right.
const HEX_NEIGHBORS: [(isize, isize); 6] = [
    (0, 1),   // right
    (1, 0),   // up
    (1, -1),  // upper-left
    (0, -1),  // left
    (-1, 0),  // down
    (-1, 1),  // lower-right
];

/// Unit normal at `coord`, or `IndexOutOfBounds`.
pub fn normal_at(mesh: &TerrainMesh, coord: GridCoord) -> TerraceResult<Vec3> {
    let coord = coord.checked(mesh.side)?;
    Ok(normalize_or_zero(face_sum(mesh, coord).0))
}

/// Number of incident triangles that contribute to the normal at `coord`.
pub fn contributing_faces(mesh: &TerrainMesh, coord: GridCoord) -> TerraceResult<usize> {
    let coord = coord.checked(mesh.side)?;
    Ok(face_sum(mesh, coord).1)
}

/// Normals for every vertex, interleaved in vertex order.
pub fn estimate_normals(mesh: &TerrainMesh) -> Vec<f32> {
    let side = mesh.side;
    let mut normals = Vec::with_capacity(side * side * 3);
    for row in 0..side {
        for col in 0..side {
            let n = normalize_or_zero(face_sum(mesh, GridCoord::new(row, col)).0);
            normals.extend_from_slice(&[n.x, n.y, n.z]);
        }
    }
    normals
}

/// Counts vertices whose normal came out as the zero vector.
pub fn degenerate_count(normals: &[f32]) -> usize {
    normals
        .chunks_exact(3)
        .filter(|n| n[0] == 0.0 && n[1] == 0.0 && n[2] == 0.0)
        .count()
}

/// Sum of unit face normals around `coord` and how many faces contributed.
fn face_sum(mesh: &TerrainMesh, coord: GridCoord) -> (Vec3, usize) {
    let side = mesh.side;
    let center = mesh.position_at(coord);
    let ring = HEX_NEIGHBORS.map(|(dr, dc)| {
        coord
            .offset(dr, dc, side)
            .map(|neighbor| mesh.position_at(neighbor))
    });

    let mut sum = Vec3::ZERO;
    let mut faces = 0;
    for k in 0..ring.len() {
        if let (Some(a), Some(b)) = (ring[k], ring[(k + 1) % ring.len()]) {
            sum += face_normal(center, a, b);
            faces += 1;
        }
    }
    (sum, faces)
}
