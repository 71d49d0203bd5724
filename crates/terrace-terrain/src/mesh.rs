//! Sampled terrain mesh and render buffers.
//!
//! Positions, normals and colors are stored interleaved
//! (`[x0, y0, z0, x1, y1, z1, ...]`), the layout vertex attribute
//! buffers expect. Vertex `(row, col)` lives at `row * side + col`.

use serde::{Deserialize, Serialize};
use terrace_math::Vec3;
use terrace_types::{GridCoord, TerraceError, TerraceResult};

/// A height grid mapped onto a domain: positions, triangles and
/// wireframe edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainMesh {
    /// Vertices along each axis.
    pub side: usize,

    /// Interleaved vertex positions.
    pub positions: Vec<f32>,

    /// Triangle indices, three per triangle, counter-clockwise from +z.
    pub indices: Vec<u32>,

    /// Line-list indices, two per edge, three edges per triangle.
    /// Shared edges appear once per triangle.
    pub edges: Vec<u32>,

    /// Smallest sampled z (offset applied).
    pub min_height: f32,

    /// Largest sampled z (offset applied).
    pub max_height: f32,

    /// Offset that was added to every grid height.
    pub height_offset: f32,
}

impl TerrainMesh {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }

    /// Returns the position of vertex `i` as `[x, y, z]`.
    #[inline]
    pub fn position(&self, i: usize) -> [f32; 3] {
        let base = i * 3;
        [
            self.positions[base],
            self.positions[base + 1],
            self.positions[base + 2],
        ]
    }

    /// Returns the position of vertex `i` as a `Vec3`.
    #[inline]
    pub fn position_vec3(&self, i: usize) -> Vec3 {
        Vec3::from_array(self.position(i))
    }

    /// Returns the position at a grid coordinate. Panics outside the grid.
    #[inline]
    pub fn position_at(&self, coord: GridCoord) -> Vec3 {
        self.position_vec3(coord.linear(self.side))
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// Checks buffer consistency.
    ///
    /// - positions hold `side²` vertices
    /// - `2·(side-1)²` triangles and three edges per triangle
    /// - every index is in range
    pub fn validate(&self) -> TerraceResult<()> {
        let n = self.side * self.side;
        if self.positions.len() != n * 3 {
            return Err(TerraceError::InvalidMesh(format!(
                "Position buffer holds {} floats, expected {}",
                self.positions.len(),
                n * 3
            )));
        }
        let div = self.side.saturating_sub(1);
        if self.indices.len() != 2 * div * div * 3 {
            return Err(TerraceError::InvalidMesh(format!(
                "Index buffer holds {} indices, expected {}",
                self.indices.len(),
                2 * div * div * 3
            )));
        }
        if self.edges.len() != self.indices.len() * 2 {
            return Err(TerraceError::InvalidMesh(format!(
                "Edge buffer holds {} indices, expected {}",
                self.edges.len(),
                self.indices.len() * 2
            )));
        }
        if let Some((i, &idx)) = self
            .indices
            .iter()
            .chain(self.edges.iter())
            .enumerate()
            .find(|(_, &idx)| idx as usize >= n)
        {
            return Err(TerraceError::InvalidMesh(format!(
                "Index {idx} at position {i} is out of range (vertex count: {n})"
            )));
        }
        Ok(())
    }
}

/// A single vertex with every attribute resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

/// Everything a renderer uploads: the mesh plus per-vertex normals and
/// colors in the same vertex order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderBuffers {
    pub mesh: TerrainMesh,
    /// Interleaved unit normals.
    pub normals: Vec<f32>,
    /// Interleaved RGB colors in `[0, 1]`.
    pub colors: Vec<f32>,
}

impl RenderBuffers {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    /// Returns every attribute of vertex `i`. Panics when out of range.
    pub fn vertex(&self, i: usize) -> Vertex {
        let base = i * 3;
        Vertex {
            position: self.mesh.position(i),
            normal: [
                self.normals[base],
                self.normals[base + 1],
                self.normals[base + 2],
            ],
            color: [
                self.colors[base],
                self.colors[base + 1],
                self.colors[base + 2],
            ],
        }
    }

    pub fn normal_vec3(&self, i: usize) -> Vec3 {
        let base = i * 3;
        Vec3::new(self.normals[base], self.normals[base + 1], self.normals[base + 2])
    }
}
