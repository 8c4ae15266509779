//! # Plane Mesh Data
//!
//! Vertex, color and triangle buffers for one plane. Buffers are cleared and
//! refilled on every rebuild so their allocations survive across frames.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A triangle mesh with one RGBA color per vertex.
///
/// # Example
///
/// ```rust
/// use plane_mesh::PlaneMesh;
/// use glam::Vec3;
///
/// let mut mesh = PlaneMesh::new();
/// let a = mesh.add_vertex(Vec3::ZERO, [1.0; 4]);
/// let b = mesh.add_vertex(Vec3::Z, [1.0; 4]);
/// let c = mesh.add_vertex(Vec3::X, [1.0; 4]);
/// mesh.add_triangle(a, b, c);
/// assert_eq!(mesh.face_normal(0), Vec3::Y);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaneMesh {
    vertices: Vec<Vec3>,
    /// RGBA, parallel to `vertices`
    colors: Vec<[f32; 4]>,
    triangles: Vec<[u32; 3]>,
}

impl PlaneMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            colors: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Empties all buffers, keeping their allocations.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.colors.clear();
        self.triangles.clear();
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a colored vertex and returns its index.
    pub fn add_vertex(&mut self, position: Vec3, color: [f32; 4]) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.colors.push(color);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    #[inline]
    pub fn colors(&self) -> &[[f32; 4]] {
        &self.colors
    }

    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Unnormalized geometric normal `(v1 - v0) × (v2 - v0)` of a triangle.
    ///
    /// # Panics
    ///
    /// Panics if `triangle >= self.triangle_count()` or the triangle indexes a
    /// missing vertex (see [`PlaneMesh::validate`]).
    pub fn face_normal(&self, triangle: usize) -> Vec3 {
        let [a, b, c] = self.triangles[triangle];
        let v0 = self.vertices[a as usize];
        let v1 = self.vertices[b as usize];
        let v2 = self.vertices[c as usize];
        (v1 - v0).cross(v2 - v0)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (Vec3::ZERO, Vec3::ZERO);
        };
        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Checks that every triangle references three distinct, existing
    /// vertices and that colors line up with vertices.
    pub fn validate(&self) -> bool {
        if self.colors.len() != self.vertices.len() {
            return false;
        }
        let vertex_count = self.vertices.len() as u32;
        self.triangles.iter().all(|tri| {
            tri.iter().all(|&i| i < vertex_count)
                && tri[0] != tri[1]
                && tri[1] != tri[2]
                && tri[0] != tri[2]
        })
    }

    /// Exports vertices as a flat `[x, y, z, ...]` array for GPU upload.
    pub fn positions_flat(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.to_array()).collect()
    }

    /// Exports triangle indices as a flat `[i0, i1, i2, ...]` array.
    pub fn indices_flat(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}
