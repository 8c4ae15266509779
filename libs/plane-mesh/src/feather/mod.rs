//! # Feathered Plane Mesh
//!
//! Converts a boundary polygon into a two-ring mesh. Vertex indices for a
//! four-point polygon:
//!
//! ```text
//! 0_______________1
//! |4___________5|
//! | |         | |
//! | |         | |
//! |7-----------6|
//! 3---------------2
//! ```
//!
//! Outer vertices `0..N` are the polygon itself (transparent), inner vertices
//! `N..2N` are pulled toward the center (opaque). The inner ring is closed by a
//! fan from vertex `N`, the band between the rings by two triangles per edge.

use config::constants::{
    FeatherConfig, DEGENERATE_DISTANCE, INNER_RING_COLOR, MAX_POLYGON_POINTS,
    MIN_POLYGON_POINTS, OUTER_RING_COLOR,
};
use glam::Vec3;

use crate::error::MeshError;
use crate::mesh::PlaneMesh;

/// Fraction of the center-to-vertex distance kept by the inner ring.
///
/// `1 - min(length / distance, scale)`, clamped to `[0, 1]`. Vertices at (or
/// within [`DEGENERATE_DISTANCE`] of) the center keep their position.
///
/// # Example
///
/// ```rust
/// use config::constants::FeatherConfig;
/// use plane_mesh::feather_scale;
///
/// let config = FeatherConfig::default();
/// assert!((feather_scale(&config, 10.0) - 0.98).abs() < 1e-6);
/// assert!((feather_scale(&config, 0.5) - 0.8).abs() < 1e-6);
/// assert_eq!(feather_scale(&config, 0.0), 1.0);
/// ```
pub fn feather_scale(config: &FeatherConfig, distance: f32) -> f32 {
    if distance <= DEGENERATE_DISTANCE {
        return 1.0;
    }
    (1.0 - (config.length / distance).min(config.scale)).clamp(0.0, 1.0)
}

/// Cached feathered mesh for one plane.
///
/// Owns the mesh buffers and the polygon they were built from.
/// [`FeatherMesher::update`] rebuilds only when the polygon differs pointwise
/// from the cached one.
#[derive(Debug, Clone, Default)]
pub struct FeatherMesher {
    config: FeatherConfig,
    previous: Vec<Vec3>,
    mesh: PlaneMesh,
    rebuilds: u64,
}

impl FeatherMesher {
    pub fn new(config: FeatherConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &FeatherConfig {
        &self.config
    }

    /// The most recently built mesh (empty before the first rebuild).
    pub fn mesh(&self) -> &PlaneMesh {
        &self.mesh
    }

    /// Number of rebuilds performed so far.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    /// Drops the cached polygon so the next update rebuilds unconditionally.
    pub fn invalidate(&mut self) {
        self.previous.clear();
    }

    /// Rebuilds the mesh if `polygon` changed since the last successful call.
    ///
    /// Returns `Ok(true)` when the mesh was rebuilt and `Ok(false)` on a cache
    /// hit. On error the mesh and the cache are left untouched.
    pub fn update(&mut self, polygon: &[Vec3], center: Vec3) -> Result<bool, MeshError> {
        validate_polygon(polygon, center)?;

        if self.previous.as_slice() == polygon {
            return Ok(false);
        }

        self.build(polygon, center);
        self.previous.clear();
        self.previous.extend_from_slice(polygon);
        self.rebuilds += 1;

        tracing::trace!(
            points = polygon.len(),
            triangles = self.mesh.triangle_count(),
            "Feathered plane mesh rebuilt"
        );
        Ok(true)
    }

    fn build(&mut self, polygon: &[Vec3], center: Vec3) {
        let mesh = &mut self.mesh;
        mesh.clear();

        // Outer ring: 0..n
        for &v in polygon {
            mesh.add_vertex(v, OUTER_RING_COLOR);
        }

        // Inner ring: n..2n
        for &v in polygon {
            let d = v - center;
            let scale = feather_scale(&self.config, d.length());
            mesh.add_vertex(center + d * scale, INNER_RING_COLOR);
        }

        let n = polygon.len() as u32;
        let first_inner = n;

        // Opaque cap, e.g. (4, 5, 6) and (4, 6, 7)
        for i in 0..n - 2 {
            mesh.add_triangle(first_inner, first_inner + i + 1, first_inner + i + 2);
        }

        // Feathered band, e.g. (0, 1, 4), (4, 1, 5), ... (7, 3, 0), (7, 0, 4)
        for i in 0..n {
            let outer1 = i;
            let outer2 = (i + 1) % n;
            let inner1 = first_inner + i;
            let inner2 = first_inner + (i + 1) % n;

            mesh.add_triangle(outer1, outer2, inner1);
            mesh.add_triangle(inner1, outer2, inner2);
        }
    }
}

fn validate_polygon(polygon: &[Vec3], center: Vec3) -> Result<(), MeshError> {
    if polygon.len() < MIN_POLYGON_POINTS {
        return Err(MeshError::degenerate(format!(
            "Boundary polygon needs at least {} points, got {}",
            MIN_POLYGON_POINTS,
            polygon.len()
        )));
    }
    if polygon.len() > MAX_POLYGON_POINTS {
        return Err(MeshError::TooManyVertices {
            count: polygon.len(),
            max: MAX_POLYGON_POINTS,
        });
    }
    if !center.is_finite() || polygon.iter().any(|v| !v.is_finite()) {
        return Err(MeshError::degenerate("Boundary polygon has non-finite coordinates"));
    }
    Ok(())
}
