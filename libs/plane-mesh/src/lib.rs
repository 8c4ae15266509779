//! # Plane Mesh
//!
//! Feathered-edge triangle meshes for AR plane boundary polygons.
//!
//! ## Architecture
//!
//! ```text
//! boundary polygon + center → FeatherMesher → PlaneMesh (vertices, colors, triangles)
//! ```
//!
//! The outer ring is the raw polygon with transparent vertex colors, the inner
//! ring is the polygon pulled toward the center and fully opaque. Rendering
//! with vertex alpha fades the plane out toward its boundary.
//!
//! ## Usage
//!
//! ```rust
//! use plane_mesh::FeatherMesher;
//! use glam::Vec3;
//!
//! let quad = [
//!     Vec3::new(-1.0, 0.0, -1.0),
//!     Vec3::new(-1.0, 0.0, 1.0),
//!     Vec3::new(1.0, 0.0, 1.0),
//!     Vec3::new(1.0, 0.0, -1.0),
//! ];
//!
//! let mut mesher = FeatherMesher::default();
//! assert!(mesher.update(&quad, Vec3::ZERO)?);
//! assert_eq!(mesher.mesh().vertex_count(), 8);
//! assert_eq!(mesher.mesh().triangle_count(), 10);
//!
//! // Same polygon again: cached
//! assert!(!mesher.update(&quad, Vec3::ZERO)?);
//! # Ok::<(), plane_mesh::MeshError>(())
//! ```

pub mod error;
pub mod feather;
pub mod mesh;

pub use error::MeshError;
pub use feather::{feather_scale, FeatherMesher};
pub use mesh::PlaneMesh;
