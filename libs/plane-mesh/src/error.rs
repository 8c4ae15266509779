//! # Mesh Errors
//!
//! Error types for plane mesh generation.

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
    /// Polygon cannot be triangulated (too few points, non-finite coordinates)
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Too many boundary points
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }
}
