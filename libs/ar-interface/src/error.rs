//! # AR Errors
//!
//! Error types for provider capability queries.

use thiserror::Error;

use crate::plane::PlaneHandle;

/// Errors surfaced by [`ArProvider`](crate::ArProvider) capability calls.
///
/// Losing tracking is a normal transient state and is reported through
/// `Ok(None)` / `Ok(false)` returns, never through this type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArError {
    /// The provider does not implement the requested capability.
    #[error("Not supported by this provider: {capability}")]
    NotSupported { capability: &'static str },

    /// A handle was queried that the provider no longer knows.
    #[error("Unknown plane handle: {0}")]
    UnknownPlane(PlaneHandle),
}

impl ArError {
    /// Creates a not-supported error for the named capability.
    pub fn not_supported(capability: &'static str) -> Self {
        Self::NotSupported { capability }
    }
}
