//! Centralized configuration values shared across the plane pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// FEATHER CONSTANTS
// =============================================================================

/// Absolute feather distance in meters between a plane's outer boundary and
/// its opaque inner ring.
///
/// # Examples
/// ```
/// use config::constants::FEATHER_LENGTH;
/// assert_eq!(FEATHER_LENGTH, 0.2);
/// ```
pub const FEATHER_LENGTH: f32 = 0.2;

/// Upper bound on the feather as a fraction of the distance between the plane
/// center and a boundary vertex. Small planes are feathered by at most this
/// share of their radius.
///
/// # Examples
/// ```
/// use config::constants::FEATHER_SCALE;
/// assert!(FEATHER_SCALE < 1.0);
/// ```
pub const FEATHER_SCALE: f32 = 0.2;

/// Distance below which a boundary vertex is treated as coinciding with the
/// plane center. Such vertices get no inward feather offset.
///
/// # Examples
/// ```
/// use config::constants::DEGENERATE_DISTANCE;
/// assert!(DEGENERATE_DISTANCE > 0.0);
/// ```
pub const DEGENERATE_DISTANCE: f32 = f32::EPSILON;

/// Minimum number of boundary points needed to build a plane mesh.
pub const MIN_POLYGON_POINTS: usize = 3;

/// Safety limit on boundary points accepted for a single plane.
///
/// Providers report polygons of a few dozen points; anything beyond this is
/// treated as corrupt input.
pub const MAX_POLYGON_POINTS: usize = 4096;

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Vertex color of the feathered outer ring (fully transparent).
pub const OUTER_RING_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 0.0];

/// Vertex color of the opaque inner ring.
pub const INNER_RING_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Tint palette cycled through as planes are discovered.
///
/// RGB values in range [0.0, 1.0], alpha is always 1.
///
/// # Examples
/// ```
/// use config::constants::PLANE_COLORS;
/// let tint = PLANE_COLORS[17 % PLANE_COLORS.len()];
/// assert_eq!(tint, PLANE_COLORS[2]);
/// ```
pub const PLANE_COLORS: [[f32; 4]; 15] = [
    [1.0, 1.0, 1.0, 1.0],
    [0.956, 0.262, 0.211, 1.0],
    [0.913, 0.117, 0.388, 1.0],
    [0.611, 0.152, 0.654, 1.0],
    [0.403, 0.227, 0.717, 1.0],
    [0.247, 0.317, 0.709, 1.0],
    [0.129, 0.588, 0.952, 1.0],
    [0.011, 0.662, 0.956, 1.0],
    [0.0, 0.737, 0.831, 1.0],
    [0.0, 0.588, 0.533, 1.0],
    [0.298, 0.686, 0.313, 1.0],
    [0.545, 0.764, 0.290, 1.0],
    [0.803, 0.862, 0.223, 1.0],
    [1.0, 0.921, 0.231, 1.0],
    [1.0, 0.756, 0.027, 1.0],
];

// =============================================================================
// RENDERING CONSTANTS
// =============================================================================

/// Collision layer assigned to plane renderables so ray queries can filter
/// for AR planes only.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_PLANE_LAYER;
/// let mask = 1u32 << DEFAULT_PLANE_LAYER;
/// assert_ne!(mask, 0);
/// ```
pub const DEFAULT_PLANE_LAYER: u32 = 8;

/// Upper bound (exclusive) of the random texture rotation in degrees.
pub const MAX_UV_ROTATION_DEGREES: f32 = 360.0;

// =============================================================================
// FEATHER CONFIG
// =============================================================================

/// Validated feather parameters shared between crates.
///
/// # Examples
/// ```
/// use config::constants::FeatherConfig;
/// let config = FeatherConfig::default();
/// assert!(config.length > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatherConfig {
    /// Absolute feather distance in meters.
    pub length: f32,
    /// Maximum feather as a fraction of the center-to-vertex distance.
    pub scale: f32,
}

impl FeatherConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// length and scale.
    ///
    /// # Examples
    /// ```
    /// use config::constants::FeatherConfig;
    /// let cfg = FeatherConfig::new(0.1, 0.5).expect("valid config");
    /// assert_eq!(cfg.scale, 0.5);
    /// ```
    pub fn new(length: f32, scale: f32) -> Result<Self, ConfigError> {
        if !length.is_finite() || length < 0.0 {
            return Err(ConfigError::InvalidFeatherLength(length));
        }
        if !scale.is_finite() || !(0.0..1.0).contains(&scale) {
            return Err(ConfigError::InvalidFeatherScale(scale));
        }
        Ok(Self { length, scale })
    }
}

impl Default for FeatherConfig {
    fn default() -> Self {
        Self {
            length: FEATHER_LENGTH,
            scale: FEATHER_SCALE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the feather length is negative or not finite.
    InvalidFeatherLength(f32),
    /// Raised when the feather scale falls outside `[0, 1)`.
    InvalidFeatherScale(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidFeatherLength(value) => {
                write!(f, "feather length must be finite and >= 0: {value}")
            }
            ConfigError::InvalidFeatherScale(value) => {
                write!(f, "feather scale must be in [0, 1): {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
