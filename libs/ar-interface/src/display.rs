//! # Display Transform
//!
//! Maps the device screen orientation onto the 2D rotation applied to camera
//! texture coordinates. Recomputed only when the orientation changes.

use glam::Mat4;

/// Device screen orientation as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenOrientation {
    #[default]
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
    /// Orientation could not be determined; treated like `LandscapeLeft`.
    Unknown,
}

/// Cached orientation-dependent display matrix.
///
/// # Example
///
/// ```rust
/// use ar_interface::{DisplayTransform, ScreenOrientation};
///
/// let mut display = DisplayTransform::new();
/// assert!(display.update(ScreenOrientation::LandscapeRight));
/// assert!(!display.update(ScreenOrientation::LandscapeRight));
/// assert_eq!(display.matrix().x_axis.x, -1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayTransform {
    cached: Option<ScreenOrientation>,
    matrix: Mat4,
}

impl Default for DisplayTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayTransform {
    pub fn new() -> Self {
        Self {
            cached: None,
            matrix: Mat4::IDENTITY,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    pub fn orientation(&self) -> Option<ScreenOrientation> {
        self.cached
    }

    /// Recomputes the matrix if `orientation` differs from the cached one.
    /// Returns true when the matrix was recomputed.
    pub fn update(&mut self, orientation: ScreenOrientation) -> bool {
        if self.cached == Some(orientation) {
            return false;
        }

        let (cos, sin) = match orientation {
            ScreenOrientation::Portrait => (0.0, -1.0),
            ScreenOrientation::PortraitUpsideDown => (0.0, 1.0),
            ScreenOrientation::LandscapeLeft => (1.0, 0.0),
            ScreenOrientation::LandscapeRight => (-1.0, 0.0),
            ScreenOrientation::Unknown => (1.0, 0.0),
        };

        // m00, m01, m10, m11 in row/column notation; glam stores columns.
        self.matrix.x_axis.x = cos;
        self.matrix.y_axis.x = sin;
        self.matrix.x_axis.y = sin;
        self.matrix.y_axis.y = -cos;

        tracing::debug!(?orientation, "Display transform recomputed");
        self.cached = Some(orientation);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portrait() {
        let mut display = DisplayTransform::new();
        display.update(ScreenOrientation::Portrait);
        let m = display.matrix();
        assert_eq!(m.x_axis.x, 0.0);
        assert_eq!(m.y_axis.x, -1.0);
        assert_eq!(m.x_axis.y, -1.0);
        assert_eq!(m.y_axis.y, 0.0);
        assert_eq!(m.z_axis.z, 1.0);
        assert_eq!(m.w_axis.w, 1.0);
    }

    #[test]
    fn test_landscape_left_flips_y() {
        let mut display = DisplayTransform::new();
        display.update(ScreenOrientation::LandscapeLeft);
        let m = display.matrix();
        assert_eq!(m.x_axis.x, 1.0);
        assert_eq!(m.y_axis.y, -1.0);
        assert_eq!(m.x_axis.y, 0.0);
    }

    #[test]
    fn test_unknown_matches_landscape_left() {
        let mut left = DisplayTransform::new();
        left.update(ScreenOrientation::LandscapeLeft);
        let mut unknown = DisplayTransform::new();
        unknown.update(ScreenOrientation::Unknown);
        assert_eq!(unknown.matrix(), left.matrix());
    }

    #[test]
    fn test_cache_hits_skip_recompute() {
        let mut display = DisplayTransform::new();
        assert_eq!(display.orientation(), None);
        assert!(display.update(ScreenOrientation::PortraitUpsideDown));
        assert!(!display.update(ScreenOrientation::PortraitUpsideDown));
        assert!(display.update(ScreenOrientation::Portrait));
        assert_eq!(display.orientation(), Some(ScreenOrientation::Portrait));
    }
}
