//! # Bounded Planes
//!
//! Pure-data records describing a tracked planar surface. Provider-native
//! references never live here: the tracker keys its registry by
//! [`PlaneHandle`] and hands out [`BoundedPlane`] values only.

use std::fmt;

use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque provider-side plane reference.
///
/// Providers map their native trackables onto these keys. The value carries no
/// meaning outside the provider that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlaneHandle(pub u64);

impl fmt::Display for PlaneHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Stable identity of a tracked plane, assigned on first observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlaneId(Uuid);

impl PlaneId {
    /// Generates a fresh random identity.
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for PlaneId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for PlaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Position and orientation in provider world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Pose {
    /// Creates a pose from position and rotation.
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Quat::IDENTITY)
    }
}

/// Infinite plane in Hessian normal form: `normal · p + distance = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneEquation {
    pub normal: Vec3,
    pub distance: f32,
}

impl PlaneEquation {
    /// Builds the plane through `point` with the given unit `normal`.
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        Self {
            normal,
            distance: -normal.dot(point),
        }
    }

    /// Signed distance of `point` from the plane (positive on the normal side).
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }
}

/// A tracked plane with pose, size and its current boundary polygon.
///
/// `extents.x` is the width along the local X axis and `extents.y` the height
/// along the local Z axis. The plane's up direction is local Y.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundedPlane {
    pub id: PlaneId,
    pub center: Vec3,
    pub rotation: Quat,
    pub extents: Vec2,
    /// Ordered boundary points for this frame. Point order is stable across
    /// frames for the same plane.
    pub boundary: Vec<Vec3>,
}

impl BoundedPlane {
    /// Creates a plane whose boundary is its axis-aligned quad.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ar_interface::{BoundedPlane, PlaneId};
    /// use glam::{Quat, Vec2, Vec3};
    ///
    /// let plane = BoundedPlane::new(PlaneId::new_v4(), Vec3::ZERO, Quat::IDENTITY, Vec2::new(2.0, 4.0));
    /// assert_eq!(plane.boundary.len(), 4);
    /// assert_eq!(plane.normal(), Vec3::Y);
    /// ```
    pub fn new(id: PlaneId, center: Vec3, rotation: Quat, extents: Vec2) -> Self {
        let boundary = quad_points(center, rotation, extents).to_vec();
        Self {
            id,
            center,
            rotation,
            extents,
            boundary,
        }
    }

    /// Plane up direction (`rotation * Y`).
    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Infinite plane through `center` with normal [`Self::normal`].
    pub fn plane(&self) -> PlaneEquation {
        PlaneEquation::from_normal_and_point(self.normal(), self.center)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.extents.x
    }

    pub fn set_width(&mut self, width: f32) {
        self.extents.x = width;
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.extents.y
    }

    pub fn set_height(&mut self, height: f32) {
        self.extents.y = height;
    }

    /// Corners of the plane's bounding rectangle.
    pub fn quad(&self) -> [Vec3; 4] {
        quad_points(self.center, self.rotation, self.extents)
    }
}

/// Corners of a rectangle centered at `center`, in the order
/// `-right-forward`, `-right+forward`, `+right+forward`, `+right-forward`.
///
/// Seen from the plane's up side this order runs clockwise, which gives
/// triangles built from it an up-facing geometric normal under a
/// right-handed cross product.
pub fn quad_points(center: Vec3, rotation: Quat, extents: Vec2) -> [Vec3; 4] {
    let right = rotation * Vec3::X * (extents.x / 2.0);
    let forward = rotation * Vec3::Z * (extents.y / 2.0);

    [
        center - right - forward,
        center - right + forward,
        center + right + forward,
        center + right - forward,
    ]
}
