//! # AR Providers
//!
//! Capability trait implemented by every AR backend. Core code depends only on
//! [`ArProvider`]; ARCore, ARKit and the editor simulation each implement it.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::ArError;
use crate::plane::{quad_points, PlaneHandle, Pose};

/// State of the provider's asynchronous session handshake.
///
/// The handshake itself (permissions, SDK session negotiation) happens outside
/// this crate. The session only polls this flag once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionState {
    /// Handshake still in flight.
    Connecting,
    /// Session is up; tracking may begin.
    Connected,
    /// Handshake finished without a session.
    Failed,
}

/// Single-plane luminance image from the device camera.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraImage {
    pub width: u32,
    pub height: u32,
    pub luma: Vec<u8>,
}

/// Plane-tracking capabilities of an AR backend.
///
/// Handles passed to the per-plane queries always come from the most recent
/// [`ArProvider::active_planes`] call.
pub trait ArProvider {
    /// True when the provider currently has a tracking fix.
    fn is_tracking(&self) -> bool;

    /// Writes the handles of every currently known plane into `out`.
    ///
    /// `out` arrives cleared; implementations only push.
    fn active_planes(&self, out: &mut Vec<PlaneHandle>);

    /// Returns the plane `handle` was merged into, if any.
    fn subsumed_by(&self, handle: PlaneHandle) -> Option<PlaneHandle>;

    /// Center and orientation of the plane.
    fn pose(&self, handle: PlaneHandle) -> Pose;

    /// Width (local X) and depth (local Z) of the plane.
    fn extents(&self, handle: PlaneHandle) -> Vec2;

    /// Writes the ordered boundary polygon of the plane into `out`.
    ///
    /// `out` arrives cleared. The default reports the plane's bounding quad,
    /// which is all fallback platforms provide; backends with real polygon
    /// data override it.
    fn boundary_polygon(&self, handle: PlaneHandle, out: &mut Vec<Vec3>) {
        let pose = self.pose(handle);
        out.extend_from_slice(&quad_points(pose.position, pose.rotation, self.extents(handle)));
    }

    /// Progress of the provider's session handshake.
    fn connection_state(&self) -> ConnectionState {
        ConnectionState::Connected
    }

    /// Camera pose without world scaling, `None` while not tracking.
    fn camera_pose(&self) -> Result<Option<Pose>, ArError> {
        Err(ArError::not_supported("camera_pose"))
    }

    /// Writes the current feature points into `out`.
    ///
    /// Returns `Ok(false)` while not tracking or when no points are available.
    fn point_cloud(&self, _out: &mut Vec<Vec3>) -> Result<bool, ArError> {
        Err(ArError::not_supported("point_cloud"))
    }

    /// Current camera frame.
    fn camera_image(&self) -> Result<CameraImage, ArError> {
        Err(ArError::not_supported("camera_image"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    /// Provider exposing one fixed plane and nothing else.
    struct FixedPlane;

    impl ArProvider for FixedPlane {
        fn is_tracking(&self) -> bool {
            true
        }

        fn active_planes(&self, out: &mut Vec<PlaneHandle>) {
            out.push(PlaneHandle(1));
        }

        fn subsumed_by(&self, _handle: PlaneHandle) -> Option<PlaneHandle> {
            None
        }

        fn pose(&self, _handle: PlaneHandle) -> Pose {
            Pose::new(Vec3::new(0.0, 1.0, 0.0), Quat::IDENTITY)
        }

        fn extents(&self, _handle: PlaneHandle) -> Vec2 {
            Vec2::new(2.0, 2.0)
        }
    }

    #[test]
    fn test_default_boundary_is_quad() {
        let mut out = Vec::new();
        FixedPlane.boundary_polygon(PlaneHandle(1), &mut out);
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|p| p.y == 1.0));
        assert_eq!(out[0], Vec3::new(-1.0, 1.0, -1.0));
    }

    #[test]
    fn test_default_connection_is_connected() {
        assert_eq!(FixedPlane.connection_state(), ConnectionState::Connected);
    }

    #[test]
    fn test_unimplemented_capabilities_report_not_supported() {
        assert_eq!(
            FixedPlane.camera_image().unwrap_err(),
            ArError::not_supported("camera_image")
        );
        assert!(matches!(
            FixedPlane.point_cloud(&mut Vec::new()),
            Err(ArError::NotSupported { capability: "point_cloud" })
        ));
        assert!(FixedPlane.camera_pose().is_err());
    }
}
