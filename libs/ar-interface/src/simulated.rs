//! # Simulated Provider
//!
//! Editor-side provider with scripted planes. Used when running without a
//! device and throughout the test suites.
//!
//! Like device backends, subsumed planes keep being reported by
//! [`ArProvider::active_planes`] until they are explicitly removed; the tracker
//! is responsible for retiring them.

use std::collections::BTreeMap;

use glam::{Quat, Vec2, Vec3};

use crate::error::ArError;
use crate::plane::{PlaneHandle, Pose};
use crate::provider::{ArProvider, ConnectionState};

#[derive(Debug, Clone)]
struct SimulatedPlane {
    pose: Pose,
    extents: Vec2,
    /// `None` falls back to the bounding quad.
    polygon: Option<Vec<Vec3>>,
    subsumed_by: Option<PlaneHandle>,
}

/// Scripted [`ArProvider`] backend.
///
/// # Example
///
/// ```rust
/// use ar_interface::{ArProvider, SimulatedProvider};
/// use glam::{Quat, Vec2, Vec3};
///
/// let mut provider = SimulatedProvider::new();
/// let floor = provider.add_plane(Vec3::ZERO, Quat::IDENTITY, Vec2::new(4.0, 4.0));
///
/// let mut handles = Vec::new();
/// provider.active_planes(&mut handles);
/// assert_eq!(handles, vec![floor]);
/// ```
#[derive(Debug, Clone)]
pub struct SimulatedProvider {
    planes: BTreeMap<PlaneHandle, SimulatedPlane>,
    next_handle: u64,
    tracking: bool,
    connection: ConnectionState,
    camera: Pose,
    points: Vec<Vec3>,
}

impl Default for SimulatedProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedProvider {
    /// Creates a connected, tracking provider with no planes.
    pub fn new() -> Self {
        Self {
            planes: BTreeMap::new(),
            next_handle: 1,
            tracking: true,
            connection: ConnectionState::Connected,
            camera: Pose::default(),
            points: Vec::new(),
        }
    }

    /// Adds a plane and returns its handle.
    pub fn add_plane(&mut self, center: Vec3, rotation: Quat, extents: Vec2) -> PlaneHandle {
        let handle = PlaneHandle(self.next_handle);
        self.next_handle += 1;
        self.planes.insert(
            handle,
            SimulatedPlane {
                pose: Pose::new(center, rotation),
                extents,
                polygon: None,
                subsumed_by: None,
            },
        );
        handle
    }

    /// Stops reporting the plane entirely.
    pub fn remove_plane(&mut self, handle: PlaneHandle) -> Result<(), ArError> {
        self.planes
            .remove(&handle)
            .map(|_| ())
            .ok_or(ArError::UnknownPlane(handle))
    }

    /// Marks `handle` as merged into `into`. The plane stays in the active list.
    pub fn subsume(&mut self, handle: PlaneHandle, into: PlaneHandle) -> Result<(), ArError> {
        if !self.planes.contains_key(&into) {
            return Err(ArError::UnknownPlane(into));
        }
        self.plane_mut(handle)?.subsumed_by = Some(into);
        Ok(())
    }

    /// Reports the plane as standalone again.
    pub fn unsubsume(&mut self, handle: PlaneHandle) -> Result<(), ArError> {
        self.plane_mut(handle)?.subsumed_by = None;
        Ok(())
    }

    pub fn set_pose(&mut self, handle: PlaneHandle, pose: Pose) -> Result<(), ArError> {
        self.plane_mut(handle)?.pose = pose;
        Ok(())
    }

    pub fn set_extents(&mut self, handle: PlaneHandle, extents: Vec2) -> Result<(), ArError> {
        self.plane_mut(handle)?.extents = extents;
        Ok(())
    }

    /// Replaces the quad fallback with an explicit boundary polygon.
    pub fn set_polygon(&mut self, handle: PlaneHandle, polygon: Vec<Vec3>) -> Result<(), ArError> {
        self.plane_mut(handle)?.polygon = Some(polygon);
        Ok(())
    }

    pub fn set_tracking(&mut self, tracking: bool) {
        self.tracking = tracking;
    }

    pub fn set_connection_state(&mut self, state: ConnectionState) {
        self.connection = state;
    }

    pub fn set_camera_pose(&mut self, pose: Pose) {
        self.camera = pose;
    }

    pub fn set_points(&mut self, points: Vec<Vec3>) {
        self.points = points;
    }

    fn plane(&self, handle: PlaneHandle) -> Option<&SimulatedPlane> {
        self.planes.get(&handle)
    }

    fn plane_mut(&mut self, handle: PlaneHandle) -> Result<&mut SimulatedPlane, ArError> {
        self.planes
            .get_mut(&handle)
            .ok_or(ArError::UnknownPlane(handle))
    }
}

impl ArProvider for SimulatedProvider {
    fn is_tracking(&self) -> bool {
        self.tracking
    }

    fn active_planes(&self, out: &mut Vec<PlaneHandle>) {
        out.extend(self.planes.keys().copied());
    }

    fn subsumed_by(&self, handle: PlaneHandle) -> Option<PlaneHandle> {
        self.plane(handle).and_then(|p| p.subsumed_by)
    }

    fn pose(&self, handle: PlaneHandle) -> Pose {
        self.plane(handle).map(|p| p.pose).unwrap_or_default()
    }

    fn extents(&self, handle: PlaneHandle) -> Vec2 {
        self.plane(handle).map(|p| p.extents).unwrap_or(Vec2::ZERO)
    }

    fn boundary_polygon(&self, handle: PlaneHandle, out: &mut Vec<Vec3>) {
        let Some(plane) = self.plane(handle) else {
            return;
        };
        match &plane.polygon {
            Some(polygon) => out.extend_from_slice(polygon),
            None => out.extend_from_slice(&crate::plane::quad_points(
                plane.pose.position,
                plane.pose.rotation,
                plane.extents,
            )),
        }
    }

    fn connection_state(&self) -> ConnectionState {
        self.connection
    }

    fn camera_pose(&self) -> Result<Option<Pose>, ArError> {
        Ok(self.tracking.then_some(self.camera))
    }

    fn point_cloud(&self, out: &mut Vec<Vec3>) -> Result<bool, ArError> {
        if !self.tracking || self.points.is_empty() {
            return Ok(false);
        }
        out.clear();
        out.extend_from_slice(&self.points);
        Ok(true)
    }
}
