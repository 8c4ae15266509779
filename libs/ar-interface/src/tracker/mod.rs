//! # Plane Tracker
//!
//! Per-frame diff of the provider's active planes against the known set.
//!
//! ## Algorithm
//!
//! 1. Refill the handle buffer from [`ArProvider::active_planes`]
//! 2. Known handle: subsumed ⇒ Removed, otherwise refresh ⇒ Updated
//! 3. Unknown handle: subsumed ⇒ ignored, otherwise new identity ⇒ Added
//! 4. Known handles missing from the buffer ⇒ Removed
//! 5. Apply deferred deletions
//!
//! Within one tick a plane yields at most one event.

use std::collections::{BTreeMap, HashSet};

use glam::Vec3;

use crate::events::{PlaneEvent, PlaneEventBus};
use crate::plane::{BoundedPlane, PlaneHandle, PlaneId};
use crate::provider::ArProvider;

/// When still-tracked planes are reported as Updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdatePolicy {
    /// Only when pose, extents or boundary changed since the last tick.
    #[default]
    OnChange,
    /// Every tick, whether or not anything changed.
    EveryTick,
}

/// Tracker configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackerConfig {
    pub update_policy: UpdatePolicy,
}

/// Registry of tracked planes keyed by provider handle.
///
/// # Example
///
/// ```rust
/// use ar_interface::{PlaneEvent, PlaneTracker, SimulatedProvider};
/// use glam::{Quat, Vec2, Vec3};
///
/// let mut provider = SimulatedProvider::new();
/// let floor = provider.add_plane(Vec3::ZERO, Quat::IDENTITY, Vec2::new(2.0, 2.0));
///
/// let mut tracker = PlaneTracker::default();
/// let mut events = Vec::new();
/// tracker.poll(&provider, &mut events);
/// assert!(matches!(events[0], PlaneEvent::Added(_)));
///
/// provider.remove_plane(floor).unwrap();
/// tracker.poll(&provider, &mut events);
/// assert!(matches!(events[0], PlaneEvent::Removed(_)));
/// assert!(tracker.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct PlaneTracker {
    config: TrackerConfig,
    planes: BTreeMap<PlaneHandle, BoundedPlane>,
    handle_buffer: Vec<PlaneHandle>,
    seen: HashSet<PlaneHandle>,
    pending_removal: Vec<PlaneHandle>,
    polygon_scratch: Vec<Vec3>,
}

impl PlaneTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> TrackerConfig {
        self.config
    }

    /// Number of planes currently tracked.
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    pub fn get(&self, handle: PlaneHandle) -> Option<&BoundedPlane> {
        self.planes.get(&handle)
    }

    /// Looks up a plane by its stable identity.
    pub fn find(&self, id: PlaneId) -> Option<(PlaneHandle, &BoundedPlane)> {
        self.planes
            .iter()
            .find(|(_, plane)| plane.id == id)
            .map(|(handle, plane)| (*handle, plane))
    }

    /// Iterates tracked planes in handle order.
    pub fn planes(&self) -> impl Iterator<Item = (PlaneHandle, &BoundedPlane)> {
        self.planes.iter().map(|(handle, plane)| (*handle, plane))
    }

    /// Diffs the provider and publishes the resulting events on `bus`.
    ///
    /// Returns false (and publishes nothing) while the provider is not
    /// tracking; known planes are kept as they are.
    pub fn tick<P>(&mut self, provider: &P, bus: &PlaneEventBus) -> bool
    where
        P: ArProvider + ?Sized,
    {
        let tracked = self.diff(provider, |event| bus.publish(&event));
        if tracked {
            bus.finish_tick();
        }
        tracked
    }

    /// Diffs the provider and collects the resulting events into `events`.
    ///
    /// `events` is cleared first so one buffer can be reused across frames.
    pub fn poll<P>(&mut self, provider: &P, events: &mut Vec<PlaneEvent>) -> bool
    where
        P: ArProvider + ?Sized,
    {
        events.clear();
        self.diff(provider, |event| events.push(event))
    }

    /// Forgets every tracked plane, reporting each as removed.
    pub fn clear(&mut self, bus: &PlaneEventBus) {
        for plane in self.planes.values() {
            bus.publish(&PlaneEvent::Removed(plane.clone()));
        }
        self.planes.clear();
        bus.finish_tick();
    }

    fn diff<P, F>(&mut self, provider: &P, mut emit: F) -> bool
    where
        P: ArProvider + ?Sized,
        F: FnMut(PlaneEvent),
    {
        if !provider.is_tracking() {
            tracing::trace!(planes = self.planes.len(), "Provider not tracking, skipping diff");
            return false;
        }

        let Self {
            config,
            planes,
            handle_buffer,
            seen,
            pending_removal,
            polygon_scratch,
        } = self;

        handle_buffer.clear();
        provider.active_planes(handle_buffer);
        seen.clear();
        pending_removal.clear();

        for &handle in handle_buffer.iter() {
            if !seen.insert(handle) {
                continue;
            }
            let subsumed_by = provider.subsumed_by(handle);

            match planes.get_mut(&handle) {
                Some(plane) => {
                    if let Some(into) = subsumed_by {
                        tracing::debug!(%handle, %into, id = %plane.id, "Plane subsumed");
                        emit(PlaneEvent::Removed(plane.clone()));
                        pending_removal.push(handle);
                        continue;
                    }

                    let pose = provider.pose(handle);
                    let extents = provider.extents(handle);
                    polygon_scratch.clear();
                    provider.boundary_polygon(handle, polygon_scratch);

                    let changed = plane.center != pose.position
                        || plane.rotation != pose.rotation
                        || plane.extents != extents
                        || plane.boundary != *polygon_scratch;

                    if changed {
                        plane.center = pose.position;
                        plane.rotation = pose.rotation;
                        plane.extents = extents;
                        std::mem::swap(&mut plane.boundary, polygon_scratch);
                    }
                    if changed || config.update_policy == UpdatePolicy::EveryTick {
                        emit(PlaneEvent::Updated(plane.clone()));
                    }
                }
                None => {
                    if let Some(into) = subsumed_by {
                        tracing::trace!(%handle, %into, "Ignoring plane subsumed before first report");
                        continue;
                    }

                    let pose = provider.pose(handle);
                    let mut boundary = Vec::new();
                    provider.boundary_polygon(handle, &mut boundary);
                    let plane = BoundedPlane {
                        id: PlaneId::new_v4(),
                        center: pose.position,
                        rotation: pose.rotation,
                        extents: provider.extents(handle),
                        boundary,
                    };

                    tracing::debug!(%handle, id = %plane.id, points = plane.boundary.len(), "Plane added");
                    emit(PlaneEvent::Added(plane.clone()));
                    planes.insert(handle, plane);
                }
            }
        }

        // Deletions are deferred so the registry is not mutated mid-scan.
        for (handle, plane) in planes.iter() {
            if !seen.contains(handle) {
                tracing::debug!(%handle, id = %plane.id, "Plane lost");
                emit(PlaneEvent::Removed(plane.clone()));
                pending_removal.push(*handle);
            }
        }

        for handle in pending_removal.drain(..) {
            planes.remove(&handle);
        }

        true
    }
}
