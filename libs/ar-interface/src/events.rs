//! # Plane Events
//!
//! Publish/subscribe channel between the tracker and its consumers. The bus is
//! an explicit value owned by the host; listeners attach and detach between
//! ticks.

use std::cell::RefCell;
use std::rc::Rc;

use crate::plane::BoundedPlane;

/// Outcome of diffing one plane in a tick.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaneEvent {
    Added(BoundedPlane),
    Updated(BoundedPlane),
    Removed(BoundedPlane),
}

impl PlaneEvent {
    /// The plane the event refers to.
    pub fn plane(&self) -> &BoundedPlane {
        match self {
            PlaneEvent::Added(plane) | PlaneEvent::Updated(plane) | PlaneEvent::Removed(plane) => {
                plane
            }
        }
    }

    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            PlaneEvent::Added(_) => "added",
            PlaneEvent::Updated(_) => "updated",
            PlaneEvent::Removed(_) => "removed",
        }
    }
}

/// Receiver of plane lifecycle callbacks. All methods default to no-ops.
pub trait PlaneListener {
    fn on_plane_added(&mut self, _plane: &BoundedPlane) {}

    fn on_plane_updated(&mut self, _plane: &BoundedPlane) {}

    fn on_plane_removed(&mut self, _plane: &BoundedPlane) {}

    /// Called once after every event of a tick has been delivered.
    fn on_tick_complete(&mut self) {}
}

/// Any `FnMut(&PlaneEvent)` closure can listen to the bus.
impl<F> PlaneListener for F
where
    F: FnMut(&PlaneEvent),
{
    fn on_plane_added(&mut self, plane: &BoundedPlane) {
        self(&PlaneEvent::Added(plane.clone()));
    }

    fn on_plane_updated(&mut self, plane: &BoundedPlane) {
        self(&PlaneEvent::Updated(plane.clone()));
    }

    fn on_plane_removed(&mut self, plane: &BoundedPlane) {
        self(&PlaneEvent::Removed(plane.clone()));
    }
}

/// Token returned by [`PlaneEventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Shared, single-threaded listener handle.
pub type SharedListener = Rc<RefCell<dyn PlaneListener>>;

/// Fan-out of plane events to registered listeners, in subscription order.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use ar_interface::{PlaneEvent, PlaneEventBus};
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = seen.clone();
///
/// let mut bus = PlaneEventBus::new();
/// let id = bus.subscribe(Rc::new(RefCell::new(move |event: &PlaneEvent| {
///     sink.borrow_mut().push(event.kind());
/// })));
/// assert_eq!(bus.listener_count(), 1);
///
/// assert!(bus.unsubscribe(id));
/// assert_eq!(bus.listener_count(), 0);
/// ```
#[derive(Default)]
pub struct PlaneEventBus {
    listeners: Vec<(SubscriptionId, SharedListener)>,
    next_id: u64,
}

impl PlaneEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener and returns the token that detaches it.
    pub fn subscribe(&mut self, listener: SharedListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Detaches a listener. Returns false if the token was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Delivers one event to every listener.
    pub fn publish(&self, event: &PlaneEvent) {
        tracing::debug!(
            kind = event.kind(),
            plane = %event.plane().id,
            listeners = self.listeners.len(),
            "Publishing plane event"
        );
        for (_, listener) in &self.listeners {
            let mut listener = listener.borrow_mut();
            match event {
                PlaneEvent::Added(plane) => listener.on_plane_added(plane),
                PlaneEvent::Updated(plane) => listener.on_plane_updated(plane),
                PlaneEvent::Removed(plane) => listener.on_plane_removed(plane),
            }
        }
    }

    /// Delivers a batch of events, then signals the end of the tick.
    pub fn publish_all(&self, events: &[PlaneEvent]) {
        for event in events {
            self.publish(event);
        }
        self.finish_tick();
    }

    /// Tells every listener that the current tick's events are complete.
    pub fn finish_tick(&self) {
        for (_, listener) in &self.listeners {
            listener.borrow_mut().on_tick_complete();
        }
    }
}

impl std::fmt::Debug for PlaneEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaneEventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plane::PlaneId;
    use glam::{Quat, Vec2, Vec3};

    fn plane() -> BoundedPlane {
        BoundedPlane::new(PlaneId::new_v4(), Vec3::ZERO, Quat::IDENTITY, Vec2::ONE)
    }

    #[derive(Default)]
    struct Counter {
        added: usize,
        updated: usize,
        removed: usize,
        ticks: usize,
    }

    impl PlaneListener for Counter {
        fn on_plane_added(&mut self, _plane: &BoundedPlane) {
            self.added += 1;
        }

        fn on_plane_updated(&mut self, _plane: &BoundedPlane) {
            self.updated += 1;
        }

        fn on_plane_removed(&mut self, _plane: &BoundedPlane) {
            self.removed += 1;
        }

        fn on_tick_complete(&mut self) {
            self.ticks += 1;
        }
    }

    #[test]
    fn test_publish_dispatches_by_kind() {
        let counter = Rc::new(RefCell::new(Counter::default()));
        let mut bus = PlaneEventBus::new();
        bus.subscribe(counter.clone());

        let p = plane();
        bus.publish_all(&[
            PlaneEvent::Added(p.clone()),
            PlaneEvent::Updated(p.clone()),
            PlaneEvent::Updated(p.clone()),
            PlaneEvent::Removed(p),
        ]);

        let counter = counter.borrow();
        assert_eq!(counter.added, 1);
        assert_eq!(counter.updated, 2);
        assert_eq!(counter.removed, 1);
        assert_eq!(counter.ticks, 1);
    }

    #[test]
    fn test_unsubscribed_listener_stops_receiving() {
        let counter = Rc::new(RefCell::new(Counter::default()));
        let mut bus = PlaneEventBus::new();
        let id = bus.subscribe(counter.clone());

        bus.publish(&PlaneEvent::Added(plane()));
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.publish(&PlaneEvent::Added(plane()));

        assert_eq!(counter.borrow().added, 1);
    }

    #[test]
    fn test_closure_listener_sees_events() {
        let kinds = Rc::new(RefCell::new(Vec::new()));
        let sink = kinds.clone();
        let mut bus = PlaneEventBus::new();
        bus.subscribe(Rc::new(RefCell::new(move |event: &PlaneEvent| {
            sink.borrow_mut().push(event.kind());
        })));

        bus.publish(&PlaneEvent::Added(plane()));
        bus.publish(&PlaneEvent::Removed(plane()));

        assert_eq!(*kinds.borrow(), vec!["added", "removed"]);
    }

    #[test]
    fn test_multiple_listeners_each_receive() {
        let first = Rc::new(RefCell::new(Counter::default()));
        let second = Rc::new(RefCell::new(Counter::default()));
        let mut bus = PlaneEventBus::new();
        bus.subscribe(first.clone());
        bus.subscribe(second.clone());

        bus.publish(&PlaneEvent::Updated(plane()));

        assert_eq!(first.borrow().updated, 1);
        assert_eq!(second.borrow().updated, 1);
    }
}
