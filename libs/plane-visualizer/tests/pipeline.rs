//! End-to-end: simulated provider → session → visualizer → renderables.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use approx::assert_relative_eq;
use ar_interface::{ArSession, ConnectionState, ScreenOrientation, SimulatedProvider};
use glam::{Quat, Vec2, Vec3};
use plane_mesh::PlaneMesh;
use plane_visualizer::{PlaneVisualizer, Renderable, VisualizerConfig};

/// Host-side object log shared by every renderable.
#[derive(Debug, Default)]
struct Scene {
    uploads: HashMap<usize, usize>,
    inner_ring: HashMap<usize, Vec<Vec3>>,
    destroyed: Vec<usize>,
    next: usize,
}

struct Grid {
    serial: usize,
    scene: Rc<RefCell<Scene>>,
}

impl Renderable for Grid {
    fn set_tint(&mut self, _color: [f32; 4]) {}

    fn set_uv_rotation(&mut self, _degrees: f32) {}

    fn set_collision_layer(&mut self, _layer: u32) {}

    fn apply_mesh(&mut self, mesh: &PlaneMesh) {
        let mut scene = self.scene.borrow_mut();
        *scene.uploads.entry(self.serial).or_default() += 1;
        let half = mesh.vertex_count() / 2;
        scene
            .inner_ring
            .insert(self.serial, mesh.vertices()[half..].to_vec());
    }

    fn destroy(&mut self) {
        self.scene.borrow_mut().destroyed.push(self.serial);
    }
}

type GridPrototype = Box<dyn Fn() -> Grid>;

fn setup(
    provider: SimulatedProvider,
) -> (
    ArSession<SimulatedProvider>,
    Rc<RefCell<PlaneVisualizer<GridPrototype>>>,
    Rc<RefCell<Scene>>,
) {
    let scene = Rc::new(RefCell::new(Scene::default()));
    let shared = scene.clone();
    let prototype: GridPrototype = Box::new(move || {
        let serial = {
            let mut scene = shared.borrow_mut();
            scene.next += 1;
            scene.next
        };
        Grid {
            serial,
            scene: shared.clone(),
        }
    });

    let mut session = ArSession::new(provider);
    let visualizer = Rc::new(RefCell::new(PlaneVisualizer::new(
        VisualizerConfig {
            uv_seed: Some(1),
            ..VisualizerConfig::default()
        },
        Some(prototype),
    )));
    PlaneVisualizer::enable(&visualizer, session.bus_mut());
    session.start();
    (session, visualizer, scene)
}

#[test]
fn quad_plane_gets_feathered_mesh() {
    let mut provider = SimulatedProvider::new();
    provider.add_plane(Vec3::ZERO, Quat::IDENTITY, Vec2::new(2.0, 2.0));
    let (mut session, visualizer, scene) = setup(provider);

    session.tick(ScreenOrientation::Portrait);

    assert_eq!(visualizer.borrow().len(), 1);
    let scene = scene.borrow();
    let inner = &scene.inner_ring[&1];
    assert_eq!(inner.len(), 4);

    let expected = 1.0 - 0.2 / 2.0_f32.sqrt();
    for v in inner {
        assert_relative_eq!(v.length(), 2.0_f32.sqrt() * expected, epsilon = 1e-5);
    }
}

#[test]
fn lost_plane_is_destroyed_and_survivor_untouched() {
    let mut provider = SimulatedProvider::new();
    let a = provider.add_plane(Vec3::ZERO, Quat::IDENTITY, Vec2::new(2.0, 2.0));
    provider.add_plane(Vec3::new(0.0, 1.0, 0.0), Quat::IDENTITY, Vec2::new(1.0, 1.0));
    let (mut session, visualizer, scene) = setup(provider);

    session.tick(ScreenOrientation::Portrait);
    session.provider_mut().remove_plane(a).unwrap();
    session.tick(ScreenOrientation::Portrait);
    session.tick(ScreenOrientation::Portrait);

    assert_eq!(visualizer.borrow().len(), 1);
    let scene = scene.borrow();
    assert_eq!(scene.destroyed, vec![1]);
    assert_eq!(scene.uploads[&2], 1, "unchanged plane is never re-meshed");
}

#[test]
fn moving_plane_is_re_meshed() {
    let mut provider = SimulatedProvider::new();
    let a = provider.add_plane(Vec3::ZERO, Quat::IDENTITY, Vec2::new(2.0, 2.0));
    let (mut session, _visualizer, scene) = setup(provider);

    session.tick(ScreenOrientation::Portrait);
    session
        .provider_mut()
        .set_extents(a, Vec2::new(3.0, 2.0))
        .unwrap();
    session.tick(ScreenOrientation::Portrait);

    assert_eq!(scene.borrow().uploads[&1], 2);
}

#[test]
fn subsumed_plane_is_merged_away() {
    let mut provider = SimulatedProvider::new();
    let small = provider.add_plane(Vec3::ZERO, Quat::IDENTITY, Vec2::new(1.0, 1.0));
    let large = provider.add_plane(Vec3::ZERO, Quat::IDENTITY, Vec2::new(4.0, 4.0));
    let (mut session, visualizer, scene) = setup(provider);

    session.tick(ScreenOrientation::Portrait);
    session.provider_mut().subsume(small, large).unwrap();
    session.tick(ScreenOrientation::Portrait);

    assert_eq!(visualizer.borrow().len(), 1);
    assert_eq!(scene.borrow().destroyed, vec![1]);
}

#[test]
fn nothing_happens_before_connection() {
    let mut provider = SimulatedProvider::new();
    provider.add_plane(Vec3::ZERO, Quat::IDENTITY, Vec2::new(2.0, 2.0));
    provider.set_connection_state(ConnectionState::Connecting);
    let (mut session, visualizer, _scene) = setup(provider);

    for _ in 0..3 {
        session.tick(ScreenOrientation::Portrait);
    }
    assert!(visualizer.borrow().is_empty());

    session
        .provider_mut()
        .set_connection_state(ConnectionState::Connected);
    session.tick(ScreenOrientation::Portrait);
    assert_eq!(visualizer.borrow().len(), 1);
}

#[test]
fn disabled_visualizer_stops_following() {
    let mut provider = SimulatedProvider::new();
    let a = provider.add_plane(Vec3::ZERO, Quat::IDENTITY, Vec2::new(2.0, 2.0));
    let (mut session, visualizer, scene) = setup(provider);

    session.tick(ScreenOrientation::Portrait);
    visualizer.borrow_mut().disable(session.bus_mut());
    session.provider_mut().remove_plane(a).unwrap();
    session.tick(ScreenOrientation::Portrait);

    assert!(session.tracker().is_empty());
    assert_eq!(visualizer.borrow().len(), 1);
    assert!(scene.borrow().destroyed.is_empty());
}
