//! # Plane Visualizer
//!
//! One-to-one registry from [`PlaneId`] to host renderables, driven by plane
//! events.
//!
//! - **Added / Updated**: instantiate from the prototype if needed, then
//!   regenerate the feathered mesh (cached per plane)
//! - **Removed**: destroy the renderable and forget the id
//!
//! Without a prototype, added and updated planes are ignored.

use std::cell::RefCell;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::rc::Rc;

use ar_interface::{BoundedPlane, PlaneEventBus, PlaneId, PlaneListener, SubscriptionId};
use config::constants::MAX_UV_ROTATION_DEGREES;
use plane_mesh::{FeatherMesher, PlaneMesh};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::VisualizerConfig;
use crate::palette::tint_for;
use crate::renderable::{Renderable, RenderablePrototype};
use crate::z_order::draw_order_ranks;

/// Renderable plus the per-plane mesh cache.
#[derive(Debug)]
struct PlaneVisual<R> {
    object: R,
    mesher: FeatherMesher,
    height: f32,
}

/// Registry of plane renderables.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use ar_interface::{ArSession, ScreenOrientation, SimulatedProvider};
/// use glam::{Quat, Vec2, Vec3};
/// use plane_mesh::PlaneMesh;
/// use plane_visualizer::{PlaneVisualizer, Renderable, VisualizerConfig};
///
/// #[derive(Default)]
/// struct Grid {
///     triangles: usize,
/// }
///
/// impl Renderable for Grid {
///     fn set_tint(&mut self, _color: [f32; 4]) {}
///     fn set_uv_rotation(&mut self, _degrees: f32) {}
///     fn set_collision_layer(&mut self, _layer: u32) {}
///     fn apply_mesh(&mut self, mesh: &PlaneMesh) {
///         self.triangles = mesh.triangle_count();
///     }
/// }
///
/// let mut provider = SimulatedProvider::new();
/// provider.add_plane(Vec3::ZERO, Quat::IDENTITY, Vec2::new(2.0, 2.0));
/// let mut session = ArSession::new(provider);
///
/// let visualizer = Rc::new(RefCell::new(PlaneVisualizer::new(
///     VisualizerConfig::default(),
///     Some(Grid::default),
/// )));
/// PlaneVisualizer::enable(&visualizer, session.bus_mut());
///
/// session.start();
/// session.tick(ScreenOrientation::Portrait);
///
/// let visualizer = visualizer.borrow();
/// assert_eq!(visualizer.len(), 1);
/// let (_, grid) = visualizer.renderables().next().unwrap();
/// assert_eq!(grid.triangles, 10);
/// ```
#[derive(Debug)]
pub struct PlaneVisualizer<P: RenderablePrototype> {
    config: VisualizerConfig,
    prototype: Option<P>,
    planes: HashMap<PlaneId, PlaneVisual<P::Object>>,
    rng: StdRng,
    subscription: Option<SubscriptionId>,
    order_dirty: bool,
}

impl<P: RenderablePrototype> PlaneVisualizer<P> {
    pub fn new(config: VisualizerConfig, prototype: Option<P>) -> Self {
        let rng = match config.uv_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            prototype,
            planes: HashMap::new(),
            rng,
            subscription: None,
            order_dirty: false,
        }
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// Replaces the prototype used for planes created from now on.
    pub fn set_prototype(&mut self, prototype: Option<P>) {
        self.prototype = prototype;
    }

    /// Subscribes the visualizer to `bus`. No-op when already enabled.
    pub fn enable(visualizer: &Rc<RefCell<Self>>, bus: &mut PlaneEventBus)
    where
        P: 'static,
        P::Object: 'static,
    {
        if visualizer.borrow().subscription.is_some() {
            return;
        }
        let id = bus.subscribe(visualizer.clone());
        visualizer.borrow_mut().subscription = Some(id);
        tracing::debug!(planes = visualizer.borrow().planes.len(), "Plane visualizer enabled");
    }

    /// Unsubscribes from `bus`, destroying all renderables if configured to.
    pub fn disable(&mut self, bus: &mut PlaneEventBus) {
        if let Some(id) = self.subscription.take() {
            bus.unsubscribe(id);
        }
        if self.config.clear_on_disable {
            self.clear();
        }
        tracing::debug!(planes = self.planes.len(), "Plane visualizer disabled");
    }

    pub fn is_enabled(&self) -> bool {
        self.subscription.is_some()
    }

    /// Destroys every renderable and forgets all planes.
    pub fn clear(&mut self) {
        for (_, mut visual) in self.planes.drain() {
            visual.object.destroy();
        }
        self.order_dirty = false;
    }

    pub fn len(&self) -> usize {
        self.planes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    pub fn get(&self, id: PlaneId) -> Option<&P::Object> {
        self.planes.get(&id).map(|visual| &visual.object)
    }

    /// The last mesh generated for the plane.
    pub fn mesh(&self, id: PlaneId) -> Option<&PlaneMesh> {
        self.planes.get(&id).map(|visual| visual.mesher.mesh())
    }

    /// How many times the plane's mesh has been regenerated.
    pub fn rebuild_count(&self, id: PlaneId) -> Option<u64> {
        self.planes.get(&id).map(|visual| visual.mesher.rebuild_count())
    }

    pub fn renderables(&self) -> impl Iterator<Item = (PlaneId, &P::Object)> {
        self.planes.iter().map(|(id, visual)| (*id, &visual.object))
    }

    /// Ranks every renderable by plane height; see [`draw_order_ranks`].
    pub fn apply_draw_order(&mut self) {
        let heights: Vec<(PlaneId, f32)> = self
            .planes
            .iter()
            .map(|(id, visual)| (*id, visual.height))
            .collect();

        for (id, rank) in draw_order_ranks(&heights) {
            if let Some(visual) = self.planes.get_mut(&id) {
                visual.object.set_draw_order(rank);
            }
        }
        self.order_dirty = false;
    }

    fn create_or_update(&mut self, plane: &BoundedPlane) {
        let Some(prototype) = &self.prototype else {
            tracing::debug!(id = %plane.id, "No plane prototype configured, ignoring plane");
            return;
        };

        let population = self.planes.len();
        let visual = match self.planes.entry(plane.id) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let mut object = prototype.instantiate();
                object.set_collision_layer(self.config.plane_layer);
                object.set_tint(tint_for(population + 1));
                object.set_uv_rotation(self.rng.gen_range(0.0..MAX_UV_ROTATION_DEGREES));

                tracing::debug!(id = %plane.id, population = population + 1, "Plane renderable created");
                self.order_dirty = true;
                entry.insert(PlaneVisual {
                    object,
                    mesher: FeatherMesher::new(self.config.feather),
                    height: plane.center.y,
                })
            }
        };

        if visual.height != plane.center.y {
            visual.height = plane.center.y;
            self.order_dirty = true;
        }

        match visual.mesher.update(&plane.boundary, plane.center) {
            Ok(true) => visual.object.apply_mesh(visual.mesher.mesh()),
            Ok(false) => {}
            Err(err) => {
                tracing::warn!(id = %plane.id, error = %err, "Skipping plane mesh update");
            }
        }
    }

    fn remove(&mut self, plane: &BoundedPlane) {
        if let Some(mut visual) = self.planes.remove(&plane.id) {
            visual.object.destroy();
            self.order_dirty = true;
            tracing::debug!(id = %plane.id, "Plane renderable destroyed");
        }
    }
}

impl<P: RenderablePrototype> PlaneListener for PlaneVisualizer<P> {
    fn on_plane_added(&mut self, plane: &BoundedPlane) {
        self.create_or_update(plane);
    }

    fn on_plane_updated(&mut self, plane: &BoundedPlane) {
        self.create_or_update(plane);
    }

    fn on_plane_removed(&mut self, plane: &BoundedPlane) {
        self.remove(plane);
    }

    fn on_tick_complete(&mut self) {
        if self.config.z_order && self.order_dirty {
            self.apply_draw_order();
        }
    }
}
