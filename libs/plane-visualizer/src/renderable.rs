//! # Host Renderables
//!
//! Seam between the visualizer and the host engine. A prototype stamps out
//! one [`Renderable`] per tracked plane.

use plane_mesh::PlaneMesh;

/// Engine object displaying one plane.
pub trait Renderable {
    /// Grid tint color (RGBA).
    fn set_tint(&mut self, color: [f32; 4]);

    /// Texture rotation in degrees.
    fn set_uv_rotation(&mut self, degrees: f32);

    /// Layer of the object's collision geometry, used to filter ray queries.
    fn set_collision_layer(&mut self, layer: u32);

    /// Uploads new geometry to both the render mesh and the collider.
    fn apply_mesh(&mut self, mesh: &PlaneMesh);

    /// Draw-order rank; larger ranks are drawn earlier.
    fn set_draw_order(&mut self, _rank: i32) {}

    /// Releases engine resources. Called once before the object is dropped.
    fn destroy(&mut self) {}
}

/// Template from which plane renderables are instantiated.
pub trait RenderablePrototype {
    type Object: Renderable;

    fn instantiate(&self) -> Self::Object;
}

/// Any `Fn() -> R` closure is a prototype for `R`.
impl<F, R> RenderablePrototype for F
where
    F: Fn() -> R,
    R: Renderable,
{
    type Object = R;

    fn instantiate(&self) -> R {
        self()
    }
}
