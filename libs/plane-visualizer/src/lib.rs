//! # Plane Visualizer
//!
//! Keeps one host renderable per tracked plane and feeds it feathered meshes.
//!
//! ## Architecture
//!
//! ```text
//! PlaneEventBus → PlaneVisualizer → FeatherMesher → Renderable::apply_mesh
//! ```
//!
//! The host supplies a [`RenderablePrototype`] that instantiates its engine
//! objects; the visualizer never touches engine APIs directly.

pub mod config;
pub mod palette;
pub mod renderable;
pub mod visualizer;
pub mod z_order;

pub use crate::config::VisualizerConfig;
pub use renderable::{Renderable, RenderablePrototype};
pub use visualizer::PlaneVisualizer;
