//! Visualizer configuration built on the shared `config` crate.

use config::constants::{FeatherConfig, DEFAULT_PLANE_LAYER};

/// Settings for a [`PlaneVisualizer`](crate::PlaneVisualizer).
///
/// # Examples
/// ```
/// use plane_visualizer::VisualizerConfig;
/// let cfg = VisualizerConfig::default();
/// assert!(!cfg.clear_on_disable);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualizerConfig {
    /// Feather parameters forwarded to every plane's mesher.
    pub feather: FeatherConfig,
    /// Collision layer assigned to plane renderables.
    pub plane_layer: u32,
    /// Destroy all renderables when the visualizer is disabled.
    pub clear_on_disable: bool,
    /// Re-rank draw order by plane height after each tick.
    pub z_order: bool,
    /// Seed for texture rotations; `None` seeds from system entropy.
    pub uv_seed: Option<u64>,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            feather: FeatherConfig::default(),
            plane_layer: DEFAULT_PLANE_LAYER,
            clear_on_disable: false,
            z_order: false,
            uv_seed: None,
        }
    }
}
