//! # Config Crate
//!
//! Centralized configuration constants for AR plane tracking and plane mesh
//! generation. Feather distances, the tint palette and collision layers are
//! defined here so the tracker, mesh and visualizer crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{FeatherConfig, FEATHER_LENGTH, FEATHER_SCALE};
//!
//! let feather = FeatherConfig::default();
//! assert_eq!(feather.length, FEATHER_LENGTH);
//! assert_eq!(feather.scale, FEATHER_SCALE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Units**: Distances are meters in provider world space
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
