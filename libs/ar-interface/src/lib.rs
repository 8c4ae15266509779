//! # AR Interface
//!
//! Provider-independent plane tracking for mobile AR.
//!
//! ## Architecture
//!
//! ```text
//! ArProvider → PlaneTracker (diff) → PlaneEventBus → listeners
//! ```
//!
//! A host calls [`ArSession::tick`] once per frame. Until the provider reports
//! a connected session nothing is tracked; afterwards every tick diffs the
//! provider's active planes against the known set and publishes the result.
//!
//! ## Usage
//!
//! ```rust
//! use ar_interface::{ArSession, ScreenOrientation, SimulatedProvider};
//! use glam::{Quat, Vec2, Vec3};
//!
//! let mut provider = SimulatedProvider::new();
//! provider.add_plane(Vec3::ZERO, Quat::IDENTITY, Vec2::new(2.0, 2.0));
//!
//! let mut session = ArSession::new(provider);
//! session.start();
//! session.tick(ScreenOrientation::Portrait);
//! assert_eq!(session.tracker().len(), 1);
//! ```

pub mod display;
pub mod error;
pub mod events;
pub mod plane;
pub mod provider;
pub mod session;
pub mod simulated;
pub mod tracker;

pub use display::{DisplayTransform, ScreenOrientation};
pub use error::ArError;
pub use events::{PlaneEvent, PlaneEventBus, PlaneListener, SubscriptionId};
pub use plane::{BoundedPlane, PlaneEquation, PlaneHandle, PlaneId, Pose};
pub use provider::{ArProvider, CameraImage, ConnectionState};
pub use session::{ArSession, SessionState};
pub use simulated::SimulatedProvider;
pub use tracker::{PlaneTracker, TrackerConfig, UpdatePolicy};
