//! # AR Session
//!
//! Per-frame driver owning the provider, the tracker and the event bus.
//!
//! The provider's connection handshake completes asynchronously outside this
//! crate. The session polls [`ArProvider::connection_state`] on each tick and
//! only starts diffing planes once the provider reports `Connected`.

use crate::display::{DisplayTransform, ScreenOrientation};
use crate::events::PlaneEventBus;
use crate::provider::{ArProvider, ConnectionState};
use crate::tracker::{PlaneTracker, TrackerConfig};

/// Lifecycle of an [`ArSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Stopped,
    /// Waiting for the provider handshake.
    Connecting,
    Running,
    /// The provider handshake failed; `start` may be called again.
    Failed,
}

/// Host-facing entry point: call [`ArSession::tick`] once per frame.
#[derive(Debug)]
pub struct ArSession<P> {
    provider: P,
    tracker: PlaneTracker,
    bus: PlaneEventBus,
    display: DisplayTransform,
    state: SessionState,
}

impl<P: ArProvider> ArSession<P> {
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, TrackerConfig::default())
    }

    pub fn with_config(provider: P, config: TrackerConfig) -> Self {
        Self {
            provider,
            tracker: PlaneTracker::new(config),
            bus: PlaneEventBus::new(),
            display: DisplayTransform::new(),
            state: SessionState::Stopped,
        }
    }

    /// Begins waiting for the provider connection. No-op while running.
    pub fn start(&mut self) {
        if self.state == SessionState::Running {
            return;
        }
        tracing::info!("AR session connecting");
        self.state = SessionState::Connecting;
    }

    /// Stops tracking. Known planes are kept until [`Self::clear_planes`].
    pub fn stop(&mut self) {
        if self.state != SessionState::Stopped {
            tracing::info!(planes = self.tracker.len(), "AR session stopped");
        }
        self.state = SessionState::Stopped;
    }

    /// Advances one frame. Returns true when the tracker ran this tick.
    pub fn tick(&mut self, orientation: ScreenOrientation) -> bool {
        match self.state {
            SessionState::Stopped | SessionState::Failed => return false,
            SessionState::Connecting => match self.provider.connection_state() {
                ConnectionState::Connecting => return false,
                ConnectionState::Failed => {
                    tracing::warn!("AR provider failed to connect");
                    self.state = SessionState::Failed;
                    return false;
                }
                ConnectionState::Connected => {
                    tracing::info!("AR session running");
                    self.state = SessionState::Running;
                }
            },
            SessionState::Running => {}
        }

        self.display.update(orientation);
        self.tracker.tick(&self.provider, &self.bus)
    }

    /// Reports every known plane as removed and forgets it.
    pub fn clear_planes(&mut self) {
        self.tracker.clear(&self.bus);
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn tracker(&self) -> &PlaneTracker {
        &self.tracker
    }

    pub fn bus(&self) -> &PlaneEventBus {
        &self.bus
    }

    /// Mutable access for attaching and detaching listeners between ticks.
    pub fn bus_mut(&mut self) -> &mut PlaneEventBus {
        &mut self.bus
    }

    pub fn display(&self) -> &DisplayTransform {
        &self.display
    }
}
