//! The event router.
//!
//! Subscribes once to the connections root and fans remote press events out
//! to the local prop registry. The channel replays the entire current state
//! immediately on subscribe; treating that replay as fresh input would
//! re-trigger animations at load, so the router starts in `Priming` and
//! discards exactly one snapshot, whatever its content.

use curio_api_core::{PressPosition, SessionId, CONNECTIONS_ROOT};
use curio_playback_core::{PropRegistry, ReleaseAction, RouteTable};

use crate::channel::{ChannelError, StateChannel, SubscriptionId};
use crate::snapshot::decode_connections;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RouterState {
    /// Waiting for the initial replay snapshot.
    Priming,
    /// Dispatching every subsequent snapshot.
    Live,
}

#[derive(Debug)]
pub struct EventRouter {
    local: SessionId,
    routes: RouteTable,
    state: RouterState,
    sub: SubscriptionId,
}

impl EventRouter {
    /// Subscribe to the connections root on `channel`. The routes must
    /// already be validated against the registry this router will drive.
    pub fn new(
        local: SessionId,
        routes: RouteTable,
        channel: &mut dyn StateChannel,
    ) -> Result<Self, ChannelError> {
        let sub = channel.subscribe(CONNECTIONS_ROOT)?;
        Ok(Self {
            local,
            routes,
            state: RouterState::Priming,
            sub,
        })
    }

    pub fn state(&self) -> RouterState {
        self.state
    }

    pub fn local(&self) -> &SessionId {
        &self.local
    }

    /// Drain pending snapshots and apply them to `registry`. Runs between
    /// frame ticks on the same logical thread as `animate_all`, so prop
    /// state is never mutated concurrently.
    pub fn pump(&mut self, channel: &mut dyn StateChannel, registry: &mut PropRegistry) {
        for snapshot in channel.drain(self.sub) {
            self.deliver(&snapshot, registry);
        }
    }

    fn deliver(&mut self, snapshot: &serde_json::Value, registry: &mut PropRegistry) {
        if self.state == RouterState::Priming {
            log::debug!("discarding priming snapshot for {}", self.local);
            self.state = RouterState::Live;
            return;
        }

        for (key, event) in decode_connections(snapshot) {
            if event.target != self.local {
                continue;
            }
            let Some(route) = self.routes.route(key) else {
                continue;
            };
            let Some(prop) = registry.get_mut(route.slot) else {
                continue;
            };
            match event.position {
                PressPosition::Down => {
                    log::debug!("{key}: down -> play slot {}", route.slot);
                    prop.play();
                }
                PressPosition::Up => {
                    if route.on_release == ReleaseAction::Pause && prop.supports_pause() {
                        log::debug!("{key}: up -> pause slot {}", route.slot);
                        prop.pause();
                    }
                }
            }
        }
    }
}
