//! The per-station session.
//!
//! Owns the prop registry, the event router, and the local buttons, and
//! exposes the three entry points a host loops over: pointer clicks, the
//! per-frame step, and teardown. All remote effects flow through the state
//! channel; the session never mutates another station's props directly.

use anyhow::{bail, Context};
use glam::Vec2;

use curio_api_core::{session_path, SessionId};
use curio_playback_core::PropRegistry;
use curio_sync_core::{EventRouter, StateChannel};

use crate::assets::{AssetDescriptor, AssetLoader, ModelBank};
use crate::button::{pick, Button};
use crate::config::SessionConfig;
use crate::picking::Camera;
use crate::scene::SceneManifest;

#[derive(Debug)]
pub struct Session {
    id: SessionId,
    name: String,
    camera: Camera,
    registry: PropRegistry,
    router: EventRouter,
    buttons: Vec<Button>,
}

impl Session {
    /// Boot a session: resolve the identity, clear any stale state left
    /// under our path by a previous run, load assets, build the scene, and
    /// subscribe the router.
    ///
    /// Buttons pair positionally with `config.others`: button N addresses
    /// the Nth remote station.
    pub fn bootstrap(
        config: &SessionConfig,
        uid_override: Option<&str>,
        loader: &mut dyn AssetLoader,
        descriptors: &[AssetDescriptor],
        manifest: &SceneManifest,
        camera: Camera,
        channel: &mut dyn StateChannel,
    ) -> anyhow::Result<Self> {
        let id = config.resolve_uid(uid_override)?;
        channel
            .clear(&session_path(&id))
            .context("clearing stale session state")?;

        let models = loader.load(descriptors).context("loading scene assets")?;
        let bank = ModelBank::new(models);
        let (registry, routes) = manifest.build(&bank)?;

        if manifest.buttons.len() > config.others.len() {
            bail!(
                "scene declares {} buttons but config lists {} peers",
                manifest.buttons.len(),
                config.others.len()
            );
        }
        let buttons = manifest
            .buttons
            .iter()
            .zip(&config.others)
            .map(|(spec, peer)| {
                bank.require(&spec.asset)?;
                let mut button =
                    Button::new(peer.uid.clone(), peer.name.clone(), spec.volume.clone());
                button.clickable = spec.clickable;
                Ok(button)
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let router = EventRouter::new(id.clone(), routes, channel)
            .context("subscribing to the connections root")?;
        log::info!(
            "session {id} ({}) up: {} props, {} buttons",
            config.name,
            registry.len(),
            buttons.len()
        );
        Ok(Self {
            id,
            name: config.name.clone(),
            camera,
            registry,
            router,
            buttons,
        })
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn registry(&self) -> &PropRegistry {
        &self.registry
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Handle a pointer click in NDC. Picks the nearest clickable button,
    /// toggles it, and publishes the resulting event under our own path.
    /// Returns whether a button was hit.
    pub fn handle_pointer_click(
        &mut self,
        ndc: Vec2,
        now_ms: i64,
        channel: &mut dyn StateChannel,
    ) -> anyhow::Result<bool> {
        let ray = self.camera.ray_from_pointer(ndc);
        let Some(index) = pick(&self.buttons, &ray) else {
            return Ok(false);
        };
        let Some(event) = self.buttons[index].toggle_press(now_ms) else {
            return Ok(false);
        };
        log::debug!("{}: publishing {:?} for {}", self.id, event.position, event.target);
        channel
            .write(&session_path(&self.id), event.to_json())
            .context("publishing press event")?;
        Ok(true)
    }

    /// One frame: apply pending remote snapshots, then advance the clocks.
    /// Ordering matters; a press and the frame it lands on must observe the
    /// same prop state.
    pub fn step(&mut self, dt: f32, channel: &mut dyn StateChannel) {
        self.router.pump(channel, &mut self.registry);
        self.registry.animate_all(dt);
    }

    /// Remove our entry from the shared state so peers stop seeing the
    /// last press after this station goes away. Failure is logged, not
    /// fatal; teardown runs on the way out.
    pub fn teardown(&mut self, channel: &mut dyn StateChannel) {
        if let Err(err) = channel.clear(&session_path(&self.id)) {
            log::warn!("session {} teardown failed: {err}", self.id);
        }
    }
}
