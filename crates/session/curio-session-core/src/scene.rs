//! The scene manifest.
//!
//! A declarative description of the installation: which props exist, which
//! models animate them, how each key maps to a slot, and where the clickable
//! buttons sit. The manifest is data so a deployment can re-skin the scene
//! without touching code; everything it references is validated when the
//! session boots.

use anyhow::{bail, Context};
use serde::Deserialize;

use curio_api_core::PropKey;
use curio_playback_core::{Prop, PropRegistry, ReleaseAction, RouteTable};

use crate::assets::ModelBank;
use crate::picking::PickVolume;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropKindSpec {
    SingleShot,
    SingleShotGroup,
    DualPausable,
    LoopingPair,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseSpec {
    Pause,
    Ignore,
}

impl From<ReleaseSpec> for ReleaseAction {
    fn from(spec: ReleaseSpec) -> Self {
        match spec {
            ReleaseSpec::Pause => ReleaseAction::Pause,
            ReleaseSpec::Ignore => ReleaseAction::Ignore,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PropSpec {
    pub key: PropKey,
    pub kind: PropKindSpec,
    pub assets: Vec<String>,
    pub on_release: ReleaseSpec,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ButtonSpec {
    pub asset: String,
    #[serde(default = "default_clickable")]
    pub clickable: bool,
    pub volume: PickVolume,
}

fn default_clickable() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct SceneManifest {
    pub props: Vec<PropSpec>,
    pub buttons: Vec<ButtonSpec>,
}

impl SceneManifest {
    pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("parsing scene manifest")
    }

    /// Instantiate the registry and route table. Slots follow manifest
    /// order; every referenced model must exist in `bank` and every kind's
    /// arity is checked here so a bad manifest fails the boot.
    pub fn build(&self, bank: &ModelBank) -> anyhow::Result<(PropRegistry, RouteTable)> {
        let mut registry = PropRegistry::new();
        let mut routes = RouteTable::builder();
        for spec in &self.props {
            let models = spec
                .assets
                .iter()
                .map(|id| bank.require(id).cloned())
                .collect::<anyhow::Result<Vec<_>>>()
                .with_context(|| format!("building prop {}", spec.key))?;
            let prop = match spec.kind {
                PropKindSpec::SingleShot => match models.as_slice() {
                    [model] => Prop::single_shot(model),
                    _ => bail!(
                        "prop {} is single-shot but lists {} assets",
                        spec.key,
                        models.len()
                    ),
                },
                PropKindSpec::SingleShotGroup => Prop::single_shot_group(models.iter()),
                PropKindSpec::DualPausable => match models.as_slice() {
                    [primary, accessory] => Prop::dual_pausable(primary, accessory),
                    _ => bail!(
                        "prop {} is dual-pausable but lists {} assets",
                        spec.key,
                        models.len()
                    ),
                },
                PropKindSpec::LoopingPair => Prop::looping_pair(models.iter()),
            };
            let slot = registry.push(prop);
            routes = routes.route(spec.key, slot, spec.on_release.into());
        }
        let routes = routes
            .build(registry.len())
            .context("validating scene routes")?;
        Ok((registry, routes))
    }
}
