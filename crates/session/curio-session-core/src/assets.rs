//! Asset descriptors and the loader seam.
//!
//! Decoding model files is outside this crate; a host hands the session
//! already-resolved [`LoadedModel`]s through the [`AssetLoader`] trait. The
//! descriptor list is still owned here so a missing or misdeclared asset
//! fails at startup instead of leaving a silently inert prop.

use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};

use curio_playback_core::LoadedModel;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Fbx,
    Gltf,
    Obj,
}

/// Declaration of one model file to load before the scene can start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetDescriptor {
    pub id: String,
    pub src: String,
    #[serde(rename = "type")]
    pub kind: AssetKind,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default)]
    pub color: Option<String>,
}

fn default_scale() -> f32 {
    1.0
}

impl AssetDescriptor {
    pub fn new(id: impl Into<String>, src: impl Into<String>, kind: AssetKind) -> Self {
        Self {
            id: id.into(),
            src: src.into(),
            kind,
            material: None,
            scale: default_scale(),
            color: None,
        }
    }
}

/// Resolves descriptors into in-memory models. Implemented by the host
/// renderer; [`PreloadedAssets`] covers tests and headless runs.
pub trait AssetLoader {
    fn load(&mut self, descriptors: &[AssetDescriptor]) -> anyhow::Result<Vec<LoadedModel>>;
}

/// A loader backed by an already-decoded model list, keyed by id.
#[derive(Debug, Default)]
pub struct PreloadedAssets {
    models: Vec<LoadedModel>,
}

impl PreloadedAssets {
    pub fn new(models: Vec<LoadedModel>) -> Self {
        Self { models }
    }
}

impl AssetLoader for PreloadedAssets {
    fn load(&mut self, descriptors: &[AssetDescriptor]) -> anyhow::Result<Vec<LoadedModel>> {
        descriptors
            .iter()
            .map(|desc| {
                self.models
                    .iter()
                    .find(|m| m.id == desc.id)
                    .cloned()
                    .ok_or_else(|| anyhow!("no preloaded model for asset {:?}", desc.id))
            })
            .collect()
    }
}

/// Loaded models indexed for the scene build.
#[derive(Debug)]
pub struct ModelBank {
    models: Vec<LoadedModel>,
}

impl ModelBank {
    pub fn new(models: Vec<LoadedModel>) -> Self {
        Self { models }
    }

    pub fn get(&self, id: &str) -> Option<&LoadedModel> {
        self.models.iter().find(|m| m.id == id)
    }

    pub fn require(&self, id: &str) -> anyhow::Result<&LoadedModel> {
        self.get(id)
            .with_context(|| format!("scene references unknown model {id:?}"))
    }
}
