//! The core's view of loaded animation data.
//!
//! The asset-loading collaborator resolves descriptors into in-memory model
//! objects; playback only needs the clip list. Models with zero clips are
//! legal and produce inert players.

use serde::{Deserialize, Serialize};

/// One animation clip bound to a model fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipData {
    pub name: String,
    /// Clip length in seconds. A non-positive duration renders the clip
    /// unplayable (the player stays inert).
    pub duration_secs: f32,
}

/// One already-resolved model fragment handed over by the loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadedModel {
    pub id: String,
    #[serde(default)]
    pub clips: Vec<ClipData>,
}

impl LoadedModel {
    /// The main clip: by convention the first in the list, matching how the
    /// scene treats every fragment's "move" animation.
    pub fn primary_clip(&self) -> Option<&ClipData> {
        self.clips.first()
    }
}
