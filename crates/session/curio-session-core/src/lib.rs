//! Session wiring for the curio installation.
//!
//! Everything that happens between "the page loaded" and "props are
//! animating": parsing the session config, resolving the local identity,
//! turning the scene manifest into a validated registry and route table,
//! picking buttons under the pointer, and driving the per-frame loop.

pub mod assets;
pub mod button;
pub mod config;
pub mod picking;
pub mod scene;
pub mod session;

pub use assets::{AssetDescriptor, AssetKind, AssetLoader, ModelBank, PreloadedAssets};
pub use button::Button;
pub use config::{PeerRef, SessionConfig};
pub use picking::{pointer_to_ndc, Camera, PickVolume, Ray};
pub use scene::{ButtonSpec, PropKindSpec, PropSpec, ReleaseSpec, SceneManifest};
pub use session::Session;
