//! curio-playback-core (engine-agnostic)
//!
//! Playback state for the animated props of the shared scene: per-clip
//! players with explicit play/pause/toggle semantics, the four concrete
//! prop behaviors, and the registry the per-frame loop fans `animate` out
//! through. Rendering, materials and scene-graph concerns live with the
//! host; this crate only owns clocks and transition state.

pub mod clip;
pub mod player;
pub mod prop;
pub mod registry;
pub mod routes;

pub use clip::{ClipData, LoadedModel};
pub use player::{ClipPlayer, PlayMode};
pub use prop::Prop;
pub use registry::PropRegistry;
pub use routes::{ReleaseAction, Route, RouteError, RouteTable};
