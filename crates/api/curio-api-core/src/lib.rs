//! curio-api-core: shared session & interaction-event vocabulary (core, engine-agnostic)

pub mod event;
pub mod key;
pub mod paths;
pub mod session;

pub use event::{InteractionEvent, PressPosition};
pub use key::{KeyParseError, PropKey};
pub use paths::{session_path, CONNECTIONS_ROOT};
pub use session::{SessionId, SessionIdError};
