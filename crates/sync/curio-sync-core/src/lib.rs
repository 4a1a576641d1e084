//! curio-sync-core
//!
//! The distributed half of the installation: the consumption contract for
//! the hosted real-time store, an in-memory reference channel, snapshot
//! decoding, and the event router that fans remote press events out to the
//! local prop registry.

pub mod channel;
pub mod memory;
pub mod router;
pub mod snapshot;

pub use channel::{ChannelError, StateChannel, SubscriptionId};
pub use memory::MemoryChannel;
pub use router::{EventRouter, RouterState};
pub use snapshot::decode_connections;
