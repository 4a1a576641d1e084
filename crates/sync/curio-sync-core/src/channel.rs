//! The remote state channel, as the core consumes it.
//!
//! The hosted store is a thin key-value real-time primitive. The core never
//! assumes ordering stronger than "each subscriber eventually observes the
//! latest value" and must tolerate duplicate delivery of the same logical
//! snapshot; everything else (idempotent overwrite, notify-on-change with
//! full snapshots, tombstone clear) is part of this contract.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("invalid channel path {0:?}")]
    InvalidPath(String),
    /// Connection or delivery failure surfaced by a hosted-store adapter.
    /// [`crate::MemoryChannel`] never produces it.
    #[error("channel transport error: {0}")]
    Transport(String),
}

/// Handle for one subscription on one path.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u32);

/// Consumption contract for the remote store.
///
/// Notifications are not callbacks: implementations queue full snapshots
/// per subscription and the single cooperative loop drains them between
/// frame ticks, so channel delivery never races `animate`.
pub trait StateChannel {
    /// Idempotent overwrite at `path`: last-write-wins, no merge. Writing
    /// JSON `null` is equivalent to `clear`.
    fn write(&mut self, path: &str, value: serde_json::Value) -> Result<(), ChannelError>;

    /// Tombstone the value at `path`.
    fn clear(&mut self, path: &str) -> Result<(), ChannelError> {
        self.write(path, serde_json::Value::Null)
    }

    /// Subscribe to `path`, validated by the same rules as `write`. The
    /// current full snapshot is queued for delivery immediately; every
    /// later write under `path` or its descendants queues a fresh full
    /// snapshot.
    fn subscribe(&mut self, path: &str) -> Result<SubscriptionId, ChannelError>;

    /// Pending snapshots for `sub`, in arrival order. Empty when the
    /// channel is stalled or nothing changed; that is a non-fatal
    /// condition and the scene simply holds its last known state.
    fn drain(&mut self, sub: SubscriptionId) -> Vec<serde_json::Value>;
}
