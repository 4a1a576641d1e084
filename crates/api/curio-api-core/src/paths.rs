//! Remote store paths.
//!
//! Writes are partitioned by the acting session: each session owns exactly
//! one record at `connections/<uid>` and subscribers watch the whole
//! `connections` root.

use crate::session::SessionId;

/// Root path every client subscribes to.
pub const CONNECTIONS_ROOT: &str = "connections";

/// Path the given session writes its own events under.
pub fn session_path(uid: &SessionId) -> String {
    format!("{CONNECTIONS_ROOT}/{uid}")
}
