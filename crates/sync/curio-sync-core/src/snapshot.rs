//! Snapshot decoding.
//!
//! The channel delivers the complete current value set at the connections
//! root, not a delta: a JSON object keyed by acting-session UID. In this
//! installation the acting UIDs are the logical color keys, so the entry
//! key doubles as the route key. Unknown keys and malformed entries are
//! dropped, never surfaced as errors.

use curio_api_core::{InteractionEvent, PropKey};

/// Decode one root snapshot into routed entries, in object order.
pub fn decode_connections(snapshot: &serde_json::Value) -> Vec<(PropKey, InteractionEvent)> {
    let Some(map) = snapshot.as_object() else {
        return Vec::new();
    };
    let mut entries = Vec::with_capacity(map.len());
    for (raw_key, raw_entry) in map {
        let Ok(key) = raw_key.parse::<PropKey>() else {
            log::debug!("skipping entry with unknown key {raw_key:?}");
            continue;
        };
        let Some(event) = InteractionEvent::from_json(raw_entry) else {
            log::debug!("skipping malformed entry for key {key}");
            continue;
        };
        entries.push((key, event));
    }
    entries
}
