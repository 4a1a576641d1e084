//! Interaction events.
//!
//! One event records one press transition performed by an acting session.
//! It is written wholesale at the acting session's own path (the previous
//! event at that path is overwritten, not merged) and the embedded `target`
//! names the session whose scene should respond.

use serde::{Deserialize, Serialize};

use crate::session::SessionId;

/// Press state of a prop: `"down"` while held, `"up"` when released.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PressPosition {
    Up,
    Down,
}

impl PressPosition {
    /// The opposite transition.
    pub fn flipped(self) -> Self {
        match self {
            PressPosition::Up => PressPosition::Down,
            PressPosition::Down => PressPosition::Up,
        }
    }
}

/// The remote store record: `{ target, name, date, position }`.
/// `date` is milliseconds since the Unix epoch as recorded by the acting
/// session; it carries no ordering guarantee across clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionEvent {
    pub target: SessionId,
    pub name: String,
    pub date: i64,
    pub position: PressPosition,
}

impl InteractionEvent {
    /// Tolerant decode of one snapshot entry. Entries missing `target` or
    /// `position`, or otherwise malformed, yield `None`; the router treats
    /// that as a silent skip.
    pub fn from_json(value: &serde_json::Value) -> Option<InteractionEvent> {
        serde_json::from_value(value.clone()).ok()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "target": self.target,
            "name": self.name,
            "date": self.date,
            "position": self.position,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_format_matches_remote_store_record() {
        let ev = InteractionEvent {
            target: "blue".parse().unwrap(),
            name: "nyria-jonathan".into(),
            date: 1_724_400_000_000,
            position: PressPosition::Down,
        };
        assert_eq!(
            ev.to_json(),
            json!({
                "target": "blue",
                "name": "nyria-jonathan",
                "date": 1_724_400_000_000_i64,
                "position": "down",
            })
        );
    }

    #[test]
    fn from_json_round_trips() {
        let ev = InteractionEvent {
            target: "a".parse().unwrap(),
            name: "n".into(),
            date: 42,
            position: PressPosition::Up,
        };
        let back = InteractionEvent::from_json(&ev.to_json()).unwrap();
        assert_eq!(back, ev);
    }

    #[test]
    fn malformed_entries_decode_to_none() {
        assert!(InteractionEvent::from_json(&json!({"name": "x"})).is_none());
        assert!(InteractionEvent::from_json(&json!({
            "target": "a", "name": "x", "date": 1, "position": "sideways"
        }))
        .is_none());
        assert!(InteractionEvent::from_json(&json!(null)).is_none());
        assert!(InteractionEvent::from_json(&json!("down")).is_none());
    }

    #[test]
    fn flipped_inverts_position() {
        assert_eq!(PressPosition::Up.flipped(), PressPosition::Down);
        assert_eq!(PressPosition::Down.flipped(), PressPosition::Up);
    }
}
