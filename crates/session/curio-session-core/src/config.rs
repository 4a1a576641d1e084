//! Per-installation session configuration.
//!
//! The config file is authored by hand for each deployment, which is why
//! the field names are upper-case and why a blank `UID` has to be tolerated:
//! a freshly copied config ships with the field empty and the session falls
//! back to a generated identity rather than refusing to start.

use anyhow::Context;
use serde::Deserialize;
use uuid::Uuid;

use curio_api_core::SessionId;

/// One remote station this session can trigger.
#[derive(Debug, Clone, Deserialize)]
pub struct PeerRef {
    pub uid: SessionId,
    pub name: String,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(rename = "UID")]
    pub uid: String,
    #[serde(rename = "NAME")]
    pub name: String,
    #[serde(rename = "OTHERS", default)]
    pub others: Vec<PeerRef>,
}

impl SessionConfig {
    pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("parsing session config")
    }

    /// Resolve the local session id: an explicit override wins, then the
    /// configured `UID`, then a generated v4 UUID.
    pub fn resolve_uid(&self, override_uid: Option<&str>) -> anyhow::Result<SessionId> {
        if let Some(raw) = override_uid {
            if !raw.trim().is_empty() {
                return SessionId::parse(raw).context("uid override");
            }
        }
        if !self.uid.trim().is_empty() {
            return SessionId::parse(&self.uid).context("configured UID");
        }
        let generated = Uuid::new_v4().to_string();
        log::info!("config has no UID, generated {generated}");
        SessionId::parse(&generated).context("generated uid")
    }
}

/// Extract a `uid` override from a raw URL query string such as
/// `"uid=pink&debug=1"`. The leading `?` may be present or not.
pub fn uid_from_query(query: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == "uid")
        .map(|(_, v)| v.to_owned())
        .filter(|v| !v.is_empty())
}
