//! Session identity.
//!
//! A `SessionId` names one viewer session. It is assigned once at session
//! start (query override, config default, or generated) and is immutable for
//! the session's lifetime. It doubles as the publisher key (the path segment
//! this session writes its own events under) and, embedded inside each
//! event, as the target key naming which remote scene should react.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionIdError {
    #[error("session id must not be empty")]
    Empty,
    #[error("session id must not contain whitespace: {0:?}")]
    Whitespace(String),
    #[error("session id must not contain '/': {0:?}")]
    Slash(String),
}

/// Unique per-viewer identity string partitioning remote writes and
/// disambiguating event targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Validate and construct. The id becomes a path segment under the
    /// connections root, so `/` and whitespace are rejected.
    pub fn parse(s: &str) -> Result<Self, SessionIdError> {
        if s.is_empty() {
            return Err(SessionIdError::Empty);
        }
        if s.chars().any(char::is_whitespace) {
            return Err(SessionIdError::Whitespace(s.to_string()));
        }
        if s.contains('/') {
            return Err(SessionIdError::Slash(s.to_string()));
        }
        Ok(SessionId(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SessionId {
    type Err = SessionIdError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SessionId::parse(s)
    }
}

// Serde support: serialize as string, deserialize from string
impl Serialize for SessionId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SessionId {
    fn deserialize<D>(deserializer: D) -> Result<SessionId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SessionId::parse(&s).map_err(de::Error::custom)
    }
}
