//! Logical keys.
//!
//! Each interactive prop in the shared scene is addressed by one symbolic
//! color name. The set is closed: the route table is checked against
//! `PropKey::ALL` at startup, and unknown strings arriving over the wire are
//! treated as "ignore this entry" by the router rather than an error.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown prop key {0:?}")]
pub struct KeyParseError(pub String);

/// Symbolic name identifying which prop an event concerns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropKey {
    Pink,
    Orange,
    Green,
    Blue,
    Red,
    Black,
}

impl PropKey {
    /// Every key, in canonical order. Route-table completeness is validated
    /// against this set.
    pub const ALL: [PropKey; 6] = [
        PropKey::Pink,
        PropKey::Orange,
        PropKey::Green,
        PropKey::Blue,
        PropKey::Red,
        PropKey::Black,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropKey::Pink => "pink",
            PropKey::Orange => "orange",
            PropKey::Green => "green",
            PropKey::Blue => "blue",
            PropKey::Red => "red",
            PropKey::Black => "black",
        }
    }
}

impl fmt::Display for PropKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropKey {
    type Err = KeyParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| KeyParseError(s.to_string()))
    }
}
