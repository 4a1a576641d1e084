//! The logical-key → slot mapping.
//!
//! A static table built once at startup and validated against the full key
//! set: an unmapped key fails fast instead of silently matching the wrong
//! prop. Release behavior is explicit per route because the installation
//! intentionally ignores "up" for some slots.

use thiserror::Error;

use curio_api_core::PropKey;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("no route for key {0}")]
    MissingKey(PropKey),
    #[error("duplicate route for key {0}")]
    DuplicateKey(PropKey),
    #[error("slot {slot} for key {key} is out of bounds (registry holds {len} props)")]
    SlotOutOfBounds {
        key: PropKey,
        slot: usize,
        len: usize,
    },
    #[error("slot {slot} is mapped by both {first} and {second}")]
    DuplicateSlot {
        slot: usize,
        first: PropKey,
        second: PropKey,
    },
}

/// What a route does with an `"up"` event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReleaseAction {
    /// Forward the release as `pause()`.
    Pause,
    /// Drop the release entirely; the prop runs to its natural end.
    Ignore,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub key: PropKey,
    pub slot: usize,
    pub on_release: ReleaseAction,
}

/// Complete, validated key → slot table.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder { routes: Vec::new() }
    }

    /// Look up the route for a key. A validated table maps every key, but
    /// the lookup stays fallible so callers can drop entries instead of
    /// panicking.
    pub fn route(&self, key: PropKey) -> Option<&Route> {
        self.routes.iter().find(|r| r.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }
}

#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    routes: Vec<Route>,
}

impl RouteTableBuilder {
    pub fn route(mut self, key: PropKey, slot: usize, on_release: ReleaseAction) -> Self {
        self.routes.push(Route {
            key,
            slot,
            on_release,
        });
        self
    }

    /// Validate completeness against `PropKey::ALL` and bounds against the
    /// registry size.
    pub fn build(self, registry_len: usize) -> Result<RouteTable, RouteError> {
        for key in PropKey::ALL {
            let mut hits = self.routes.iter().filter(|r| r.key == key);
            let first = hits.next().ok_or(RouteError::MissingKey(key))?;
            if hits.next().is_some() {
                return Err(RouteError::DuplicateKey(key));
            }
            if first.slot >= registry_len {
                return Err(RouteError::SlotOutOfBounds {
                    key,
                    slot: first.slot,
                    len: registry_len,
                });
            }
        }
        for (i, a) in self.routes.iter().enumerate() {
            if let Some(b) = self.routes[i + 1..].iter().find(|b| b.slot == a.slot) {
                return Err(RouteError::DuplicateSlot {
                    slot: a.slot,
                    first: a.key,
                    second: b.key,
                });
            }
        }
        Ok(RouteTable {
            routes: self.routes,
        })
    }
}
