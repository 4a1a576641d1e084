//! In-memory reference implementation of the channel contract.
//!
//! Backed by a nested JSON tree. Used by the integration tests (several
//! sessions sharing one channel) and usable as an offline single-process
//! channel. A stalled remote is modelled by simply never draining.

use hashbrown::HashMap;
use serde_json::Value;
use std::collections::VecDeque;

use crate::channel::{ChannelError, StateChannel, SubscriptionId};

#[derive(Debug)]
struct Subscriber {
    path: Vec<String>,
    queue: VecDeque<Value>,
}

#[derive(Debug, Default)]
pub struct MemoryChannel {
    root: Value,
    subscribers: HashMap<SubscriptionId, Subscriber>,
    next_sub: u32,
}

impl MemoryChannel {
    pub fn new() -> Self {
        Self {
            root: Value::Null,
            subscribers: HashMap::new(),
            next_sub: 0,
        }
    }

    fn split(path: &str) -> Result<Vec<String>, ChannelError> {
        let segments: Vec<String> = path.split('/').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(ChannelError::InvalidPath(path.to_string()));
        }
        Ok(segments)
    }

    fn snapshot_at(&self, segments: &[String]) -> Value {
        let mut node = &self.root;
        for seg in segments {
            match node.get(seg) {
                Some(child) => node = child,
                None => return Value::Null,
            }
        }
        node.clone()
    }

    fn set_at(&mut self, segments: &[String], value: Value) {
        if value.is_null() {
            // Tombstone: remove the leaf if present.
            let Some((leaf, parents)) = segments.split_last() else {
                self.root = Value::Null;
                return;
            };
            let mut node = &mut self.root;
            for seg in parents {
                match node.get_mut(seg) {
                    Some(child) => node = child,
                    None => return,
                }
            }
            if let Some(map) = node.as_object_mut() {
                map.remove(leaf);
            }
            return;
        }

        let mut node = &mut self.root;
        for seg in segments {
            if !node.is_object() {
                *node = Value::Object(serde_json::Map::new());
            }
            let Some(map) = node.as_object_mut() else {
                return;
            };
            node = map.entry(seg.clone()).or_insert(Value::Null);
        }
        *node = value;
    }

    /// A write at `written` concerns a subscription at `watched` when
    /// either path is a segment-wise prefix of the other.
    fn related(watched: &[String], written: &[String]) -> bool {
        let n = watched.len().min(written.len());
        watched[..n] == written[..n]
    }

    fn notify(&mut self, written: &[String]) {
        let snapshots: Vec<(SubscriptionId, Value)> = self
            .subscribers
            .iter()
            .filter(|(_, sub)| Self::related(&sub.path, written))
            .map(|(id, sub)| (*id, self.snapshot_at(&sub.path)))
            .collect();
        for (id, snap) in snapshots {
            if let Some(sub) = self.subscribers.get_mut(&id) {
                sub.queue.push_back(snap);
            }
        }
    }
}

impl StateChannel for MemoryChannel {
    fn write(&mut self, path: &str, value: Value) -> Result<(), ChannelError> {
        let segments = Self::split(path)?;
        self.set_at(&segments, value);
        self.notify(&segments);
        Ok(())
    }

    fn subscribe(&mut self, path: &str) -> Result<SubscriptionId, ChannelError> {
        let segments = Self::split(path)?;
        let id = SubscriptionId(self.next_sub);
        self.next_sub = self.next_sub.wrapping_add(1);
        let initial = self.snapshot_at(&segments);
        self.subscribers.insert(
            id,
            Subscriber {
                path: segments,
                queue: VecDeque::from([initial]),
            },
        );
        Ok(id)
    }

    fn drain(&mut self, sub: SubscriptionId) -> Vec<Value> {
        match self.subscribers.get_mut(&sub) {
            Some(sub) => sub.queue.drain(..).collect(),
            None => Vec::new(),
        }
    }
}
