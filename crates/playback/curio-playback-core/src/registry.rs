//! The ordered prop registry.
//!
//! Slots are assigned in registration order and referenced by the route
//! table; the per-frame loop fans `animate` out in that same order, so
//! within one tick the update sequence is deterministic.

use crate::prop::Prop;

#[derive(Debug, Default)]
pub struct PropRegistry {
    props: Vec<Prop>,
}

impl PropRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a prop, returning its slot index.
    pub fn push(&mut self, prop: Prop) -> usize {
        self.props.push(prop);
        self.props.len() - 1
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn get(&self, slot: usize) -> Option<&Prop> {
        self.props.get(slot)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Prop> {
        self.props.get_mut(slot)
    }

    /// Advance every prop's clocks, in registration order.
    pub fn animate_all(&mut self, dt: f32) {
        for prop in &mut self.props {
            prop.animate(dt);
        }
    }
}
