//! Clickable buttons and their latched press state.

use curio_api_core::{InteractionEvent, PressPosition, SessionId};

use crate::picking::{PickVolume, Ray};

/// One clickable element of the local scene. Each button addresses a single
/// remote session and carries that peer's display name into the published
/// event; its latched `pressed` state alternates the press position on
/// every click.
#[derive(Debug, Clone)]
pub struct Button {
    pub target: SessionId,
    pub name: String,
    pub volume: PickVolume,
    pub clickable: bool,
    pub pressed: bool,
}

impl Button {
    pub fn new(target: SessionId, name: impl Into<String>, volume: PickVolume) -> Self {
        Self {
            target,
            name: name.into(),
            volume,
            clickable: true,
            pressed: false,
        }
    }

    /// Flip the latched state and emit the event to publish, or `None` when
    /// the button is not clickable.
    pub fn toggle_press(&mut self, now_ms: i64) -> Option<InteractionEvent> {
        if !self.clickable {
            return None;
        }
        self.pressed = !self.pressed;
        Some(InteractionEvent {
            target: self.target.clone(),
            name: self.name.clone(),
            date: now_ms,
            position: if self.pressed {
                PressPosition::Down
            } else {
                PressPosition::Up
            },
        })
    }
}

/// Index of the nearest clickable button hit by `ray`.
pub fn pick(buttons: &[Button], ray: &Ray) -> Option<usize> {
    buttons
        .iter()
        .enumerate()
        .filter(|(_, b)| b.clickable)
        .filter_map(|(i, b)| b.volume.intersect(ray).map(|t| (i, t)))
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(i, _)| i)
}
