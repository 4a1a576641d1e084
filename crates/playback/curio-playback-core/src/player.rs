//! Per-clip playback state.
//!
//! A `ClipPlayer` owns one clip action and a monotonically-advancing local
//! clock. `advance` is the only method that consumes wall-clock time; every
//! other method is a pure state transition, so callers (the router, the
//! interaction detector) never depend on timing.

use serde::{Deserialize, Serialize};

use crate::clip::{ClipData, LoadedModel};

/// How the cursor maps onto the clip once it passes the end.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayMode {
    /// Play through once and auto-stop with the cursor clamped at the end.
    Once,
    /// Wrap back to zero.
    Repeat,
    /// Reflect back and forth.
    PingPong,
}

/// One clip action bound to one model fragment.
///
/// A player built from a model with zero clips (or a non-positive clip
/// duration) is inert: every operation is a safe no-op and `is_running`
/// stays false.
#[derive(Debug, Clone)]
pub struct ClipPlayer {
    clip: Option<ClipData>,
    mode: PlayMode,
    time: f32,
    running: bool,
    paused: bool,
}

impl ClipPlayer {
    pub fn new(clip: Option<ClipData>, mode: PlayMode) -> Self {
        let clip = clip.filter(|c| c.duration_secs > 0.0);
        Self {
            clip,
            mode,
            time: 0.0,
            running: false,
            paused: false,
        }
    }

    /// Bind the model's primary clip, matching how the scene treats every
    /// fragment's first animation as its "move".
    pub fn from_model(model: &LoadedModel, mode: PlayMode) -> Self {
        Self::new(model.primary_clip().cloned(), mode)
    }

    pub fn is_inert(&self) -> bool {
        self.clip.is_none()
    }

    /// Actively advancing: started and not frozen.
    pub fn is_running(&self) -> bool {
        self.running && !self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.running && self.paused
    }

    /// Clip-local time cursor in seconds.
    pub fn cursor(&self) -> f32 {
        match (self.mode, &self.clip) {
            (PlayMode::PingPong, Some(clip)) => reflect(self.time, clip.duration_secs),
            _ => self.time,
        }
    }

    pub fn mode(&self) -> PlayMode {
        self.mode
    }

    /// Begin playing from the current cursor. No-op while already running.
    pub fn start(&mut self) {
        if self.clip.is_none() {
            return;
        }
        self.running = true;
        self.paused = false;
    }

    /// Reset the cursor to zero and start.
    pub fn restart(&mut self) {
        if self.clip.is_none() {
            return;
        }
        self.time = 0.0;
        self.running = true;
        self.paused = false;
    }

    /// Freeze the cursor in place. Resuming continues from here.
    pub fn pause(&mut self) {
        if self.running {
            self.paused = true;
        }
    }

    /// Unfreeze; a player that never started stays stopped.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Stop and rewind. Unlike `pause` this discards the cursor.
    pub fn stop(&mut self) {
        self.running = false;
        self.paused = false;
        self.time = 0.0;
    }

    /// Advance the local clock. Negative deltas are clamped to zero so a
    /// host clock hiccup never rewinds playback.
    pub fn advance(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        let Some(clip) = &self.clip else { return };
        if !self.running || self.paused {
            return;
        }
        self.time += dt;
        let duration = clip.duration_secs;
        match self.mode {
            PlayMode::Once => {
                if self.time >= duration {
                    self.time = duration;
                    self.running = false;
                }
            }
            PlayMode::Repeat => {
                self.time = self.time.rem_euclid(duration);
            }
            PlayMode::PingPong => {
                // Keep the raw phase bounded; cursor() reflects it.
                self.time = self.time.rem_euclid(2.0 * duration);
            }
        }
    }
}

/// Reflect t into [0, span] with ping-pong behavior, where period = 2 * span.
fn reflect(t: f32, span: f32) -> f32 {
    if span <= 0.0 {
        return 0.0;
    }
    let m = t.rem_euclid(2.0 * span);
    if m <= span {
        m
    } else {
        2.0 * span - m
    }
}
