//! The animated-prop family.
//!
//! Four concrete behaviors share one capability surface: `play`, `pause`,
//! `toggle`, `animate(dt)`. The router calls `pause` only where
//! `supports_pause` says so; on every other variant it is a harmless no-op.
//! Props are created once at scene load and never destroyed during a
//! session.

use crate::clip::LoadedModel;
use crate::player::{ClipPlayer, PlayMode};

/// A scene prop wrapping one or more (model-fragment, player) pairs.
#[derive(Debug, Clone)]
pub enum Prop {
    /// One clip, played exactly once per trigger. `play` is a no-op while
    /// running; otherwise it restarts from zero.
    SingleShot(SingleShot),
    /// N fragments with independent one-shot players, started as a group.
    SingleShotGroup(SingleShotGroup),
    /// Two independently clocked looping players (a moving part and its
    /// accessory) with full pause/resume support.
    DualPausable(DualPausable),
    /// A set of looping players whose running state is inverted together.
    LoopingPair(LoopingPair),
}

impl Prop {
    pub fn single_shot(model: &LoadedModel) -> Self {
        Prop::SingleShot(SingleShot {
            player: ClipPlayer::from_model(model, PlayMode::Once),
        })
    }

    pub fn single_shot_group<'a>(models: impl IntoIterator<Item = &'a LoadedModel>) -> Self {
        Prop::SingleShotGroup(SingleShotGroup {
            players: models
                .into_iter()
                .map(|m| ClipPlayer::from_model(m, PlayMode::Once))
                .collect(),
        })
    }

    pub fn dual_pausable(primary: &LoadedModel, accessory: &LoadedModel) -> Self {
        Prop::DualPausable(DualPausable {
            primary: ClipPlayer::from_model(primary, PlayMode::Repeat),
            accessory: ClipPlayer::from_model(accessory, PlayMode::Repeat),
        })
    }

    pub fn looping_pair<'a>(models: impl IntoIterator<Item = &'a LoadedModel>) -> Self {
        Prop::LoopingPair(LoopingPair {
            players: models
                .into_iter()
                .map(|m| ClipPlayer::from_model(m, PlayMode::Repeat))
                .collect(),
        })
    }

    /// Whether `pause` has an effect on this variant. Single-shot props run
    /// to completion and ignore release events.
    pub fn supports_pause(&self) -> bool {
        matches!(self, Prop::DualPausable(_) | Prop::LoopingPair(_))
    }

    pub fn play(&mut self) {
        match self {
            Prop::SingleShot(p) => p.play(),
            Prop::SingleShotGroup(p) => p.play(),
            Prop::DualPausable(p) => p.play(),
            Prop::LoopingPair(p) => p.play(),
        }
    }

    pub fn pause(&mut self) {
        match self {
            Prop::SingleShot(_) | Prop::SingleShotGroup(_) => {}
            Prop::DualPausable(p) => p.pause(),
            Prop::LoopingPair(p) => p.pause(),
        }
    }

    pub fn toggle(&mut self) {
        match self {
            Prop::SingleShot(p) => p.play(),
            Prop::SingleShotGroup(p) => p.play(),
            Prop::DualPausable(p) => p.toggle(),
            Prop::LoopingPair(p) => p.toggle(),
        }
    }

    /// Advance every player's local clock. The only method permitted to
    /// depend on wall-clock delta.
    pub fn animate(&mut self, dt: f32) {
        match self {
            Prop::SingleShot(p) => p.player.advance(dt),
            Prop::SingleShotGroup(p) => {
                for player in &mut p.players {
                    player.advance(dt);
                }
            }
            Prop::DualPausable(p) => {
                p.primary.advance(dt);
                p.accessory.advance(dt);
            }
            Prop::LoopingPair(p) => {
                for player in &mut p.players {
                    player.advance(dt);
                }
            }
        }
    }

    /// True when any underlying player is actively advancing.
    pub fn is_running(&self) -> bool {
        match self {
            Prop::SingleShot(p) => p.player.is_running(),
            Prop::SingleShotGroup(p) => p.players.iter().any(ClipPlayer::is_running),
            Prop::DualPausable(p) => p.primary.is_running() || p.accessory.is_running(),
            Prop::LoopingPair(p) => p.players.iter().any(ClipPlayer::is_running),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SingleShot {
    pub player: ClipPlayer,
}

impl SingleShot {
    fn play(&mut self) {
        if !self.player.is_running() {
            self.player.restart();
        }
    }
}

#[derive(Debug, Clone)]
pub struct SingleShotGroup {
    pub players: Vec<ClipPlayer>,
}

impl SingleShotGroup {
    /// The group is gated on its first player: the whole set restarts
    /// atomically from the caller's perspective, then each fragment
    /// advances its own clock independently.
    fn play(&mut self) {
        let gate_open = match self.players.first() {
            Some(first) => !first.is_running(),
            None => false,
        };
        if gate_open {
            for player in &mut self.players {
                player.restart();
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct DualPausable {
    pub primary: ClipPlayer,
    pub accessory: ClipPlayer,
}

impl DualPausable {
    fn play(&mut self) {
        for player in [&mut self.primary, &mut self.accessory] {
            player.resume();
            player.start();
        }
    }

    fn pause(&mut self) {
        for player in [&mut self.primary, &mut self.accessory] {
            if player.is_running() {
                player.pause();
            }
        }
    }

    /// Each player flips independently, mirroring the two separately
    /// clocked actions of the source prop.
    fn toggle(&mut self) {
        for player in [&mut self.primary, &mut self.accessory] {
            if player.is_running() {
                player.pause();
            } else {
                player.resume();
                player.start();
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoopingPair {
    pub players: Vec<ClipPlayer>,
}

impl LoopingPair {
    fn play(&mut self) {
        for player in &mut self.players {
            player.resume();
            player.start();
        }
    }

    fn pause(&mut self) {
        for player in &mut self.players {
            if player.is_running() {
                player.pause();
            }
        }
    }

    /// Starts the whole set if any player is stopped, pauses the whole set
    /// when all are running.
    fn toggle(&mut self) {
        let all_running = !self.players.is_empty()
            && self.players.iter().all(ClipPlayer::is_running);
        for player in &mut self.players {
            if all_running {
                player.pause();
            } else {
                player.resume();
                player.start();
            }
        }
    }
}
