use curio_playback_core::{ClipData, LoadedModel, Prop};

fn model(id: &str, duration: f32) -> LoadedModel {
    LoadedModel {
        id: id.into(),
        clips: vec![ClipData {
            name: "move".into(),
            duration_secs: duration,
        }],
    }
}

fn bare_model(id: &str) -> LoadedModel {
    LoadedModel {
        id: id.into(),
        clips: vec![],
    }
}

/// it should keep the clock untouched when play() is called on a running single-shot
#[test]
fn single_shot_play_is_idempotent_while_running() {
    let mut prop = Prop::single_shot(&model("earGuy", 10.0));
    prop.play();
    prop.animate(3.0);
    prop.play();
    prop.animate(0.0);
    match &prop {
        Prop::SingleShot(p) => assert!((p.player.cursor() - 3.0).abs() < 1e-6),
        _ => unreachable!(),
    }
    assert!(prop.is_running());
}

/// it should restart a single-shot from zero on a fresh play after natural completion
#[test]
fn single_shot_restarts_after_completion() {
    let mut prop = Prop::single_shot(&model("earGuy", 1.0));
    prop.play();
    prop.animate(2.0);
    assert!(!prop.is_running());
    prop.play();
    match &prop {
        Prop::SingleShot(p) => assert_eq!(p.player.cursor(), 0.0),
        _ => unreachable!(),
    }
    assert!(prop.is_running());
}

/// it should ignore pause on single-shot variants (capability is off)
#[test]
fn single_shot_pause_is_a_noop() {
    let mut prop = Prop::single_shot(&model("earGuy", 10.0));
    assert!(!prop.supports_pause());
    prop.play();
    prop.pause();
    assert!(prop.is_running());
}

/// it should gate the group on its first player and restart all members together
#[test]
fn group_play_gates_on_first_player() {
    let models = [
        model("clamp", 2.0),
        model("eyeFollow", 4.0),
        model("eyeUP", 6.0),
    ];
    let mut prop = Prop::single_shot_group(models.iter());
    prop.play();
    assert!(prop.is_running());

    // While the gate player runs, play() must not reset anyone.
    prop.animate(1.0);
    prop.play();
    match &prop {
        Prop::SingleShotGroup(g) => {
            for player in &g.players {
                assert!((player.cursor() - 1.0).abs() < 1e-6);
            }
        }
        _ => unreachable!(),
    }

    // Gate player finishes; the others keep their own clocks running.
    prop.animate(1.5);
    match &prop {
        Prop::SingleShotGroup(g) => {
            assert!(!g.players[0].is_running());
            assert!(g.players[1].is_running());
        }
        _ => unreachable!(),
    }

    // Gate reopened: the whole set restarts from zero.
    prop.play();
    match &prop {
        Prop::SingleShotGroup(g) => {
            for player in &g.players {
                assert_eq!(player.cursor(), 0.0);
                assert!(player.is_running());
            }
        }
        _ => unreachable!(),
    }
}

/// it should be a safe no-op to play an empty group
#[test]
fn empty_group_is_inert() {
    let mut prop = Prop::single_shot_group(std::iter::empty());
    prop.play();
    prop.toggle();
    prop.animate(1.0);
    assert!(!prop.is_running());
}

/// it should resume a dual-pausable prop from the frozen cursor, not zero
#[test]
fn dual_pausable_resumes_from_cursor() {
    let mut prop = Prop::dual_pausable(&model("knife", 10.0), &model("coiler", 10.0));
    assert!(prop.supports_pause());
    prop.play();
    prop.animate(2.5);
    prop.pause();
    assert!(!prop.is_running());
    prop.animate(5.0);
    prop.play();
    match &prop {
        Prop::DualPausable(p) => {
            assert!((p.primary.cursor() - 2.5).abs() < 1e-6);
            assert!((p.accessory.cursor() - 2.5).abs() < 1e-6);
        }
        _ => unreachable!(),
    }
    prop.animate(1.0);
    match &prop {
        Prop::DualPausable(p) => assert!((p.primary.cursor() - 3.5).abs() < 1e-6),
        _ => unreachable!(),
    }
}

/// it should toggle each dual player independently
#[test]
fn dual_pausable_toggle_flips_each_player() {
    let mut prop = Prop::dual_pausable(&model("knife", 10.0), &bare_model("coiler"));
    prop.toggle();
    assert!(prop.is_running());
    prop.toggle();
    assert!(!prop.is_running());
}

/// it should invert the whole looping set together on toggle
#[test]
fn looping_pair_toggle_inverts_the_set() {
    let models = [model("dentWagon1", 5.0), model("dentWagon2", 7.0)];
    let mut prop = Prop::looping_pair(models.iter());
    prop.toggle();
    match &prop {
        Prop::LoopingPair(p) => assert!(p.players.iter().all(|pl| pl.is_running())),
        _ => unreachable!(),
    }
    prop.animate(1.0);
    prop.toggle();
    match &prop {
        Prop::LoopingPair(p) => assert!(p.players.iter().all(|pl| !pl.is_running())),
        _ => unreachable!(),
    }
    // Resume continues the loop from the frozen cursors.
    prop.toggle();
    match &prop {
        Prop::LoopingPair(p) => {
            assert!((p.players[0].cursor() - 1.0).abs() < 1e-6);
            assert!(p.players.iter().all(|pl| pl.is_running()));
        }
        _ => unreachable!(),
    }
}

/// it should start the whole set when only part of it is running
#[test]
fn looping_pair_toggle_starts_stragglers() {
    let models = [model("dentWagon1", 5.0), model("dentWagon2", 7.0)];
    let mut prop = Prop::looping_pair(models.iter());
    prop.toggle();
    // Pause just one member behind the prop's back.
    if let Prop::LoopingPair(p) = &mut prop {
        p.players[1].pause();
    }
    // Not all running, so toggle starts everyone instead of pausing.
    prop.toggle();
    match &prop {
        Prop::LoopingPair(p) => assert!(p.players.iter().all(|pl| pl.is_running())),
        _ => unreachable!(),
    }
}

/// it should degrade clipless props to no-ops across the whole family
#[test]
fn clipless_props_never_error() {
    let mut props = vec![
        Prop::single_shot(&bare_model("a")),
        Prop::single_shot_group([bare_model("b"), bare_model("c")].iter()),
        Prop::dual_pausable(&bare_model("d"), &bare_model("e")),
        Prop::looping_pair([bare_model("f")].iter()),
    ];
    for prop in &mut props {
        prop.play();
        prop.toggle();
        prop.pause();
        prop.animate(1.0);
        assert!(!prop.is_running());
    }
}
