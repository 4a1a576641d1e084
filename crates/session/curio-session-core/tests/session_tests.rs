use glam::{Vec2, Vec3};
use serde_json::json;

use curio_api_core::SessionId;
use curio_playback_core::LoadedModel;
use curio_session_core::{
    AssetDescriptor, AssetKind, Camera, PeerRef, PreloadedAssets, SceneManifest, Session,
    SessionConfig,
};
use curio_sync_core::{MemoryChannel, StateChannel};

/// Orthographic camera looking down +Z at the tooth row (y = 9). With
/// `view_size` 10 and aspect 1, NDC (-0.2, 0) maps to world x = 2, the
/// center of the first tooth.
fn camera() -> Camera {
    Camera {
        position: Vec3::new(0.0, 9.0, -20.0),
        target: Vec3::new(0.0, 9.0, 0.0),
        view_size: 10.0,
        aspect: 1.0,
    }
}

const TOOTH1_NDC: Vec2 = Vec2::new(-0.2, 0.0);
const EMPTY_NDC: Vec2 = Vec2::new(0.9, 0.9);

fn descriptors_for(models: &[LoadedModel]) -> Vec<AssetDescriptor> {
    models
        .iter()
        .map(|m| AssetDescriptor::new(&m.id, format!("models/{}.fbx", m.id), AssetKind::Fbx))
        .collect()
}

fn boot(config: &SessionConfig, channel: &mut MemoryChannel) -> Session {
    let models: Vec<LoadedModel> = curio_test_fixtures::models::load("installation").unwrap();
    let descriptors = descriptors_for(&models);
    let mut loader = PreloadedAssets::new(models);
    let manifest: SceneManifest = curio_test_fixtures::scenes::load("installation").unwrap();
    Session::bootstrap(
        config,
        None,
        &mut loader,
        &descriptors,
        &manifest,
        camera(),
        channel,
    )
    .unwrap()
}

fn pink_config() -> SessionConfig {
    curio_test_fixtures::configs::load("session-pink").unwrap()
}

fn peer(uid: &str, name: &str, title: &str) -> PeerRef {
    PeerRef {
        uid: uid.parse().unwrap(),
        name: name.into(),
        title: title.into(),
    }
}

/// The orange station's view of the world: pink is its first peer.
fn orange_config() -> SessionConfig {
    SessionConfig {
        uid: "orange".into(),
        name: "coaster-crew".into(),
        others: vec![
            peer("pink", "nyria-jonathan", "dentiste"),
            peer("green", "ear-guy", "earguy"),
            peer("blue", "eye-float", "oeil"),
            peer("red", "spinning-top", "toupie"),
            peer("black", "hand", "main"),
        ],
    }
}

/// it should publish the full event record, named after the targeted peer,
/// under the session's own path
#[test]
fn click_publishes_under_own_path() {
    let mut ch = MemoryChannel::new();
    let mut session = boot(&pink_config(), &mut ch);
    session.step(0.0, &mut ch);

    let observer = ch.subscribe("connections/pink").unwrap();
    ch.drain(observer); // initial replay

    let hit = session
        .handle_pointer_click(TOOTH1_NDC, 1_724_400_000_000, &mut ch)
        .unwrap();
    assert!(hit);

    // Each button carries its peer's display name, so the first tooth
    // publishes the name configured for "orange".
    let delivered = ch.drain(observer);
    assert_eq!(
        delivered,
        vec![json!({
            "target": "orange",
            "name": "coaster-crew",
            "date": 1_724_400_000_000_i64,
            "position": "down",
        })]
    );
}

/// it should name every button after the peer it targets
#[test]
fn buttons_carry_peer_names() {
    let mut ch = MemoryChannel::new();
    let session = boot(&pink_config(), &mut ch);
    let config = pink_config();
    for (button, peer) in session.buttons().iter().zip(&config.others) {
        assert_eq!(&button.target, &peer.uid);
        assert_eq!(button.name, peer.name);
    }
}

/// it should drive the targeted peer's prop and leave the acting scene alone
#[test]
fn peer_session_reacts_to_click() {
    let mut ch = MemoryChannel::new();
    let mut pink = boot(&pink_config(), &mut ch);
    let mut orange = boot(&orange_config(), &mut ch);
    // Consume each router's priming replay.
    pink.step(0.0, &mut ch);
    orange.step(0.0, &mut ch);

    // Pink presses its first tooth, which targets orange. Orange's scene
    // routes the pink key to slot 0.
    assert!(pink.handle_pointer_click(TOOTH1_NDC, 1_000, &mut ch).unwrap());
    pink.step(1.0 / 60.0, &mut ch);
    orange.step(1.0 / 60.0, &mut ch);
    assert!(orange.registry().get(0).unwrap().is_running());
    assert!(!pink.registry().get(0).unwrap().is_running());

    // The second click on the same tooth releases it; the pink route pauses
    // on release and the slot is a pausable prop.
    assert!(pink.handle_pointer_click(TOOTH1_NDC, 2_000, &mut ch).unwrap());
    orange.step(1.0 / 60.0, &mut ch);
    assert!(!orange.registry().get(0).unwrap().is_running());
}

/// it should treat a click on empty space as a miss with no publish
#[test]
fn empty_space_click_publishes_nothing() {
    let mut ch = MemoryChannel::new();
    let mut session = boot(&pink_config(), &mut ch);
    session.step(0.0, &mut ch);

    let observer = ch.subscribe("connections/pink").unwrap();
    ch.drain(observer);

    let hit = session.handle_pointer_click(EMPTY_NDC, 1, &mut ch).unwrap();
    assert!(!hit);
    assert!(ch.drain(observer).is_empty());
    assert!(session.buttons().iter().all(|b| !b.pressed));
}

/// it should keep non-clickable buttons out of picking entirely
#[test]
fn non_clickable_button_never_publishes() {
    let mut ch = MemoryChannel::new();
    let models: Vec<LoadedModel> = curio_test_fixtures::models::load("installation").unwrap();
    let descriptors = descriptors_for(&models);
    let mut loader = PreloadedAssets::new(models);
    let mut manifest: SceneManifest = curio_test_fixtures::scenes::load("installation").unwrap();
    manifest.buttons[0].clickable = false;

    let mut session = Session::bootstrap(
        &pink_config(),
        None,
        &mut loader,
        &descriptors,
        &manifest,
        camera(),
        &mut ch,
    )
    .unwrap();
    session.step(0.0, &mut ch);

    let hit = session.handle_pointer_click(TOOTH1_NDC, 1, &mut ch).unwrap();
    assert!(!hit);
}

/// it should wipe whatever a previous run left under the session's path
#[test]
fn bootstrap_clears_stale_state() {
    let mut ch = MemoryChannel::new();
    ch.write(
        "connections/pink",
        json!({"target": "orange", "name": "n", "date": 1, "position": "down"}),
    )
    .unwrap();

    let _session = boot(&pink_config(), &mut ch);

    let observer = ch.subscribe("connections").unwrap();
    let initial = ch.drain(observer);
    assert_eq!(initial.len(), 1);
    assert!(initial[0].get("pink").is_none());
}

/// it should remove the session's entry on teardown
#[test]
fn teardown_removes_own_entry() {
    let mut ch = MemoryChannel::new();
    let mut session = boot(&pink_config(), &mut ch);
    session.step(0.0, &mut ch);
    session.handle_pointer_click(TOOTH1_NDC, 1, &mut ch).unwrap();

    session.teardown(&mut ch);

    let observer = ch.subscribe("connections").unwrap();
    let initial = ch.drain(observer);
    assert!(initial[0].get("pink").is_none());
}

/// it should refuse to boot a scene whose models never loaded
#[test]
fn bootstrap_fails_on_missing_model() {
    let mut ch = MemoryChannel::new();
    let mut models: Vec<LoadedModel> =
        curio_test_fixtures::models::load("installation").unwrap();
    models.retain(|m| m.id != "knife");
    let descriptors = descriptors_for(&models);
    let mut loader = PreloadedAssets::new(models);
    let manifest: SceneManifest = curio_test_fixtures::scenes::load("installation").unwrap();

    let err = Session::bootstrap(
        &pink_config(),
        None,
        &mut loader,
        &descriptors,
        &manifest,
        camera(),
        &mut ch,
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("knife"));
}

/// it should honor an explicit uid override at boot
#[test]
fn uid_override_renames_the_session() {
    let mut ch = MemoryChannel::new();
    let models: Vec<LoadedModel> = curio_test_fixtures::models::load("installation").unwrap();
    let descriptors = descriptors_for(&models);
    let mut loader = PreloadedAssets::new(models);
    let manifest: SceneManifest = curio_test_fixtures::scenes::load("installation").unwrap();

    let session = Session::bootstrap(
        &pink_config(),
        Some("kiosk-7"),
        &mut loader,
        &descriptors,
        &manifest,
        camera(),
        &mut ch,
    )
    .unwrap();
    assert_eq!(session.id(), &"kiosk-7".parse::<SessionId>().unwrap());
}

/// it should fall back to a generated identity when the config UID is blank
#[test]
fn blank_config_uid_still_boots() {
    let config: SessionConfig =
        curio_test_fixtures::configs::load("session-blank-uid").unwrap();
    let id = config.resolve_uid(None).unwrap();
    assert!(!id.as_str().is_empty());
}
