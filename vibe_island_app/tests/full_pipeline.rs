// End-to-end tests for the input → derivation → presentation pipeline.
//
// Each test drives a `StandardController` (the real mood engine, scene and
// audio models) the way the `vibe` binary does, and checks what the
// presenters ended up holding.

use vibe_island_app::StandardController;
use vibe_island_mood::{HouseTier, MoodConfig, MoodEngine, MoodInput, Weather};
use vibe_island_scene::{BlockRole, ParticleKind};

const SEED: u64 = 42;
const DT: f32 = 1.0 / 60.0;

fn controller() -> StandardController {
    StandardController::standard(MoodEngine::default(), SEED)
}

// ---------------------------------------------------------------------------
// Startup
// ---------------------------------------------------------------------------

#[test]
fn starts_with_a_home_and_silent_audio() {
    let c = controller();
    assert_eq!(c.state().house_tier, HouseTier::Home);
    assert_eq!(c.scene().house().count(BlockRole::Porch), 1);
    assert!(!c.audio().is_initialized());
}

#[test]
fn first_input_starts_audio() {
    let mut c = controller();
    c.slider(60.0);
    assert!(c.audio().is_initialized());
    let g = c.audio().graph().unwrap();
    assert!((g.pad.frequency.target() - (120.0 + 60.0 * 1.2)).abs() < 1e-3);
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn burnout_brings_the_storm() {
    let mut c = controller();
    c.preset("Burnout");
    assert_eq!(c.state().weather, Weather::Storm);
    assert_eq!(c.state().life_level, 20);

    let stats = c.scene().stats();
    assert_eq!(stats.tier, HouseTier::Shack);
    assert_eq!(stats.particle_kind, Some(ParticleKind::Rain));
    assert_eq!(stats.particles, 400);
    assert_eq!(stats.clouds, 10);
    assert_eq!(c.audio().snapshot().one_shots, 1);

    c.run_frames(1, DT);
    assert_eq!(c.scene().flashes().len(), 1);
}

#[test]
fn slider_upgrades_the_house_and_keeps_the_sky() {
    let mut c = controller();
    c.preset("Chill Sunday");
    c.slider(85.0);
    assert_eq!(c.state().house_tier, HouseTier::Villa);
    assert_eq!(c.state().weather, Weather::Sunny);
    let description = &c.state().description;
    assert!(description.contains("Soft-life villa, pool shimmering."), "{description}");
    assert_eq!(c.scene().house().count(BlockRole::Pool), 1);
    assert_eq!(c.scene().stats().particle_kind, Some(ParticleKind::Sparkle));
}

#[test]
fn tired_in_the_rain() {
    let mut c = controller();
    c.text("I feel tired and it's raining");
    let s = c.state();
    assert_eq!(s.weather, Weather::Rain);
    assert!(s.life_level <= 40);
    assert_eq!(s.tag, "Custom vibe");
    let low = s.description.find("Energy low, clouds heavy.").unwrap();
    let rain = s.description.find("Grey drizzle incoming.").unwrap();
    assert!(low < rain);
}

#[test]
fn snow_has_no_clouds_and_a_bright_bell() {
    let mut c = controller();
    c.text("cold winter morning");
    assert_eq!(c.state().weather, Weather::Snow);
    assert_eq!(c.scene().clouds().blocks.len(), 0);
    assert_eq!(c.scene().stats().particles, 250);
    c.run_frames(600, DT);
    let audio = c.audio().snapshot();
    assert!((audio.bell_frequency - 640.0).abs() < 0.5);
}

#[test]
fn text_ignores_the_prior_state() {
    let mut a = controller();
    let mut b = controller();
    b.preset("Lottery Winner");
    b.slider(3.0);
    a.text("cozy lazy afternoon");
    b.text("cozy lazy afternoon");
    assert_eq!(a.state(), b.state());
}

#[test]
fn unknown_preset_matches_the_first_entry() {
    let mut a = controller();
    let mut b = controller();
    a.preset("Not A Preset");
    b.preset("Calm");
    assert_eq!(a.state(), b.state());
}

#[test]
fn replaying_inputs_gives_identical_scenes() {
    let inputs = [
        MoodInput::preset("Storm Season"),
        MoodInput::slider(72.0),
        MoodInput::text("party all night"),
        MoodInput::preset("Tired"),
    ];
    let run = || {
        let mut c = controller();
        for input in &inputs {
            c.handle(input);
            c.run_frames(45, DT);
        }
        c
    };
    let (a, b) = (run(), run());
    assert_eq!(a.state(), b.state());
    assert_eq!(a.scene().house(), b.scene().house());
    assert_eq!(a.scene().particles(), b.scene().particles());
    assert_eq!(a.scene().camera(), b.scene().camera());
    assert_eq!(a.audio().snapshot(), b.audio().snapshot());
}

// ---------------------------------------------------------------------------
// Audio
// ---------------------------------------------------------------------------

#[test]
fn mute_round_trip() {
    let mut c = controller();
    c.preset("Happy");
    assert!(c.toggle_mute());
    assert_eq!(c.audio().snapshot().master_gain, 0.0);
    c.preset("Soft Life");
    assert_eq!(c.audio().snapshot().master_gain, 0.0);
    assert!(!c.toggle_mute());
    assert_eq!(c.audio().snapshot().master_gain, 0.5);
}

#[test]
fn camera_pulls_back_when_mood_drops() {
    let mut c = controller();
    c.slider(100.0);
    c.run_frames(1200, DT);
    let near = c.scene().camera().distance;
    c.slider(0.0);
    c.run_frames(1200, DT);
    let far = c.scene().camera().distance;
    assert!((near - 16.0).abs() < 0.05, "{near}");
    assert!((far - 22.0).abs() < 0.05, "{far}");
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[test]
fn custom_catalog_drives_the_fallback() {
    let mut config = MoodConfig::default();
    config.presets.rotate_left(1);
    let first = config.presets[0].label.clone();
    let engine = MoodEngine::new(config).unwrap();
    let mut c = StandardController::standard(engine, SEED);
    c.preset("nope");
    assert_eq!(c.state().tag, first);
}

#[test]
fn empty_catalog_is_rejected() {
    let mut config = MoodConfig::default();
    config.presets.clear();
    assert!(MoodEngine::new(config).is_err());
}
