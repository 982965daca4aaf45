// The live scene: a fixed island plus the mood-dependent layers on top.
//
// `Scene` owns everything a renderer would draw, as plain data:
// - the island ground blocks and water plate (built once in `new()`),
// - the house and props for the current tier,
// - clouds, particles and lighting for the current weather,
// - transient lights (the rebuild halo and lightning flashes),
// - the orbit camera.
//
// `build_world()` swaps the house, props, clouds, particles and atmosphere
// wholesale. Its randomness comes from a stream derived from the scene seed
// and the state's (level, tier, weather), so rebuilding for the same state
// twice yields the same scene. `update()` is the per-frame tick: particle
// motion, storm lightning, flickering bulbs, transient expiry and camera
// easing. It draws from a separate per-frame stream.
//
// See also: `house.rs`, `atmosphere.rs`, `particles.rs` for the builders,
// and `vibe_island_app::presenter` for the trait the controller calls.
//
// **Critical constraint: determinism.** Two scenes with the same seed that
// see the same sequence of `build_world` / `update` calls hold identical
// data.

use crate::atmosphere::{self, Atmosphere};
use crate::camera::CameraRig;
use crate::color::Color;
use crate::config::SceneConfig;
use crate::house::{build_house, build_props};
use crate::island::{IslandGrid, WaterPlate};
use crate::parts::{Block, Group, Light, TransientLight};
use crate::particles::{ParticleKind, ParticleSystem};
use serde::{Deserialize, Serialize};
use std::fmt;
use vibe_island_mood::{HouseTier, MoodState, Weather};
use vibe_island_prng::VibeRng;

const ISLAND_STREAM: u64 = 0x1515_1A4D;
const FRAME_STREAM: u64 = 0xF4A3_E000;

const FLASH_COLOR: Color = Color::hex(0xa6c8ff);
const FLASH_INTENSITY: f32 = 5.0;
const FLASH_RANGE: f32 = 30.0;

/// Stream key for a rebuild. Distinct for every reachable (level, tier,
/// weather) and never equal to the island or frame streams.
fn state_key(state: &MoodState) -> u64 {
    (1u64 << 32)
        | (u64::from(state.life_level) << 16)
        | (u64::from(state.house_tier.number()) << 8)
        | state.weather as u64
}

/// Counts for a one-line summary of what is on screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneStats {
    pub tier: HouseTier,
    pub weather: Weather,
    pub ground_blocks: usize,
    pub house_blocks: usize,
    pub prop_blocks: usize,
    pub clouds: usize,
    pub lights: usize,
    pub particle_kind: Option<ParticleKind>,
    pub particles: usize,
    pub camera_distance: f32,
}

impl fmt::Display for SceneStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tier {} {}: {} ground, {} house, {} props, {} clouds, {} lights",
            self.tier.number(),
            self.weather,
            self.ground_blocks,
            self.house_blocks,
            self.prop_blocks,
            self.clouds,
            self.lights,
        )?;
        match self.particle_kind {
            Some(kind) => write!(f, ", {} {:?} particles", self.particles, kind)?,
            None => write!(f, ", no particles")?,
        }
        write!(f, ", camera at {:.1}", self.camera_distance)
    }
}

#[derive(Clone, Debug)]
pub struct Scene {
    config: SceneConfig,
    seed: u64,
    island: IslandGrid,
    ground: Vec<Block>,
    /// Tier and weather of the last rebuild, `None` before the first one.
    built: Option<(HouseTier, Weather)>,
    house: Group,
    props: Group,
    clouds: Group,
    particles: Option<ParticleSystem>,
    atmosphere: Atmosphere,
    halo: Option<TransientLight>,
    flashes: Vec<TransientLight>,
    lightning_timer: f32,
    frame_rng: VibeRng,
    elapsed: f32,
    camera: CameraRig,
}

impl Scene {
    pub fn new(seed: u64, config: SceneConfig) -> Self {
        let mut island_rng = VibeRng::derive(seed, ISLAND_STREAM);
        let island = IslandGrid::generate(
            config.island_radius,
            config.island_max_height,
            &mut island_rng,
        );
        let ground = island.blocks();
        tracing::debug!(seed, ground = ground.len(), "island generated");
        Self {
            config,
            seed,
            island,
            ground,
            built: None,
            house: Group::new(),
            props: Group::new(),
            clouds: Group::new(),
            particles: None,
            atmosphere: Atmosphere::default(),
            halo: None,
            flashes: Vec::new(),
            lightning_timer: 0.0,
            frame_rng: VibeRng::derive(seed, FRAME_STREAM),
            elapsed: 0.0,
            camera: CameraRig::default(),
        }
    }

    /// Replace every mood-dependent layer for `state`.
    pub fn build_world(&mut self, state: &MoodState) {
        let mut rng = VibeRng::derive(self.seed, state_key(state));
        let tier = state.house_tier;
        let weather = state.weather;

        self.house = build_house(tier, &mut rng);
        self.props = build_props(tier, &mut rng);
        self.clouds = atmosphere::build_clouds(weather, &mut rng);
        self.particles =
            ParticleSystem::for_weather(weather, state.life_level, &self.config, &mut rng);
        self.atmosphere = Atmosphere::new(weather, state.life_level);
        self.halo = atmosphere::halo(weather).map(|light| TransientLight {
            light,
            remaining: self.config.halo_secs,
        });
        self.built = Some((tier, weather));

        tracing::debug!(
            level = state.life_level,
            tier = tier.number(),
            weather = weather.name(),
            house_blocks = self.house.blocks.len(),
            particles = self.particles.as_ref().map_or(0, ParticleSystem::len),
            "scene rebuilt"
        );
    }

    /// Advance the scene clock by `dt` seconds. Reads only the level and
    /// weather of `state`; the layers stay as the last `build_world` left
    /// them.
    pub fn update(&mut self, dt: f32, state: &MoodState) {
        let dt = dt.max(0.0);
        self.elapsed += dt;

        if let Some(particles) = &mut self.particles {
            particles.update(dt, self.elapsed);
        }

        if state.weather == Weather::Storm {
            self.lightning_timer -= dt;
            if self.lightning_timer <= 0.0 {
                self.strike();
            }
        }

        for light in self.house.lights.iter_mut().filter(|l| l.flicker) {
            light.intensity = 0.8 + self.frame_rng.next_f32() * 0.6;
        }

        if let Some(halo) = &mut self.halo {
            halo.remaining -= dt;
        }
        if self.halo.as_ref().is_some_and(|h| h.remaining <= 0.0) {
            self.halo = None;
        }
        for flash in &mut self.flashes {
            flash.remaining -= dt;
        }
        self.flashes.retain(|f| f.remaining > 0.0);

        self.camera.update(
            dt,
            self.elapsed,
            state.life_level,
            self.config.camera_base_distance,
            self.config.camera_distance_per_level,
        );
    }

    fn strike(&mut self) {
        let rng = &mut self.frame_rng;
        let position = [
            rng.centered_f32(6.0),
            8.0 + rng.next_f32() * 4.0,
            rng.centered_f32(6.0),
        ];
        self.flashes.push(TransientLight {
            light: Light::point(position, FLASH_COLOR, FLASH_INTENSITY, FLASH_RANGE),
            remaining: self.config.lightning_flash_secs,
        });
        self.lightning_timer = self.config.lightning_interval_min
            + rng.next_f32() * self.config.lightning_interval_spread;
        tracing::trace!(x = position[0], z = position[2], "lightning");
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn island(&self) -> &IslandGrid {
        &self.island
    }

    pub fn ground(&self) -> &[Block] {
        &self.ground
    }

    pub fn water(&self) -> WaterPlate {
        self.island.water()
    }

    pub fn house(&self) -> &Group {
        &self.house
    }

    pub fn props(&self) -> &Group {
        &self.props
    }

    pub fn clouds(&self) -> &Group {
        &self.clouds
    }

    pub fn particles(&self) -> Option<&ParticleSystem> {
        self.particles.as_ref()
    }

    pub fn atmosphere(&self) -> &Atmosphere {
        &self.atmosphere
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Seconds until the next lightning strike while stormy.
    pub fn lightning_timer(&self) -> f32 {
        self.lightning_timer
    }

    pub fn halo(&self) -> Option<&TransientLight> {
        self.halo.as_ref()
    }

    pub fn flashes(&self) -> &[TransientLight] {
        &self.flashes
    }

    /// Every point light currently lit: house and prop fixtures, the halo,
    /// and lightning flashes.
    pub fn lights(&self) -> impl Iterator<Item = &Light> {
        self.house
            .lights
            .iter()
            .chain(&self.props.lights)
            .chain(self.halo.iter().map(|t| &t.light))
            .chain(self.flashes.iter().map(|t| &t.light))
    }

    pub fn stats(&self) -> SceneStats {
        let (tier, weather) = self.built.unwrap_or((HouseTier::Home, Weather::Sunny));
        SceneStats {
            tier,
            weather,
            ground_blocks: self.ground.len(),
            house_blocks: self.house.blocks.len(),
            prop_blocks: self.props.blocks.len(),
            clouds: self.clouds.blocks.len(),
            lights: self.lights().count(),
            particle_kind: self.particles.as_ref().map(|p| p.kind),
            particles: self.particles.as_ref().map_or(0, ParticleSystem::len),
            camera_distance: self.camera.distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::BlockRole;

    fn state(level: u8, tier: HouseTier, weather: Weather) -> MoodState {
        MoodState {
            life_level: level,
            house_tier: tier,
            weather,
            description: String::new(),
            tag: "test".to_string(),
        }
    }

    fn scene() -> Scene {
        Scene::new(42, SceneConfig::default())
    }

    #[test]
    fn rebuild_is_idempotent() {
        let s = state(20, HouseTier::Shack, Weather::Rain);
        let mut scene = scene();
        scene.build_world(&s);
        let house = scene.house().clone();
        let props = scene.props().clone();
        let particles = scene.particles().cloned();
        scene.build_world(&s);
        assert_eq!(scene.house(), &house);
        assert_eq!(scene.props(), &props);
        assert_eq!(scene.particles().cloned(), particles);
    }

    #[test]
    fn same_seed_same_island() {
        assert_eq!(scene().ground(), Scene::new(42, SceneConfig::default()).ground());
        assert_ne!(scene().ground(), Scene::new(43, SceneConfig::default()).ground());
    }

    #[test]
    fn island_survives_rebuilds() {
        let mut scene = scene();
        let ground = scene.ground().to_vec();
        scene.build_world(&state(90, HouseTier::Villa, Weather::Snow));
        scene.build_world(&state(10, HouseTier::Shack, Weather::Storm));
        assert_eq!(scene.ground(), ground.as_slice());
    }

    #[test]
    fn tier_selects_the_house() {
        let mut scene = scene();
        scene.build_world(&state(50, HouseTier::Home, Weather::Cloudy));
        assert_eq!(scene.house().count(BlockRole::Porch), 1);
        scene.build_world(&state(90, HouseTier::Villa, Weather::Cloudy));
        assert_eq!(scene.house().count(BlockRole::Pool), 1);
        assert_eq!(scene.house().count(BlockRole::Porch), 0);
        scene.build_world(&state(10, HouseTier::Shack, Weather::Cloudy));
        assert_eq!(scene.house().count(BlockRole::Crate), 3);
    }

    #[test]
    fn particle_layers_follow_weather() {
        let mut scene = scene();
        scene.build_world(&state(30, HouseTier::Shack, Weather::Storm));
        assert_eq!(scene.stats().particles, 400);
        scene.build_world(&state(30, HouseTier::Shack, Weather::Rain));
        assert_eq!(scene.stats().particle_kind, Some(ParticleKind::Rain));
        scene.build_world(&state(50, HouseTier::Home, Weather::Snow));
        assert_eq!(scene.stats().particles, 250);
        assert_eq!(scene.clouds().blocks.len(), 0);
        scene.build_world(&state(95, HouseTier::Villa, Weather::Sunny));
        assert_eq!(scene.stats().particles, 120);
        scene.build_world(&state(70, HouseTier::Villa, Weather::Sunny));
        assert!(scene.particles().is_none());
    }

    #[test]
    fn lightning_only_in_storms() {
        let mut scene = scene();
        let calm = state(50, HouseTier::Home, Weather::Rain);
        scene.build_world(&calm);
        for _ in 0..600 {
            scene.update(1.0 / 60.0, &calm);
            assert!(scene.flashes().is_empty());
        }

        let storm = state(30, HouseTier::Shack, Weather::Storm);
        scene.build_world(&storm);
        scene.update(1.0 / 60.0, &storm);
        assert_eq!(scene.flashes().len(), 1);
        let timer = scene.lightning_timer();
        assert!((2.0..6.0).contains(&timer), "{timer}");

        let flash = &scene.flashes()[0].light;
        assert!(flash.position[1] >= 8.0 && flash.position[1] < 12.0);
        assert_eq!(flash.color, FLASH_COLOR);
    }

    #[test]
    fn flashes_and_halo_expire() {
        let mut scene = scene();
        let storm = state(30, HouseTier::Shack, Weather::Storm);
        scene.build_world(&storm);
        scene.update(0.01, &storm);
        assert_eq!(scene.flashes().len(), 1);
        scene.update(0.2, &storm);
        assert!(scene.flashes().is_empty());

        let night = state(85, HouseTier::Villa, Weather::Night);
        scene.build_world(&night);
        assert!(scene.halo().is_some());
        scene.update(0.5, &night);
        assert!(scene.halo().is_some());
        scene.update(0.5, &night);
        assert!(scene.halo().is_none());
    }

    #[test]
    fn rebuild_replaces_the_halo() {
        let mut scene = scene();
        let sunny = state(70, HouseTier::Villa, Weather::Sunny);
        scene.build_world(&sunny);
        scene.build_world(&sunny);
        assert_eq!(scene.lights().filter(|l| l.range == 20.0).count(), 1);
        scene.build_world(&state(70, HouseTier::Villa, Weather::Cloudy));
        assert!(scene.halo().is_none());
    }

    #[test]
    fn shack_bulb_flickers_in_band() {
        let mut scene = scene();
        let s = state(10, HouseTier::Shack, Weather::Cloudy);
        scene.build_world(&s);
        let mut seen = Vec::new();
        for _ in 0..50 {
            scene.update(1.0 / 60.0, &s);
            let bulb = scene.house().lights.iter().find(|l| l.flicker).unwrap();
            assert!(bulb.intensity >= 0.8 && bulb.intensity < 1.4);
            seen.push(bulb.intensity);
        }
        seen.dedup();
        assert!(seen.len() > 1);
    }

    #[test]
    fn identical_scenes_step_identically() {
        let s = state(30, HouseTier::Shack, Weather::Storm);
        let mut a = scene();
        let mut b = scene();
        a.build_world(&s);
        b.build_world(&s);
        for _ in 0..120 {
            a.update(1.0 / 30.0, &s);
            b.update(1.0 / 30.0, &s);
        }
        assert_eq!(a.particles(), b.particles());
        assert_eq!(a.flashes(), b.flashes());
        assert_eq!(a.camera(), b.camera());
    }

    #[test]
    fn stats_summary_reads_well() {
        let mut scene = scene();
        scene.build_world(&state(20, HouseTier::Shack, Weather::Storm));
        let line = scene.stats().to_string();
        assert!(line.starts_with("tier 1 storm"), "{line}");
        assert!(line.contains("400 Rain particles"), "{line}");
    }
}
