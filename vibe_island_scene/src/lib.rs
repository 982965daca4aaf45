// vibe_island_scene: headless voxel scene model for Vibe Island.
//
// Turns a `MoodState` into the data a renderer would draw: a floating voxel
// island, a house whose quality follows the life level, props, clouds,
// weather particles, lights, and an orbit camera. Nothing here touches a GPU
// or window; every layer is plain serde-friendly data that tests can count.
//
// Module overview:
// - `color.rs`:      Linear RGB colour with hex constructors and lerp.
// - `parts.rs`:      Block, Light, TransientLight, Group, BlockRole.
// - `config.rs`:     SceneConfig, island size, particle budgets, timings.
// - `island.rs`:     IslandGrid, flat voxel grid, generation, water plate.
// - `house.rs`:      Per-tier house and prop builders.
// - `atmosphere.rs`: Sky, fog, sun/ambient/fill lighting, halo, clouds.
// - `particles.rs`:  Rain, snow and sparkle layers and their motion.
// - `camera.rs`:     CameraRig, distance/lift easing toward the mood.
// - `scene.rs`:      Scene, owns all layers; build_world() and update().
//
// **Critical constraint: determinism.** All randomness flows from
// `vibe_island_prng::VibeRng` streams derived from the scene seed.

pub mod atmosphere;
pub mod camera;
pub mod color;
pub mod config;
pub mod house;
pub mod island;
pub mod particles;
pub mod parts;
pub mod scene;

pub use camera::CameraRig;
pub use color::Color;
pub use config::{ParticleParams, SceneConfig};
pub use particles::{ParticleKind, ParticleSystem};
pub use parts::{Block, BlockRole, Group, Light, TransientLight};
pub use scene::{Scene, SceneStats};
