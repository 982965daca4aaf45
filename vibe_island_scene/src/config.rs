// Tunable scene parameters.
//
// Island shape, particle budgets and fall speeds, lightning cadence and
// camera framing all live in `SceneConfig` so the look can be retuned
// without touching the builders. `Default` is the shipped look.

use serde::{Deserialize, Serialize};

/// One particle layer's budget, spawn volume and motion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleParams {
    pub count: usize,
    /// Spawn x/z range is `[-half_extent, half_extent)`.
    pub half_extent: f32,
    /// Spawn height range is `[min_height, min_height + height_span)`.
    pub min_height: f32,
    pub height_span: f32,
    /// Fall speed in units/second (0 for bobbing sparkles).
    pub fall_speed: f32,
    /// Height a particle respawns at after falling below the ground.
    pub wrap_height: f32,
    pub size: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Island radius in voxels.
    pub island_radius: i32,
    /// Maximum island column height in voxels.
    pub island_max_height: u32,

    pub rain: ParticleParams,
    pub snow: ParticleParams,
    pub sparkle: ParticleParams,
    /// Sunny scenes above this level get sparkles.
    pub sparkle_min_level: u8,

    /// Seconds between lightning flashes: `min + rand * spread`.
    pub lightning_interval_min: f32,
    pub lightning_interval_spread: f32,
    /// How long a lightning flash stays lit.
    pub lightning_flash_secs: f32,
    /// How long the sunny/night halo glow stays lit after a rebuild.
    pub halo_secs: f32,

    /// Camera distance at level 100; lower levels pull back further.
    pub camera_base_distance: f32,
    /// Extra distance per level point below 100.
    pub camera_distance_per_level: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            island_radius: 14,
            island_max_height: 4,
            rain: ParticleParams {
                count: 400,
                half_extent: 10.0,
                min_height: 5.0,
                height_span: 15.0,
                fall_speed: 25.0,
                wrap_height: 15.0,
                size: 0.05,
            },
            snow: ParticleParams {
                count: 250,
                half_extent: 11.0,
                min_height: 4.0,
                height_span: 12.0,
                fall_speed: 6.0,
                wrap_height: 12.0,
                size: 0.1,
            },
            sparkle: ParticleParams {
                count: 120,
                half_extent: 7.0,
                min_height: 2.0,
                height_span: 8.0,
                fall_speed: 0.0,
                wrap_height: 10.0,
                size: 0.06,
            },
            sparkle_min_level: 75,
            lightning_interval_min: 2.0,
            lightning_interval_spread: 4.0,
            lightning_flash_secs: 0.15,
            halo_secs: 0.9,
            camera_base_distance: 16.0,
            camera_distance_per_level: 0.06,
        }
    }
}
