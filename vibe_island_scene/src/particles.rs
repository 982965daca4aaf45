// Weather particle layers and their per-frame motion.
//
// At most one layer is live at a time:
// - Rain (rain and storm weather): falls fast and wraps back to the top.
// - Snow: falls slowly with a sideways sine drift and wraps.
// - Sparkle (sunny, level above the configured minimum): hovers and bobs.
//
// Positions live in a flat `Vec<[f32; 3]>`. Spawning is the only random
// step; `update()` is a pure function of the positions, `dt` and the scene
// clock, so two scenes stepped with the same frame times stay identical.

use crate::color::Color;
use crate::config::{ParticleParams, SceneConfig};
use serde::{Deserialize, Serialize};
use vibe_island_mood::Weather;
use vibe_island_prng::VibeRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleKind {
    Rain,
    Snow,
    Sparkle,
}

impl ParticleKind {
    /// Which layer (if any) a weather/level combination shows.
    pub fn for_weather(weather: Weather, level: u8, sparkle_min_level: u8) -> Option<Self> {
        match weather {
            w if w.is_wet() => Some(ParticleKind::Rain),
            Weather::Snow => Some(ParticleKind::Snow),
            Weather::Sunny if level > sparkle_min_level => Some(ParticleKind::Sparkle),
            _ => None,
        }
    }

    pub fn color(self) -> Color {
        match self {
            ParticleKind::Rain => Color::hex(0xa3b7ff),
            ParticleKind::Snow => Color::hex(0xe5f5ff),
            ParticleKind::Sparkle => Color::hex(0xfff6d1),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleSystem {
    pub kind: ParticleKind,
    pub params: ParticleParams,
    pub positions: Vec<[f32; 3]>,
}

impl ParticleSystem {
    pub fn spawn(kind: ParticleKind, params: &ParticleParams, rng: &mut VibeRng) -> Self {
        let positions = (0..params.count)
            .map(|_| {
                [
                    rng.centered_f32(params.half_extent),
                    params.min_height + rng.next_f32() * params.height_span,
                    rng.centered_f32(params.half_extent),
                ]
            })
            .collect();
        Self {
            kind,
            params: params.clone(),
            positions,
        }
    }

    /// Spawn whichever layer the weather calls for, or `None`.
    pub fn for_weather(
        weather: Weather,
        level: u8,
        config: &SceneConfig,
        rng: &mut VibeRng,
    ) -> Option<Self> {
        let kind = ParticleKind::for_weather(weather, level, config.sparkle_min_level)?;
        let params = match kind {
            ParticleKind::Rain => &config.rain,
            ParticleKind::Snow => &config.snow,
            ParticleKind::Sparkle => &config.sparkle,
        };
        Some(Self::spawn(kind, params, rng))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Advance every particle by `dt` seconds. `elapsed` is the scene clock.
    pub fn update(&mut self, dt: f32, elapsed: f32) {
        let fall = self.params.fall_speed * dt;
        let wrap = self.params.wrap_height;
        for (i, p) in self.positions.iter_mut().enumerate() {
            let phase = i as f32;
            match self.kind {
                ParticleKind::Rain => {
                    p[1] -= fall;
                    if p[1] < 0.0 {
                        p[1] = wrap;
                    }
                }
                ParticleKind::Snow => {
                    p[1] -= fall;
                    p[0] += (p[1] + phase).sin() * 0.02;
                    if p[1] < 0.0 {
                        p[1] = wrap;
                    }
                }
                ParticleKind::Sparkle => {
                    p[1] += (elapsed + phase).sin() * 0.01;
                }
            }
        }
    }
}
