// Weather-driven lighting, sky and clouds.
//
// `Atmosphere::new()` maps (weather, level) to the global lighting rig:
// sky colour, fog (the sky at 60% brightness), sun intensity and tint, an
// ambient term that brightens with the life level, and a blue fill light
// that nearly goes out at night. Sunny and night skies also get a short
// halo glow right after a rebuild.
//
// `build_clouds()` scatters flattened cloud blocks above the island: three
// for sunny skies, ten for storms, six otherwise, none for snow (snow is
// drawn with particles only).

use crate::color::Color;
use crate::parts::{Block, BlockRole, Group, Light};
use serde::{Deserialize, Serialize};
use vibe_island_mood::Weather;
use vibe_island_prng::VibeRng;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Atmosphere {
    pub sky: Color,
    pub fog: Color,
    pub sun_intensity: f32,
    pub sun_color: Color,
    pub ambient_intensity: f32,
    pub fill_intensity: f32,
}

impl Atmosphere {
    pub fn new(weather: Weather, level: u8) -> Self {
        let sky = sky_color(weather);
        Self {
            sky,
            fog: sky.scaled(0.6),
            sun_intensity: sun_intensity(weather),
            sun_color: if weather == Weather::Storm {
                Color::hex(0xb9c5ff)
            } else {
                Color::WHITE
            },
            ambient_intensity: 0.35 + f32::from(level) / 300.0,
            fill_intensity: if weather == Weather::Night { 0.1 } else { 0.35 },
        }
    }
}

impl Default for Atmosphere {
    fn default() -> Self {
        Self::new(Weather::Cloudy, 50)
    }
}

pub fn sky_color(weather: Weather) -> Color {
    match weather {
        Weather::Sunny => Color::hex(0x7fc5ff),
        Weather::Cloudy => Color::hex(0x6d7082),
        Weather::Rain => Color::hex(0x475265),
        Weather::Storm => Color::hex(0x1a1c25),
        Weather::Snow => Color::hex(0x8fb4d9),
        Weather::Night => Color::hex(0x0b0c14),
    }
}

pub fn sun_intensity(weather: Weather) -> f32 {
    match weather {
        Weather::Sunny => 1.35,
        Weather::Cloudy => 0.65,
        Weather::Rain => 0.5,
        Weather::Storm => 0.25,
        Weather::Snow => 0.65,
        Weather::Night => 0.1,
    }
}

/// The overhead glow shown briefly after switching to a sunny or night sky.
pub fn halo(weather: Weather) -> Option<Light> {
    let (color, intensity) = match weather {
        Weather::Sunny => (Color::hex(0xffe2b8), 1.5),
        Weather::Night => (Color::hex(0x8dd1ff), 1.8),
        _ => return None,
    };
    Some(Light::point([0.0, 10.0, 0.0], color, intensity, 20.0))
}

fn cloud_color(weather: Weather) -> Color {
    match weather {
        Weather::Sunny => Color::hex(0xffffff),
        Weather::Rain => Color::hex(0xb0b4c1),
        Weather::Storm => Color::hex(0x7b7f8c),
        Weather::Night => Color::hex(0x7f8bb8),
        Weather::Cloudy | Weather::Snow => Color::hex(0xd6dae8),
    }
}

pub fn cloud_count(weather: Weather) -> usize {
    match weather {
        Weather::Snow => 0,
        Weather::Sunny => 3,
        Weather::Storm => 10,
        _ => 6,
    }
}

pub fn build_clouds(weather: Weather, rng: &mut VibeRng) -> Group {
    let mut group = Group::new();
    let color = cloud_color(weather);
    for _ in 0..cloud_count(weather) {
        let edge = 2.0 + rng.next_f32() * 1.5;
        let x = rng.range_f32(-8.0, 8.0);
        let y = rng.range_f32(9.0, 13.0);
        let z = rng.range_f32(-8.0, 8.0);
        group.add(Block::boxed(
            BlockRole::Cloud,
            [x, y, z],
            [edge, edge * 0.5, edge],
            color,
        ));
    }
    group
}
