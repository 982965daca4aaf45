// Tunable audio graph constants and per-weather layer targets.
//
// `AudioConfig::default()` is the shipped mix. Every target is a
// `(value, tau)` pair handed to `AudioParam::set_target_at_time`; layers
// that leave a parameter alone use `None`.

use serde::{Deserialize, Serialize};
use vibe_island_mood::Weather;

/// A slew destination: reach toward `value` with time constant `tau`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub value: f32,
    pub tau: f32,
}

impl Target {
    pub const fn new(value: f32, tau: f32) -> Self {
        Self { value, tau }
    }
}

/// What one weather does to the noise and bell voices.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherLayer {
    pub noise_gain: Target,
    pub filter_cutoff: Option<Target>,
    pub bell_frequency: Option<Target>,
    pub bell_gain: Target,
    /// Fire a low rumble one-shot on every retarget.
    pub rumble: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RumbleParams {
    pub frequency: f32,
    pub start_gain: f32,
    pub end_gain: f32,
    pub duration: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Master gain when unmuted.
    pub master_gain: f32,

    /// Initial pad oscillator frequency (Hz) and gain.
    pub pad_frequency: f32,
    pub pad_gain: f32,
    /// Pad retarget: `base + level * per_level` Hz.
    pub pad_frequency_base: f32,
    pub pad_frequency_per_level: f32,
    pub pad_frequency_tau: f32,
    /// Pad retarget: `base + level / divisor`.
    pub pad_gain_base: f32,
    pub pad_gain_divisor: f32,
    pub pad_gain_tau: f32,

    /// Initial noise low-pass cutoff (Hz).
    pub filter_cutoff: f32,
    /// Initial bell frequency (Hz).
    pub bell_frequency: f32,

    pub rain: WeatherLayer,
    pub storm: WeatherLayer,
    pub snow: WeatherLayer,
    pub night: WeatherLayer,
    /// Sunny and cloudy.
    pub fair: WeatherLayer,

    pub rumble: RumbleParams,
}

impl AudioConfig {
    pub fn layer(&self, weather: Weather) -> &WeatherLayer {
        match weather {
            Weather::Rain => &self.rain,
            Weather::Storm => &self.storm,
            Weather::Snow => &self.snow,
            Weather::Night => &self.night,
            Weather::Sunny | Weather::Cloudy => &self.fair,
        }
    }

    pub fn pad_frequency_for(&self, level: u8) -> f32 {
        self.pad_frequency_base + f32::from(level) * self.pad_frequency_per_level
    }

    pub fn pad_gain_for(&self, level: u8) -> f32 {
        self.pad_gain_base + f32::from(level) / self.pad_gain_divisor
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            master_gain: 0.5,
            pad_frequency: 150.0,
            pad_gain: 0.08,
            pad_frequency_base: 120.0,
            pad_frequency_per_level: 1.2,
            pad_frequency_tau: 0.5,
            pad_gain_base: 0.06,
            pad_gain_divisor: 2000.0,
            pad_gain_tau: 0.4,
            filter_cutoff: 600.0,
            bell_frequency: 440.0,
            rain: WeatherLayer {
                noise_gain: Target::new(0.18, 0.3),
                filter_cutoff: Some(Target::new(1200.0, 0.2)),
                bell_frequency: None,
                bell_gain: Target::new(0.02, 1.4),
                rumble: false,
            },
            storm: WeatherLayer {
                noise_gain: Target::new(0.32, 0.2),
                filter_cutoff: Some(Target::new(800.0, 0.2)),
                bell_frequency: None,
                bell_gain: Target::new(0.01, 1.2),
                rumble: true,
            },
            snow: WeatherLayer {
                noise_gain: Target::new(0.06, 0.5),
                filter_cutoff: Some(Target::new(1800.0, 0.5)),
                bell_frequency: Some(Target::new(640.0, 0.4)),
                bell_gain: Target::new(0.05, 0.8),
                rumble: false,
            },
            night: WeatherLayer {
                noise_gain: Target::new(0.02, 0.6),
                filter_cutoff: None,
                bell_frequency: Some(Target::new(520.0, 0.4)),
                bell_gain: Target::new(0.08, 0.6),
                rumble: false,
            },
            fair: WeatherLayer {
                noise_gain: Target::new(0.04, 0.6),
                filter_cutoff: None,
                bell_frequency: Some(Target::new(720.0, 0.4)),
                bell_gain: Target::new(0.03, 0.8),
                rumble: false,
            },
            rumble: RumbleParams {
                frequency: 60.0,
                start_gain: 0.01,
                end_gain: 0.0001,
                duration: 0.8,
            },
        }
    }
}
