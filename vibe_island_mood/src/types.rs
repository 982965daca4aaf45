// Core value types for mood derivation.
//
// `MoodState` is the single record the whole app revolves around: the
// controller owns exactly one, every input produces a brand-new one, and the
// scene and audio presenters read it. `MoodPreset` is a static catalog entry
// loaded with the config and never mutated.
//
// `HouseTier` and `Weather` are closed enums. `HouseTier` serializes as the
// bare integer 1/2/3 and `Weather` as a lowercase string, so saved input
// scripts and `--json` output stay readable.
//
// See also: `config.rs` for the catalog and thresholds, `engine.rs` for the
// functions that produce new states, `describe.rs` for the sentence tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest valid life level. The lowest is 0.
pub const MAX_LEVEL: u8 = 100;

// ---------------------------------------------------------------------------
// Weather
// ---------------------------------------------------------------------------

/// Sky condition shown over the island.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    Sunny,
    Cloudy,
    Rain,
    Storm,
    Snow,
    Night,
}

impl Weather {
    pub const ALL: [Weather; 6] = [
        Weather::Sunny,
        Weather::Cloudy,
        Weather::Rain,
        Weather::Storm,
        Weather::Snow,
        Weather::Night,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Weather::Sunny => "sunny",
            Weather::Cloudy => "cloudy",
            Weather::Rain => "rain",
            Weather::Storm => "storm",
            Weather::Snow => "snow",
            Weather::Night => "night",
        }
    }

    /// Rain and storm both drop rain particles.
    pub fn is_wet(self) -> bool {
        matches!(self, Weather::Rain | Weather::Storm)
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// House tier
// ---------------------------------------------------------------------------

/// Discrete house quality, derived from the life level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HouseTier {
    /// Tier 1: stacked shacks.
    Shack,
    /// Tier 2: cozy stable home.
    Home,
    /// Tier 3: soft-life villa.
    Villa,
}

impl HouseTier {
    pub fn number(self) -> u8 {
        match self {
            HouseTier::Shack => 1,
            HouseTier::Home => 2,
            HouseTier::Villa => 3,
        }
    }
}

impl From<HouseTier> for u8 {
    fn from(tier: HouseTier) -> u8 {
        tier.number()
    }
}

impl TryFrom<u8> for HouseTier {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(HouseTier::Shack),
            2 => Ok(HouseTier::Home),
            3 => Ok(HouseTier::Villa),
            other => Err(format!("house tier must be 1, 2 or 3, got {other}")),
        }
    }
}

impl fmt::Display for HouseTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

// ---------------------------------------------------------------------------
// State records
// ---------------------------------------------------------------------------

/// The complete mood state. Immutable by convention: derivations return a
/// new value rather than editing one in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodState {
    /// 0–100 vibe intensity.
    pub life_level: u8,
    /// Always `classify(life_level)` under the active thresholds.
    pub house_tier: HouseTier,
    pub weather: Weather,
    /// Tier + weather summary, plus interpretation notes for text input.
    pub description: String,
    /// Preset label, or the custom tag for text-derived states.
    pub tag: String,
}

/// A named bundle of (level, weather, description) selectable as one unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodPreset {
    pub label: String,
    pub level: u8,
    pub weather: Weather,
    pub description: String,
}

impl MoodPreset {
    pub fn new(label: &str, level: u8, weather: Weather, description: &str) -> Self {
        Self {
            label: label.to_string(),
            level,
            weather,
            description: description.to_string(),
        }
    }
}

/// Convert a raw numeric input to a life level: round to the nearest integer
/// and clamp to `[0, MAX_LEVEL]`. NaN maps to `fallback`.
pub fn level_from_f64(value: f64, fallback: u8) -> u8 {
    if value.is_nan() {
        return fallback.min(MAX_LEVEL);
    }
    value.round().clamp(0.0, f64::from(MAX_LEVEL)) as u8
}

/// Clamp an integer accumulator to `[0, MAX_LEVEL]`.
pub fn level_from_i32(value: i32) -> u8 {
    value.clamp(0, i32::from(MAX_LEVEL)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Weather::Storm).unwrap(), "\"storm\"");
        let w: Weather = serde_json::from_str("\"night\"").unwrap();
        assert_eq!(w, Weather::Night);
    }

    #[test]
    fn tier_serializes_as_number() {
        assert_eq!(serde_json::to_string(&HouseTier::Villa).unwrap(), "3");
        let t: HouseTier = serde_json::from_str("1").unwrap();
        assert_eq!(t, HouseTier::Shack);
        assert!(serde_json::from_str::<HouseTier>("4").is_err());
    }

    #[test]
    fn tiers_order_by_quality() {
        assert!(HouseTier::Shack < HouseTier::Home);
        assert!(HouseTier::Home < HouseTier::Villa);
    }

    #[test]
    fn level_from_f64_rounds_and_clamps() {
        assert_eq!(level_from_f64(42.4, 50), 42);
        assert_eq!(level_from_f64(42.5, 50), 43);
        assert_eq!(level_from_f64(-12.0, 50), 0);
        assert_eq!(level_from_f64(250.0, 50), 100);
        assert_eq!(level_from_f64(f64::INFINITY, 50), 100);
        assert_eq!(level_from_f64(f64::NEG_INFINITY, 50), 0);
        assert_eq!(level_from_f64(f64::NAN, 50), 50);
    }

    #[test]
    fn level_from_i32_clamps() {
        assert_eq!(level_from_i32(-5), 0);
        assert_eq!(level_from_i32(85), 85);
        assert_eq!(level_from_i32(180), 100);
    }

    #[test]
    fn only_rain_and_storm_are_wet() {
        let wet: Vec<Weather> = Weather::ALL.into_iter().filter(|w| w.is_wet()).collect();
        assert_eq!(wet, vec![Weather::Rain, Weather::Storm]);
    }
}
