// Keyword rules for free-text interpretation.
//
// A `KeywordRule` fires when any of its keywords occurs as a substring of
// the lowercased input. A fired rule applies a `LevelEffect` and a
// `WeatherEffect` to a running `Accumulator` and contributes its note.
//
// Rules are evaluated strictly in list order and are not mutually
// exclusive: a later rule sees (and may override or further clamp) what an
// earlier one produced. That ordering is the tie-break policy, e.g. "rich"
// sets the level to 85 but a later "tired" caps it at 40, and "tired" turns
// sunny into cloudy but a later "rain" sets rain outright.
//
// `default_rules()` is the canonical eight-rule list. Configs can supply
// their own list (see `config.rs`); keywords are lowercased on load.

use crate::types::Weather;
use serde::{Deserialize, Serialize};

/// What a fired rule does to the accumulated level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelEffect {
    Unchanged,
    Set(u8),
    /// Raise to at least this level.
    AtLeast(u8),
    /// Cap at this level.
    AtMost(u8),
}

impl LevelEffect {
    pub fn apply(self, level: i32) -> i32 {
        match self {
            LevelEffect::Unchanged => level,
            LevelEffect::Set(n) => i32::from(n),
            LevelEffect::AtLeast(n) => level.max(i32::from(n)),
            LevelEffect::AtMost(n) => level.min(i32::from(n)),
        }
    }

    /// The level literal carried by the effect, if any.
    pub fn target(self) -> Option<u8> {
        match self {
            LevelEffect::Unchanged => None,
            LevelEffect::Set(n) | LevelEffect::AtLeast(n) | LevelEffect::AtMost(n) => Some(n),
        }
    }
}

/// What a fired rule does to the accumulated weather.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherEffect {
    Unchanged,
    Set(Weather),
    /// Set `to` unless the current weather is `keep`.
    SetUnless { to: Weather, keep: Weather },
    /// Set `to` only if the current weather is `from`.
    ReplaceIf { from: Weather, to: Weather },
}

impl WeatherEffect {
    pub fn apply(self, weather: Weather) -> Weather {
        match self {
            WeatherEffect::Unchanged => weather,
            WeatherEffect::Set(w) => w,
            WeatherEffect::SetUnless { to, keep } => {
                if weather == keep {
                    weather
                } else {
                    to
                }
            }
            WeatherEffect::ReplaceIf { from, to } => {
                if weather == from {
                    to
                } else {
                    weather
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub keywords: Vec<String>,
    pub level: LevelEffect,
    pub weather: WeatherEffect,
    pub note: String,
}

impl KeywordRule {
    pub fn new(keywords: &[&str], level: LevelEffect, weather: WeatherEffect, note: &str) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            level,
            weather,
            note: note.to_string(),
        }
    }

    /// `lowered` must already be lowercased.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

/// Running (level, weather) value threaded through the rule list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accumulator {
    pub level: i32,
    pub weather: Weather,
}

impl Accumulator {
    pub fn new(level: u8, weather: Weather) -> Self {
        Self {
            level: i32::from(level),
            weather,
        }
    }

    /// Apply one rule's effects. Level first, then weather; the two are
    /// independent so the order between them does not matter.
    pub fn absorb(&mut self, rule: &KeywordRule) {
        self.level = rule.level.apply(self.level);
        self.weather = rule.weather.apply(self.weather);
    }
}

/// The canonical rule list, in evaluation order.
pub fn default_rules() -> Vec<KeywordRule> {
    use LevelEffect::*;
    vec![
        KeywordRule::new(
            &["rich", "villa", "luxury", "upgrade", "jackpot", "winner"],
            Set(85),
            WeatherEffect::Set(Weather::Sunny),
            "Feeling upgrade energy.",
        ),
        KeywordRule::new(
            &["party", "celebrate", "night"],
            AtLeast(80),
            WeatherEffect::Set(Weather::Night),
            "Lights go neon.",
        ),
        KeywordRule::new(
            &["tired", "burnout", "exhausted", "anxious", "stressed"],
            AtMost(40),
            WeatherEffect::ReplaceIf {
                from: Weather::Sunny,
                to: Weather::Cloudy,
            },
            "Energy low, clouds heavy.",
        ),
        KeywordRule::new(
            &["storm", "thunder", "lightning"],
            AtMost(35),
            WeatherEffect::Set(Weather::Storm),
            "Storm warnings engaged.",
        ),
        KeywordRule::new(
            &["rain", "drizzle", "wet"],
            AtMost(45),
            WeatherEffect::Set(Weather::Rain),
            "Grey drizzle incoming.",
        ),
        KeywordRule::new(
            &["snow", "winter", "cold"],
            AtLeast(50),
            WeatherEffect::Set(Weather::Snow),
            "Blue chill floating in.",
        ),
        KeywordRule::new(
            &["chill", "cozy", "comfy", "calm", "lazy"],
            AtLeast(55),
            WeatherEffect::SetUnless {
                to: Weather::Cloudy,
                keep: Weather::Storm,
            },
            "Cozy pace, steady rhythm.",
        ),
        KeywordRule::new(
            &["hopeful", "dream", "palm", "pool"],
            AtLeast(70),
            WeatherEffect::SetUnless {
                to: Weather::Sunny,
                keep: Weather::Night,
            },
            "Dreaming of pools and palms.",
        ),
    ]
}
