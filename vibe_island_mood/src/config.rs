// Data-driven mood configuration.
//
// Every tunable of the derivation lives in `MoodConfig`: tier thresholds,
// the neutral level/weather that text interpretation starts from, the
// initial state, the preset catalog, the tag given to text-derived states,
// and the ordered keyword rule list. `MoodConfig::default()` is the
// canonical configuration; a JSON file can replace any of it, and fields
// the file leaves out keep their default values.
//
// Loading is the only fallible step in the crate. `from_json()` parses,
// lowercases rule keywords, then runs `validate()`, which rejects configs
// that would break the derivation's totality or its invariants: an empty
// preset catalog (the unknown-label fallback needs a first entry), cut
// points that make a tier unreachable, levels above 100, an initial state
// whose tier disagrees with its level, and empty keywords (which would
// match every input).
//
// See also: `engine.rs` which owns a validated `MoodConfig`,
// `rules.rs` for `KeywordRule`, `classify.rs` for `TierThresholds`.

use crate::classify::TierThresholds;
use crate::rules::{KeywordRule, default_rules};
use crate::types::{HouseTier, MAX_LEVEL, MoodPreset, MoodState, Weather};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("preset catalog is empty")]
    EmptyCatalog,

    #[error("tier thresholds must satisfy low < high < 100, got low={low} high={high}")]
    Thresholds { low: u8, high: u8 },

    #[error("{what} has level {level}, above the maximum of 100")]
    LevelOutOfRange { what: String, level: u8 },

    #[error("initial state has level {level} but tier {tier}, expected tier {expected}")]
    TierMismatch {
        level: u8,
        tier: HouseTier,
        expected: HouseTier,
    },

    #[error("rule {index} has an empty keyword")]
    EmptyKeyword { index: usize },
}

/// Top-level mood configuration. Loaded once, never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoodConfig {
    pub tier_thresholds: TierThresholds,

    /// Level that text interpretation starts from before any rule fires.
    pub neutral_level: u8,

    /// Weather that text interpretation starts from before any rule fires.
    pub neutral_weather: Weather,

    /// State the controller starts in.
    pub initial_state: MoodState,

    /// Preset catalog. The first entry doubles as the fallback for unknown
    /// labels.
    pub presets: Vec<MoodPreset>,

    /// Tag assigned to states produced by free-text interpretation.
    pub custom_tag: String,

    /// Keyword rules, evaluated in order.
    pub rules: Vec<KeywordRule>,
}

impl Default for MoodConfig {
    fn default() -> Self {
        Self {
            tier_thresholds: TierThresholds::default(),
            neutral_level: 50,
            neutral_weather: Weather::Sunny,
            initial_state: MoodState {
                life_level: 50,
                house_tier: HouseTier::Home,
                weather: Weather::Sunny,
                description: "Balanced vibes, cozy home, mild breeze.".to_string(),
                tag: "Calm".to_string(),
            },
            presets: default_presets(),
            custom_tag: "Custom vibe".to_string(),
            rules: default_rules(),
        }
    }
}

impl MoodConfig {
    /// Parse, normalize and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: MoodConfig = serde_json::from_str(json)?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Lowercase every rule keyword so matching against lowercased input
    /// is case-insensitive.
    pub fn normalize(&mut self) {
        for rule in &mut self.rules {
            for keyword in &mut rule.keywords {
                *keyword = keyword.to_lowercase();
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = self.tier_thresholds;
        if !t.is_valid() {
            return Err(ConfigError::Thresholds {
                low: t.low,
                high: t.high,
            });
        }
        if self.presets.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        check_level("neutral level", self.neutral_level)?;
        check_level("initial state", self.initial_state.life_level)?;
        for preset in &self.presets {
            check_level(&format!("preset '{}'", preset.label), preset.level)?;
        }
        for (index, rule) in self.rules.iter().enumerate() {
            if let Some(level) = rule.level.target() {
                check_level(&format!("rule {index}"), level)?;
            }
            if rule.keywords.iter().any(|k| k.is_empty()) {
                return Err(ConfigError::EmptyKeyword { index });
            }
        }

        let expected = t.classify(self.initial_state.life_level);
        if expected != self.initial_state.house_tier {
            return Err(ConfigError::TierMismatch {
                level: self.initial_state.life_level,
                tier: self.initial_state.house_tier,
                expected,
            });
        }
        Ok(())
    }
}

fn check_level(what: &str, level: u8) -> Result<(), ConfigError> {
    if level > MAX_LEVEL {
        return Err(ConfigError::LevelOutOfRange {
            what: what.to_string(),
            level,
        });
    }
    Ok(())
}

/// The canonical preset catalog. "Calm" is first and is the fallback.
pub fn default_presets() -> Vec<MoodPreset> {
    use Weather::*;
    vec![
        MoodPreset::new("Calm", 45, Cloudy, "Calm day, muted colors and soft sky."),
        MoodPreset::new("Happy", 70, Sunny, "Bright beams and a cheerful villa vibe."),
        MoodPreset::new("Tired", 40, Cloudy, "Dim lights, steady drizzle energy."),
        MoodPreset::new("Stressed", 30, Rain, "Tight deadlines, rain-tapped roof."),
        MoodPreset::new("Burnout", 20, Storm, "Dark clouds, messy ground, thunder looming."),
        MoodPreset::new("Overthinking", 35, Rain, "Rainy loops and flickering street light."),
        MoodPreset::new("Chill Sunday", 55, Sunny, "Cozy house, soft breeze, brunch incoming."),
        MoodPreset::new("Party Mode", 85, Night, "Neon glow, villa lights, pool ready."),
        MoodPreset::new("Storm Season", 30, Storm, "Lightning flashes and drenched wood."),
        MoodPreset::new("Soft Life", 75, Sunny, "Upgraded villa, lazy palm shade."),
        MoodPreset::new("Lottery Winner", 95, Sunny, "Maxed-out villa and shimmering pool."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        MoodConfig::default().validate().unwrap();
    }

    #[test]
    fn default_config_roundtrips_through_json() {
        let config = MoodConfig::default();
        let json = config.to_json_pretty().unwrap();
        let restored = MoodConfig::from_json(&json).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn catalog_has_eleven_presets_with_calm_first() {
        let presets = default_presets();
        assert_eq!(presets.len(), 11);
        assert_eq!(presets[0].label, "Calm");
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let config = MoodConfig {
            presets: Vec::new(),
            ..MoodConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::EmptyCatalog)));
    }

    #[test]
    fn bad_thresholds_are_rejected() {
        let config = MoodConfig {
            tier_thresholds: TierThresholds { low: 70, high: 30 },
            ..MoodConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Thresholds { low: 70, high: 30 })
        ));
    }

    #[test]
    fn preset_level_above_100_is_rejected() {
        let mut config = MoodConfig::default();
        config.presets[3].level = 140;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Stressed"), "{err}");
    }

    #[test]
    fn initial_tier_must_match_level() {
        let mut config = MoodConfig::default();
        config.initial_state.house_tier = HouseTier::Villa;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TierMismatch { .. })
        ));
    }

    #[test]
    fn empty_keyword_is_rejected() {
        let mut config = MoodConfig::default();
        config.rules[2].keywords.push(String::new());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyKeyword { index: 2 })
        ));
    }

    #[test]
    fn keywords_are_lowercased_on_load() {
        let mut config = MoodConfig::default();
        config.rules[0].keywords = vec!["JACKPOT".to_string()];
        let json = serde_json::to_string(&config).unwrap();
        let loaded = MoodConfig::from_json(&json).unwrap();
        assert_eq!(loaded.rules[0].keywords, vec!["jackpot".to_string()]);
    }

    #[test]
    fn partial_json_keeps_default_catalog_and_rules() {
        let loaded =
            MoodConfig::from_json(r#"{"tier_thresholds": {"low": 30, "high": 70}}"#).unwrap();
        assert_eq!(loaded.tier_thresholds, TierThresholds { low: 30, high: 70 });
        assert_eq!(loaded.presets.len(), 11);
        assert_eq!(loaded.presets[0].label, "Calm");
        assert_eq!(loaded.rules, default_rules());
        assert_eq!(loaded.initial_state, MoodConfig::default().initial_state);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            MoodConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = MoodConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
