// The mood engine: pure derivations from (input, prior state) to new state.
//
// `MoodEngine` owns a validated `MoodConfig` and exposes one function per
// input path plus `apply()`, which dispatches a `MoodInput`:
//
// - `apply_slider()`: round + clamp the raw value, reclassify the tier,
//   regenerate the description. Weather and tag carry over from the prior
//   state; a slider drag never changes the sky.
// - `apply_preset()`: exact label lookup, falling back to the first catalog
//   entry. The result is built entirely from the preset; the tier is
//   reclassified from the preset's level rather than stored in the catalog.
// - `interpret_text()`: lowercase, run the keyword rules in order into an
//   accumulator seeded with the neutral level/weather, then summarize with
//   the fired rules' notes. The prior state has no influence on the result.
//
// Every entry point is total. Nothing here returns `Result`; the only
// fallible step is constructing the engine from an unvalidated config.
//
// See also: `config.rs` for the tables, `rules.rs` for rule semantics,
// `describe.rs` for sentence synthesis.

use crate::config::{ConfigError, MoodConfig};
use crate::describe::{describe, summarize};
use crate::input::MoodInput;
use crate::rules::Accumulator;
use crate::types::{MoodPreset, MoodState, level_from_f64, level_from_i32};
use smallvec::SmallVec;

/// Result of free-text interpretation: the new state plus the indices of
/// the rules that fired, in evaluation order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interpretation {
    pub state: MoodState,
    pub fired: SmallVec<[usize; 8]>,
}

#[derive(Clone, Debug, Default)]
pub struct MoodEngine {
    config: MoodConfig,
}

impl MoodEngine {
    /// Wrap a config, validating it first.
    pub fn new(config: MoodConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MoodConfig {
        &self.config
    }

    pub fn presets(&self) -> &[MoodPreset] {
        &self.config.presets
    }

    pub fn initial_state(&self) -> MoodState {
        self.config.initial_state.clone()
    }

    /// Exact, case-sensitive catalog lookup.
    pub fn find_preset(&self, label: &str) -> Option<&MoodPreset> {
        self.config.presets.iter().find(|p| p.label == label)
    }

    /// Dispatch an input to the matching derivation.
    pub fn apply(&self, input: &MoodInput, prior: &MoodState) -> MoodState {
        match input {
            MoodInput::Slider { value } => self.apply_slider(*value, prior),
            MoodInput::Preset { label } => self.apply_preset(label, prior),
            MoodInput::Text { text } => self.interpret_text(text, prior),
        }
    }

    pub fn apply_slider(&self, value: f64, prior: &MoodState) -> MoodState {
        let level = level_from_f64(value, self.config.neutral_level);
        let tier = self.config.tier_thresholds.classify(level);
        let state = MoodState {
            life_level: level,
            house_tier: tier,
            weather: prior.weather,
            description: describe(tier, prior.weather),
            tag: prior.tag.clone(),
        };
        tracing::debug!(
            raw = value,
            level,
            tier = %tier,
            weather = %state.weather,
            "slider applied"
        );
        state
    }

    /// Build a state from a catalog preset. The prior state is accepted for
    /// symmetry with the other paths but contributes nothing.
    pub fn apply_preset(&self, label: &str, _prior: &MoodState) -> MoodState {
        let preset = match self.find_preset(label) {
            Some(p) => p,
            None => {
                let fallback = self.fallback_preset();
                tracing::debug!(
                    requested = label,
                    fallback = %fallback.label,
                    "unknown preset, using first catalog entry"
                );
                fallback
            }
        };
        let tier = self.config.tier_thresholds.classify(preset.level);
        tracing::debug!(
            label = %preset.label,
            level = preset.level,
            tier = %tier,
            weather = %preset.weather,
            "preset applied"
        );
        MoodState {
            life_level: preset.level,
            house_tier: tier,
            weather: preset.weather,
            description: preset.description.clone(),
            tag: preset.label.clone(),
        }
    }

    pub fn interpret_text(&self, text: &str, prior: &MoodState) -> MoodState {
        self.interpret(text, prior).state
    }

    /// Free-text interpretation, also reporting which rules fired.
    pub fn interpret(&self, text: &str, _prior: &MoodState) -> Interpretation {
        let lowered = text.to_lowercase();
        let mut acc = Accumulator::new(self.config.neutral_level, self.config.neutral_weather);
        let mut fired: SmallVec<[usize; 8]> = SmallVec::new();

        for (index, rule) in self.config.rules.iter().enumerate() {
            if rule.matches(&lowered) {
                acc.absorb(rule);
                fired.push(index);
                tracing::trace!(
                    rule = index,
                    level = acc.level,
                    weather = %acc.weather,
                    "rule fired"
                );
            }
        }

        let level = level_from_i32(acc.level);
        let tier = self.config.tier_thresholds.classify(level);
        let notes: SmallVec<[&str; 8]> = fired
            .iter()
            .map(|&i| self.config.rules[i].note.as_str())
            .collect();
        let state = MoodState {
            life_level: level,
            house_tier: tier,
            weather: acc.weather,
            description: summarize(tier, acc.weather, notes.as_slice()),
            tag: self.config.custom_tag.clone(),
        };
        tracing::debug!(
            level,
            tier = %tier,
            weather = %state.weather,
            rules_fired = fired.len(),
            "text interpreted"
        );
        Interpretation { state, fired }
    }

    // Non-empty by validation in `new()` and `MoodConfig::default()`.
    fn fallback_preset(&self) -> &MoodPreset {
        &self.config.presets[0]
    }
}
