// vibe_island_mood: pure mood derivation library.
//
// Maps an input event (slider position, preset label, free text) plus the
// prior state to a brand-new `MoodState`. It has no rendering, audio or I/O
// dependencies beyond optional config loading, and can be tested and
// benchmarked headless.
//
// Module overview:
// - `types.rs`:     MoodState, MoodPreset, HouseTier, Weather, level clamping.
// - `classify.rs`:  TierThresholds, life level → house tier (33/66 cut points).
// - `describe.rs`:  Tier/weather sentence tables and summary synthesis.
// - `rules.rs`:     KeywordRule + LevelEffect/WeatherEffect, the ordered
//                   free-text rule list, and the rule accumulator.
// - `config.rs`:    MoodConfig, thresholds, catalog, rules, initial state;
//                   JSON loading and validation (the crate's only errors).
// - `input.rs`:     MoodInput, the three input kinds, serde-tagged.
// - `engine.rs`:    MoodEngine, apply_slider / apply_preset / interpret_text.
//
// The scene and audio crates consume `MoodState`; the app crate owns the
// single live state and routes inputs through `MoodEngine::apply()`.
//
// **Critical constraint: totality.** Every derivation returns a valid state
// for every input. Out-of-range numbers clamp, unknown presets fall back to
// the first catalog entry, and unmatched text yields the neutral state.

pub mod classify;
pub mod config;
pub mod describe;
pub mod engine;
pub mod input;
pub mod rules;
pub mod types;

pub use config::{ConfigError, MoodConfig};
pub use engine::{Interpretation, MoodEngine};
pub use input::MoodInput;
pub use types::{HouseTier, MoodPreset, MoodState, Weather};
