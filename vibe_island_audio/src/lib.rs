// vibe_island_audio: headless ambient audio model for Vibe Island.
//
// Holds the parameter state of a small synth graph (pad, filtered noise,
// bell, storm rumbles) and how it slews toward mood-derived targets. No
// samples are produced; a host with a real audio backend would read the
// current values each block.
//
// Module overview:
// - `param.rs`:  AudioParam (exponential slew) and ExpRamp (fixed ramp).
// - `voice.rs`:  Waveform, Voice, OneShot.
// - `config.rs`: AudioConfig, initial graph values and per-weather layers.
// - `engine.rs`: AudioEngine, init_audio / update_audio / toggle_mute /
//                advance, plus AudioSnapshot for reporting.

pub mod config;
pub mod engine;
pub mod param;
pub mod voice;

pub use config::{AudioConfig, Target, WeatherLayer};
pub use engine::{AudioEngine, AudioGraph, AudioSnapshot};
pub use param::{AudioParam, ExpRamp};
pub use voice::{OneShot, Voice, Waveform};
