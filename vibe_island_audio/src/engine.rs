// The ambient audio engine: a fixed voice graph retargeted by the mood.
//
// Graph (built by `init_audio()`):
//
//     pad   (sawtooth) ─┐
//     noise ─ lowpass  ─┼─ master ─ out
//     bell  (triangle) ─┤
//     rumbles (sine)   ─┘
//
// `update_audio()` retargets the pad from the life level and the noise,
// filter and bell from the weather layer. Nothing jumps except the master
// gain on mute; everything else slews via `AudioParam`. Storms also spawn a
// rumble one-shot per retarget, which `advance()` expires.
//
// The engine is inert until `init_audio()`: retargets are ignored and
// `toggle_mute()` only flips the flag, which `init_audio()` then honours.
// This mirrors a player that needs a user gesture before sound can start.

use crate::config::{AudioConfig, Target};
use crate::param::{AudioParam, ExpRamp};
use crate::voice::{OneShot, Voice, Waveform};
use serde::{Deserialize, Serialize};
use std::fmt;
use vibe_island_mood::MoodState;

/// The live voice graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AudioGraph {
    pub master: AudioParam,
    pub pad: Voice,
    pub noise: Voice,
    /// Low-pass cutoff on the noise voice, Hz.
    pub filter_cutoff: AudioParam,
    pub bell: Voice,
    pub one_shots: Vec<OneShot>,
}

impl AudioGraph {
    fn new(config: &AudioConfig, muted: bool) -> Self {
        Self {
            master: AudioParam::new(if muted { 0.0 } else { config.master_gain }),
            pad: Voice::oscillator(Waveform::Sawtooth, config.pad_frequency, config.pad_gain),
            noise: Voice::noise(0.0),
            filter_cutoff: AudioParam::new(config.filter_cutoff),
            bell: Voice::oscillator(Waveform::Triangle, config.bell_frequency, 0.0),
            one_shots: Vec::new(),
        }
    }

    fn advance(&mut self, dt: f32) {
        self.master.advance(dt);
        self.pad.advance(dt);
        self.noise.advance(dt);
        self.filter_cutoff.advance(dt);
        self.bell.advance(dt);
        for shot in &mut self.one_shots {
            shot.envelope.advance(dt);
        }
        self.one_shots.retain(|s| !s.is_finished());
    }
}

fn retarget(param: &mut AudioParam, target: Target) {
    param.set_target_at_time(target.value, target.tau);
}

/// Current values, for summaries and JSON output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AudioSnapshot {
    pub initialized: bool,
    pub muted: bool,
    pub master_gain: f32,
    pub pad_frequency: f32,
    pub pad_gain: f32,
    pub noise_gain: f32,
    pub filter_cutoff: f32,
    pub bell_frequency: f32,
    pub bell_gain: f32,
    pub one_shots: usize,
}

impl fmt::Display for AudioSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.initialized {
            return write!(f, "audio off{}", if self.muted { " (muted)" } else { "" });
        }
        write!(
            f,
            "master {:.2}{}, pad {:.0} Hz @ {:.3}, noise {:.2} < {:.0} Hz, bell {:.0} Hz @ {:.3}",
            self.master_gain,
            if self.muted { " (muted)" } else { "" },
            self.pad_frequency,
            self.pad_gain,
            self.noise_gain,
            self.filter_cutoff,
            self.bell_frequency,
            self.bell_gain,
        )?;
        if self.one_shots > 0 {
            write!(f, ", {} rumble", self.one_shots)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
pub struct AudioEngine {
    config: AudioConfig,
    graph: Option<AudioGraph>,
    muted: bool,
}

impl AudioEngine {
    pub fn new(config: AudioConfig) -> Self {
        Self {
            config,
            graph: None,
            muted: false,
        }
    }

    pub fn config(&self) -> &AudioConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.graph.is_some()
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn graph(&self) -> Option<&AudioGraph> {
        self.graph.as_ref()
    }

    /// Build the voice graph. Calling again is a no-op.
    pub fn init_audio(&mut self) {
        if self.graph.is_some() {
            return;
        }
        self.graph = Some(AudioGraph::new(&self.config, self.muted));
        tracing::debug!(muted = self.muted, "audio graph initialized");
    }

    /// Retarget every voice for `state`. Ignored before `init_audio()`.
    pub fn update_audio(&mut self, state: &MoodState) {
        let Some(graph) = &mut self.graph else {
            tracing::trace!("audio update before init ignored");
            return;
        };
        let config = &self.config;
        let level = state.life_level;

        graph
            .pad
            .frequency
            .set_target_at_time(config.pad_frequency_for(level), config.pad_frequency_tau);
        graph
            .pad
            .gain
            .set_target_at_time(config.pad_gain_for(level), config.pad_gain_tau);

        let layer = config.layer(state.weather);
        retarget(&mut graph.noise.gain, layer.noise_gain);
        if let Some(cutoff) = layer.filter_cutoff {
            retarget(&mut graph.filter_cutoff, cutoff);
        }
        if let Some(freq) = layer.bell_frequency {
            retarget(&mut graph.bell.frequency, freq);
        }
        retarget(&mut graph.bell.gain, layer.bell_gain);

        if layer.rumble {
            let r = &config.rumble;
            graph.one_shots.push(OneShot {
                waveform: Waveform::Sine,
                frequency: r.frequency,
                envelope: ExpRamp::new(r.start_gain, r.end_gain, r.duration),
            });
        }

        tracing::debug!(
            level,
            weather = state.weather.name(),
            pad_hz = graph.pad.frequency.target(),
            noise = graph.noise.gain.target(),
            "audio retargeted"
        );
    }

    /// Flip mute and return the new flag. The master gain changes at once.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        let gain = if self.muted { 0.0 } else { self.config.master_gain };
        if let Some(graph) = &mut self.graph {
            graph.master.set_value(gain);
        }
        tracing::debug!(muted = self.muted, "mute toggled");
        self.muted
    }

    /// Let `dt` seconds of audio time pass.
    pub fn advance(&mut self, dt: f32) {
        if let Some(graph) = &mut self.graph {
            graph.advance(dt);
        }
    }

    pub fn snapshot(&self) -> AudioSnapshot {
        match &self.graph {
            Some(g) => AudioSnapshot {
                initialized: true,
                muted: self.muted,
                master_gain: g.master.value(),
                pad_frequency: g.pad.frequency.value(),
                pad_gain: g.pad.gain.value(),
                noise_gain: g.noise.gain.value(),
                filter_cutoff: g.filter_cutoff.value(),
                bell_frequency: g.bell.frequency.value(),
                bell_gain: g.bell.gain.value(),
                one_shots: g.one_shots.len(),
            },
            None => AudioSnapshot {
                initialized: false,
                muted: self.muted,
                master_gain: 0.0,
                pad_frequency: 0.0,
                pad_gain: 0.0,
                noise_gain: 0.0,
                filter_cutoff: 0.0,
                bell_frequency: 0.0,
                bell_gain: 0.0,
                one_shots: 0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vibe_island_mood::{HouseTier, Weather};

    fn state(level: u8, weather: Weather) -> MoodState {
        MoodState {
            life_level: level,
            house_tier: HouseTier::Home,
            weather,
            description: String::new(),
            tag: "test".to_string(),
        }
    }

    fn settle(engine: &mut AudioEngine) {
        for _ in 0..1200 {
            engine.advance(1.0 / 60.0);
        }
    }

    #[test]
    fn update_before_init_is_a_noop() {
        let mut engine = AudioEngine::default();
        engine.update_audio(&state(80, Weather::Storm));
        assert!(!engine.is_initialized());
        assert!(engine.graph().is_none());
        assert!(!engine.snapshot().initialized);
    }

    #[test]
    fn init_builds_the_default_graph() {
        let mut engine = AudioEngine::default();
        engine.init_audio();
        let g = engine.graph().unwrap();
        assert_eq!(g.master.value(), 0.5);
        assert_eq!(g.pad.waveform, Waveform::Sawtooth);
        assert_eq!(g.pad.frequency.value(), 150.0);
        assert_eq!(g.pad.gain.value(), 0.08);
        assert_eq!(g.noise.gain.value(), 0.0);
        assert_eq!(g.filter_cutoff.value(), 600.0);
        assert_eq!(g.bell.waveform, Waveform::Triangle);
        assert_eq!(g.bell.frequency.value(), 440.0);
        assert_eq!(g.bell.gain.value(), 0.0);
    }

    #[test]
    fn init_is_idempotent() {
        let mut engine = AudioEngine::default();
        engine.init_audio();
        engine.update_audio(&state(90, Weather::Rain));
        engine.advance(0.5);
        let before = engine.graph().cloned();
        engine.init_audio();
        assert_eq!(engine.graph().cloned(), before);
    }

    #[test]
    fn mute_toggles_master_between_zero_and_half() {
        let mut engine = AudioEngine::default();
        engine.init_audio();
        assert!(engine.toggle_mute());
        assert_eq!(engine.graph().unwrap().master.value(), 0.0);
        assert!(!engine.toggle_mute());
        assert_eq!(engine.graph().unwrap().master.value(), 0.5);
    }

    #[test]
    fn mute_before_init_is_honoured_at_init() {
        let mut engine = AudioEngine::default();
        assert!(engine.toggle_mute());
        assert!(engine.graph().is_none());
        engine.init_audio();
        assert_eq!(engine.graph().unwrap().master.value(), 0.0);
    }

    #[test]
    fn parameters_converge_on_their_targets() {
        let mut engine = AudioEngine::default();
        engine.init_audio();
        engine.update_audio(&state(100, Weather::Snow));
        settle(&mut engine);
        let s = engine.snapshot();
        assert!((s.pad_frequency - 240.0).abs() < 0.01);
        assert!((s.pad_gain - 0.11).abs() < 1e-4);
        assert!((s.noise_gain - 0.06).abs() < 1e-4);
        assert!((s.filter_cutoff - 1800.0).abs() < 0.01);
        assert!((s.bell_frequency - 640.0).abs() < 0.01);
        assert!((s.bell_gain - 0.05).abs() < 1e-4);
    }

    #[test]
    fn night_keeps_the_previous_filter() {
        let mut engine = AudioEngine::default();
        engine.init_audio();
        engine.update_audio(&state(50, Weather::Rain));
        settle(&mut engine);
        engine.update_audio(&state(50, Weather::Night));
        settle(&mut engine);
        let s = engine.snapshot();
        assert!((s.filter_cutoff - 1200.0).abs() < 0.01);
        assert!((s.bell_frequency - 520.0).abs() < 0.01);
    }

    #[test]
    fn storm_rumble_fires_and_fades() {
        let mut engine = AudioEngine::default();
        engine.init_audio();
        engine.update_audio(&state(20, Weather::Storm));
        let g = engine.graph().unwrap();
        assert_eq!(g.one_shots.len(), 1);
        assert_eq!(g.one_shots[0].frequency, 60.0);
        assert_eq!(g.one_shots[0].gain(), 0.01);

        engine.advance(0.4);
        assert_eq!(engine.snapshot().one_shots, 1);
        engine.advance(0.5);
        assert_eq!(engine.snapshot().one_shots, 0);

        engine.update_audio(&state(20, Weather::Rain));
        assert_eq!(engine.snapshot().one_shots, 0);
    }

    #[test]
    fn snapshot_summary_mentions_mute() {
        let mut engine = AudioEngine::default();
        assert_eq!(engine.snapshot().to_string(), "audio off");
        engine.init_audio();
        engine.toggle_mute();
        assert!(engine.snapshot().to_string().contains("(muted)"));
    }
}
