// Voices: an oscillator or noise source feeding its own gain stage.

use crate::param::{AudioParam, ExpRamp};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    Sine,
    Sawtooth,
    Triangle,
    /// Looping white noise; has no pitch.
    Noise,
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Waveform::Sine => "sine",
            Waveform::Sawtooth => "sawtooth",
            Waveform::Triangle => "triangle",
            Waveform::Noise => "noise",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    pub waveform: Waveform,
    /// Oscillator frequency in Hz. Noise voices keep this at 0.
    pub frequency: AudioParam,
    pub gain: AudioParam,
}

impl Voice {
    pub fn oscillator(waveform: Waveform, frequency: f32, gain: f32) -> Self {
        Self {
            waveform,
            frequency: AudioParam::new(frequency),
            gain: AudioParam::new(gain),
        }
    }

    pub fn noise(gain: f32) -> Self {
        Self {
            waveform: Waveform::Noise,
            frequency: AudioParam::new(0.0),
            gain: AudioParam::new(gain),
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.frequency.advance(dt);
        self.gain.advance(dt);
    }
}

/// One low sine thump whose gain falls away exponentially, then stops.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OneShot {
    pub waveform: Waveform,
    pub frequency: f32,
    pub envelope: ExpRamp,
}

impl OneShot {
    pub fn gain(&self) -> f32 {
        self.envelope.value()
    }

    pub fn is_finished(&self) -> bool {
        self.envelope.is_finished()
    }
}
