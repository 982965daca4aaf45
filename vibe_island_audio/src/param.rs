// Slewed audio parameters and one-shot exponential ramps.
//
// `AudioParam` models a continuously automatable value (frequency, gain,
// filter cutoff). Retargeting never jumps: the value decays toward the
// target with time constant `tau`, i.e.
//
//     v(t + dt) = target + (v(t) - target) * exp(-dt / tau)
//
// so after one `tau` it has covered ~63% of the gap. A `tau` of zero (or
// `set_value`) snaps immediately.
//
// `ExpRamp` is the other automation shape: a fixed-length exponential move
// from `start` to `end`, used for the storm rumble envelope. Both endpoints
// must be positive.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AudioParam {
    value: f32,
    target: f32,
    tau: f32,
}

impl AudioParam {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            target: value,
            tau: 0.0,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Jump to `value` now and stop any slew in progress.
    pub fn set_value(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.tau = 0.0;
    }

    /// Start slewing toward `target` with time constant `tau` seconds.
    pub fn set_target_at_time(&mut self, target: f32, tau: f32) {
        self.target = target;
        self.tau = tau.max(0.0);
        if self.tau == 0.0 {
            self.value = target;
        }
    }

    pub fn advance(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        if self.tau == 0.0 {
            self.value = self.target;
        } else {
            self.value = self.target + (self.value - self.target) * (-dt / self.tau).exp();
        }
    }

    pub fn is_settled(&self, epsilon: f32) -> bool {
        (self.value - self.target).abs() <= epsilon
    }
}

/// Exponential move from `start` to `end` over `duration` seconds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpRamp {
    pub start: f32,
    pub end: f32,
    pub duration: f32,
    pub age: f32,
}

impl ExpRamp {
    pub fn new(start: f32, end: f32, duration: f32) -> Self {
        Self {
            start,
            end,
            duration,
            age: 0.0,
        }
    }

    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.end;
        }
        let t = self.age / self.duration;
        self.start * (self.end / self.start).powf(t)
    }

    pub fn advance(&mut self, dt: f32) {
        self.age += dt.max(0.0);
    }

    pub fn is_finished(&self) -> bool {
        self.duration <= 0.0 || self.age >= self.duration
    }
}
