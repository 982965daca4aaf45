// Orbit camera framing that eases toward the current life level.
//
// Happier moods pull the camera in and lift it; low moods pull it back and
// down. Each frame the distance and lift move a fraction of the way to their
// targets (`dt * 0.6` and `dt * 0.5`, capped at 1 so a long frame lands
// exactly on target instead of overshooting). The orbit target bobs slowly
// on the scene clock.
//
// `distance` is the straight-line length of `position` from the world
// origin. Lift fixes the height, so the horizontal radius is whatever
// remains of `distance` once the height is taken out.

use serde::{Deserialize, Serialize};

const DISTANCE_RATE: f32 = 0.6;
const LIFT_RATE: f32 = 0.5;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraRig {
    pub position: [f32; 3],
    pub target: [f32; 3],
    /// Current length of `position` from the world origin.
    pub distance: f32,
    /// 0..=1 mirror of `level / 100`, eased.
    pub lift: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        let position = [18.0, 14.0, 18.0];
        Self {
            position,
            target: [0.0, 2.0, 0.0],
            distance: length(position),
            lift: 0.5,
        }
    }
}

fn length(v: [f32; 3]) -> f32 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

fn ease(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor.clamp(0.0, 1.0)
}

impl CameraRig {
    /// Distance the camera settles at for `level`.
    pub fn target_distance(level: u8, base: f32, per_level: f32) -> f32 {
        base + f32::from(100u8.saturating_sub(level)) * per_level
    }

    pub fn update(&mut self, dt: f32, elapsed: f32, level: u8, base: f32, per_level: f32) {
        let goal = Self::target_distance(level, base, per_level);
        self.distance = ease(self.distance, goal, dt * DISTANCE_RATE);
        self.lift = ease(self.lift, f32::from(level) / 100.0, dt * LIFT_RATE);

        // Keep the orbit angle, change only the radius.
        let angle = self.position[2].atan2(self.position[0]);
        let height = 10.0 + self.lift * 4.0;
        let radius = (self.distance * self.distance - height * height).max(0.0).sqrt();
        self.position = [angle.cos() * radius, height, angle.sin() * radius];
        self.target[1] = 1.5 + (elapsed * 0.4).sin() * 0.4;
    }
}
