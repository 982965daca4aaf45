// Linear RGB colour used by blocks, lights, sky and fog.
//
// Stored as three f32 channels in [0, 1]. Constructed from 0xRRGGBB
// literals so palettes read like the hex swatches they were picked from.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::hex(0xffffff);

    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as f32 / 255.0,
            g: ((rgb >> 8) & 0xff) as f32 / 255.0,
            b: (rgb & 0xff) as f32 / 255.0,
        }
    }

    /// Linear interpolation toward `other`; `t` is clamped to [0, 1].
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    pub fn scaled(self, factor: f32) -> Color {
        Color {
            r: (self.r * factor).clamp(0.0, 1.0),
            g: (self.g * factor).clamp(0.0, 1.0),
            b: (self.b * factor).clamp(0.0, 1.0),
        }
    }

    pub fn to_hex(self) -> u32 {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (q(self.r) << 16) | (q(self.g) << 8) | q(self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip() {
        for rgb in [0x000000, 0xffffff, 0x2c2f3a, 0x7fc5ff] {
            assert_eq!(Color::hex(rgb).to_hex(), rgb);
        }
    }

    #[test]
    fn lerp_endpoints_and_clamp() {
        let a = Color::hex(0x000000);
        let b = Color::hex(0xffffff);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 7.0), b);
    }

    #[test]
    fn scaled_darkens() {
        assert_eq!(Color::hex(0x646464).scaled(0.5).to_hex(), 0x323232);
    }

    #[test]
    fn displays_as_css_hex() {
        assert_eq!(Color::hex(0x1a1c25).to_string(), "#1a1c25");
    }
}
