// Scene graph leaves: blocks, lights, and the groups that hold them.
//
// A `Block` is an axis-aligned box (optionally yawed) with a colour and an
// opacity; stretched shapes (poles, slabs, clouds) are blocks with a
// non-uniform `size`. A `Light` is a point light with
// colour, intensity and range. `Group` is a flat list of both, the unit that
// `Scene` swaps wholesale when the house tier or weather changes.
//
// `BlockRole` tags each block with what it depicts so tests and summaries
// can ask "how many roof blocks" without comparing colours.

use crate::color::Color;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BlockRole {
    Ground,
    Wall,
    Roof,
    Glass,
    Pool,
    Porch,
    Pole,
    Crate,
    Car,
    Trunk,
    Leaves,
    Bush,
    Debris,
    Barrel,
    Bench,
    Mailbox,
    Path,
    Cloud,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub role: BlockRole,
    /// Centre in world units.
    pub center: [f32; 3],
    /// Full extent along x, y, z.
    pub size: [f32; 3],
    /// Rotation about the vertical axis, radians.
    pub yaw: f32,
    pub color: Color,
    /// 1.0 is opaque.
    pub opacity: f32,
}

impl Block {
    /// A cube of edge `edge` centred at `center`.
    pub fn cube(role: BlockRole, center: [f32; 3], edge: f32, color: Color) -> Self {
        Self::boxed(role, center, [edge, edge, edge], color)
    }

    pub fn boxed(role: BlockRole, center: [f32; 3], size: [f32; 3], color: Color) -> Self {
        Self {
            role,
            center,
            size,
            yaw: 0.0,
            color,
            opacity: 1.0,
        }
    }

    pub fn with_yaw(mut self, yaw: f32) -> Self {
        self.yaw = yaw;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: [f32; 3],
    pub color: Color,
    pub intensity: f32,
    /// Distance at which the light falls off to zero.
    pub range: f32,
    /// Flickering lights get a fresh random intensity every frame.
    pub flicker: bool,
}

impl Light {
    pub fn point(position: [f32; 3], color: Color, intensity: f32, range: f32) -> Self {
        Self {
            position,
            color,
            intensity,
            range,
            flicker: false,
        }
    }

    pub fn flickering(mut self) -> Self {
        self.flicker = true;
        self
    }
}

/// A light that removes itself after `remaining` seconds (halo glows,
/// lightning flashes).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransientLight {
    pub light: Light,
    pub remaining: f32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub blocks: Vec<Block>,
    pub lights: Vec<Light>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn count(&self, role: BlockRole) -> usize {
        self.blocks.iter().filter(|b| b.role == role).count()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty() && self.lights.is_empty()
    }
}
