// The island: a dense voxel grid of ground columns over a water plate.
//
// Voxels are stored as a flat `Vec<Voxel>` indexed by
// `x + z * size_x + y * size_x * size_z`, giving O(1) read/write. Grid
// coordinates are non-negative; world coordinates are centred on the island,
// so grid (r, 0, r) sits at world (0, 0, 0). Out-of-bounds reads return
// `Air`; out-of-bounds writes are no-ops.
//
// Generation walks the (2r+1)² footprint, keeps columns inside a wobbling
// circle (`dist <= r + sin((x + z) * 0.2)`), and stacks
// `max(1, round(2 + sin(0.4x)cos(0.3z)*0.6 + rand*0.3))` ground voxels, each
// with a random tint between the base and accent stone colours.
//
// The island is built once per `Scene` and never rebuilt; only the house,
// props and weather change with the mood.
//
// **Critical constraint: determinism.** All randomness comes from the
// `VibeRng` handed in, so one seed always gives one island.

use crate::color::Color;
use crate::parts::{Block, BlockRole};
use serde::{Deserialize, Serialize};
use std::fmt;
use vibe_island_prng::VibeRng;

const BASE_STONE: Color = Color::hex(0x2c2f3a);
const ACCENT_STONE: Color = Color::hex(0x232531);
const WATER: Color = Color::hex(0x1a2335);

/// Upper bound of the random tint, as a fraction of the way to the accent.
const MAX_TINT: f32 = 0.3;

/// A position in the island grid, in voxel units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VoxelCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelCoord {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for VoxelCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Voxel {
    #[default]
    Air,
    /// Ground with a tint in 0..=255 mapping to `[0, MAX_TINT]` of the way
    /// from base stone to accent stone.
    Ground(u8),
}

impl Voxel {
    pub fn is_solid(self) -> bool {
        self != Voxel::Air
    }
}

/// The water disc under the island, a truncated cone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaterPlate {
    pub radius_top: f32,
    pub radius_bottom: f32,
    pub height: f32,
    pub center_y: f32,
    pub color: Color,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IslandGrid {
    voxels: Vec<Voxel>,
    pub size_x: u32,
    pub size_y: u32,
    pub size_z: u32,
    /// Grid x/z of world origin.
    pub center: i32,
}

impl IslandGrid {
    /// An all-air grid with a `(2 * radius + 1)` square footprint.
    pub fn new(radius: i32, height: u32) -> Self {
        let side = (2 * radius.max(0) + 1) as u32;
        let total = (side as usize) * (height as usize) * (side as usize);
        Self {
            voxels: vec![Voxel::Air; total],
            size_x: side,
            size_y: height,
            size_z: side,
            center: radius.max(0),
        }
    }

    pub fn generate(radius: i32, max_height: u32, rng: &mut VibeRng) -> Self {
        let mut grid = Self::new(radius, max_height);
        let r = radius as f32;
        for x in -radius..=radius {
            for z in -radius..=radius {
                let (fx, fz) = (x as f32, z as f32);
                let dist = (fx * fx + fz * fz).sqrt();
                if dist > r + ((fx + fz) * 0.2).sin() {
                    continue;
                }
                let noise = (fx * 0.4).sin() * (fz * 0.3).cos() * 0.6 + rng.next_f32() * 0.3;
                let h = ((2.0 + noise).round() as i32).max(1).min(max_height as i32);
                for y in 0..h {
                    let tint = (rng.next_f32() * 255.0) as u8;
                    grid.set(grid.to_grid(x, y, z), Voxel::Ground(tint));
                }
            }
        }
        grid
    }

    fn to_grid(&self, world_x: i32, y: i32, world_z: i32) -> VoxelCoord {
        VoxelCoord::new(world_x + self.center, y, world_z + self.center)
    }

    pub fn in_bounds(&self, coord: VoxelCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.z >= 0
            && (coord.x as u32) < self.size_x
            && (coord.y as u32) < self.size_y
            && (coord.z as u32) < self.size_z
    }

    fn index(&self, coord: VoxelCoord) -> Option<usize> {
        if self.in_bounds(coord) {
            let sx = self.size_x as usize;
            let sz = self.size_z as usize;
            Some(coord.x as usize + coord.z as usize * sx + coord.y as usize * sx * sz)
        } else {
            None
        }
    }

    pub fn get(&self, coord: VoxelCoord) -> Voxel {
        self.index(coord)
            .map(|i| self.voxels[i])
            .unwrap_or(Voxel::Air)
    }

    pub fn set(&mut self, coord: VoxelCoord, voxel: Voxel) {
        if let Some(i) = self.index(coord) {
            self.voxels[i] = voxel;
        }
    }

    pub fn solid_count(&self) -> usize {
        self.voxels.iter().filter(|v| v.is_solid()).count()
    }

    /// One unit cube per solid voxel, in world coordinates.
    pub fn blocks(&self) -> Vec<Block> {
        let mut out = Vec::with_capacity(self.solid_count());
        for y in 0..self.size_y as i32 {
            for z in 0..self.size_z as i32 {
                for x in 0..self.size_x as i32 {
                    if let Voxel::Ground(tint) = self.get(VoxelCoord::new(x, y, z)) {
                        let t = f32::from(tint) / 255.0 * MAX_TINT;
                        out.push(Block::cube(
                            BlockRole::Ground,
                            [(x - self.center) as f32, y as f32, (z - self.center) as f32],
                            1.0,
                            BASE_STONE.lerp(ACCENT_STONE, t),
                        ));
                    }
                }
            }
        }
        out
    }

    pub fn water(&self) -> WaterPlate {
        let r = self.center as f32;
        WaterPlate {
            radius_top: r + 4.0,
            radius_bottom: r + 6.0,
            height: 1.0,
            center_y: -0.7,
            color: WATER,
        }
    }
}
