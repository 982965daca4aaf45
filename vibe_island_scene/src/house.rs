// House and prop builders, one per tier.
//
// - Tier 1 (shack): 4×3×2 walls with ~12% of blocks missing, a random
//   brown palette, a crooked roof line, a street-light pole with a
//   flickering bulb, and three scattered crates.
// - Tier 2 (home): 4×4×3 walls striped by `(x + z + y) mod 3`, a flat roof,
//   a warm window light, a porch slab and a small tree.
// - Tier 3 (villa): 6×5×4 walls with the four vertical corners cut out, a
//   translucent glass roofline, a pool with an underwater glow, a car and
//   three garden lamps.
//
// Wall loops run from `-w/2` to `w/2` inclusive in unit steps, so an odd
// depth gives half-integer rows (the shack's z rows are -1.5..1.5).
//
// Props are scattered around the house: eight bushes always, plus debris
// and a barrel for the shack, a bench and mailbox for the home, and a tree
// and stone path for the villa.

use crate::color::Color;
use crate::parts::{Block, BlockRole, Group, Light};
use std::f32::consts::PI;
use vibe_island_mood::HouseTier;
use vibe_island_prng::VibeRng;

/// Inclusive unit-step range from `-extent/2` to `extent/2`.
fn span(extent: u32) -> impl Iterator<Item = f32> {
    let half = extent as f32 / 2.0;
    (0..=extent).map(move |i| -half + i as f32)
}

fn palette_index(n: i32, len: usize) -> usize {
    n.rem_euclid(len as i32) as usize
}

pub fn build_house(tier: HouseTier, rng: &mut VibeRng) -> Group {
    match tier {
        HouseTier::Shack => build_shack(rng),
        HouseTier::Home => build_home(),
        HouseTier::Villa => build_villa(),
    }
}

fn build_shack(rng: &mut VibeRng) -> Group {
    const PALETTE: [Color; 3] = [
        Color::hex(0x4a3b33),
        Color::hex(0x6b574d),
        Color::hex(0x51443d),
    ];
    const MISSING_CHANCE: f32 = 0.12;
    let (width, depth, height) = (4u32, 3u32, 2u32);
    let (w, d, h) = (width as f32, depth as f32, height as f32);

    let mut group = Group::new();
    for y in 0..height {
        for x in span(width) {
            for z in span(depth) {
                if rng.random_bool(MISSING_CHANCE) {
                    continue;
                }
                let color = *rng.pick(&PALETTE);
                group.add(Block::cube(BlockRole::Wall, [x, y as f32 + 1.0, z], 1.0, color));
            }
        }
    }
    for x in span(width) {
        let sag = x.sin() * 0.2;
        group.add(Block::cube(
            BlockRole::Roof,
            [x, h + 1.0 + sag, 0.0],
            1.0,
            Color::hex(0x3b332f),
        ));
    }

    group.add(Block::boxed(
        BlockRole::Pole,
        [-w, 0.6, d * 0.6],
        [0.3, 1.5, 0.3],
        Color::hex(0x555555),
    ));
    group.add_light(
        Light::point([-w, 3.4, d * 0.6], Color::hex(0xffddaa), 1.5, 6.0).flickering(),
    );

    for _ in 0..3 {
        let x = rng.range_f32(-2.0, 2.0);
        let z = rng.range_f32(-2.0, 2.0);
        group.add(Block::cube(BlockRole::Crate, [x, 0.4, z], 0.8, Color::hex(0x6d5845)));
    }
    group
}

fn build_home() -> Group {
    const PALETTE: [Color; 3] = [
        Color::hex(0xc8b5a6),
        Color::hex(0xc0a791),
        Color::hex(0xbca28b),
    ];
    let (width, depth, height) = (4u32, 4u32, 3u32);
    let (w, d, h) = (width as f32, depth as f32, height as f32);

    let mut group = Group::new();
    for y in 0..height {
        for x in span(width) {
            for z in span(depth) {
                let stripe = x as i32 + z as i32 + y as i32;
                let color = PALETTE[palette_index(stripe, PALETTE.len())];
                group.add(Block::cube(BlockRole::Wall, [x, y as f32 + 1.0, z], 1.0, color));
            }
        }
    }
    for x in span(width) {
        group.add(Block::cube(BlockRole::Roof, [x, h + 1.0, 0.0], 1.0, Color::hex(0x7f6e63)));
    }

    group.add_light(Light::point([0.0, 2.5, d / 2.0 + 0.5], Color::hex(0xffcc88), 1.2, 8.0));
    group.add(Block::boxed(
        BlockRole::Porch,
        [0.0, 0.4, d / 2.0 + 0.8],
        [2.4, 0.2, 1.0],
        Color::hex(0x8a7a72),
    ));
    group.add(Block::boxed(
        BlockRole::Trunk,
        [w, 1.0, d * 0.6],
        [0.5, 1.5, 0.5],
        Color::hex(0x5d3b1a),
    ));
    group.add(Block::cube(BlockRole::Leaves, [w, 2.8, d * 0.6], 1.5, Color::hex(0x3a9d62)));
    group
}

fn build_villa() -> Group {
    const PALETTE: [Color; 3] = [
        Color::hex(0xf2f5ff),
        Color::hex(0xe5e8f3),
        Color::hex(0xd9dce8),
    ];
    let (width, depth, height) = (6u32, 5u32, 4u32);
    let (w, d, h) = (width as f32, depth as f32, height as f32);

    let mut group = Group::new();
    for y in 0..height {
        for x in span(width) {
            for z in span(depth) {
                if x.abs() == w / 2.0 && z.abs() == d / 2.0 {
                    continue;
                }
                let color = PALETTE[palette_index(x as i32 + y as i32, PALETTE.len())];
                group.add(Block::cube(BlockRole::Wall, [x, y as f32 + 1.0, z], 1.0, color));
            }
        }
    }

    group.add(
        Block::boxed(
            BlockRole::Glass,
            [0.0, h + 1.4, 0.0],
            [w + 1.0, 0.2, d + 1.0],
            Color::hex(0xb7d7ff),
        )
        .with_opacity(0.35),
    );

    let pool_center = [w * 0.6, 0.25, -d * 0.2];
    group.add(
        Block::boxed(BlockRole::Pool, pool_center, [4.0, 0.5, 3.0], Color::hex(0x4fd4ff))
            .with_opacity(0.85),
    );
    group.add_light(Light::point(
        [pool_center[0], 1.0, pool_center[2]],
        Color::hex(0x6ff2ff),
        2.0,
        12.0,
    ));

    group.add(Block::boxed(
        BlockRole::Car,
        [-w, 0.4, d * 0.6],
        [1.8, 0.54, 0.9],
        Color::hex(0x5562ff),
    ));

    for i in 0..3 {
        group.add_light(Light::point(
            [-w + i as f32 * 2.5, 1.1, -d * 0.8],
            Color::hex(0xc7fff6),
            0.6,
            5.0,
        ));
    }
    group
}

pub fn build_props(tier: HouseTier, rng: &mut VibeRng) -> Group {
    let mut group = Group::new();
    for _ in 0..8 {
        let x = rng.range_f32(-6.0, 6.0);
        let z = rng.range_f32(-6.0, 6.0);
        let squash = 0.6 + rng.next_f32() * 0.4;
        group.add(Block::boxed(
            BlockRole::Bush,
            [x, 0.4, z],
            [0.6, 0.6 * squash, 0.6],
            Color::hex(0x2f6f4f),
        ));
    }

    match tier {
        HouseTier::Shack => {
            for _ in 0..8 {
                let x = rng.range_f32(-4.0, 4.0);
                let z = rng.range_f32(-4.0, 4.0);
                let yaw = rng.next_f32() * PI;
                group.add(
                    Block::cube(BlockRole::Debris, [x, 0.3, z], 0.6, Color::hex(0x3b3b3b))
                        .with_yaw(yaw),
                );
            }
            group.add(Block::cube(BlockRole::Barrel, [-5.0, 0.5, 4.0], 0.8, Color::hex(0x4b3b2a)));
        }
        HouseTier::Home => {
            group.add(Block::boxed(
                BlockRole::Bench,
                [2.0, 0.3, -4.0],
                [1.4, 0.2, 0.4],
                Color::hex(0x8b6b52),
            ));
            group.add(Block::boxed(
                BlockRole::Mailbox,
                [-5.0, 0.35, 5.0],
                [0.5, 0.7, 0.5],
                Color::hex(0xd14a4a),
            ));
        }
        HouseTier::Villa => {
            group.add(Block::cube(BlockRole::Leaves, [7.0, 2.4, 3.0], 1.4, Color::hex(0x2f8f5a)));
            group.add(Block::boxed(
                BlockRole::Trunk,
                [7.0, 1.2, 3.0],
                [0.6, 1.8, 0.6],
                Color::hex(0x6d4b2c),
            ));
            group.add(Block::boxed(
                BlockRole::Path,
                [0.0, 0.2, -6.0],
                [2.4, 0.09, 0.75],
                Color::hex(0xe7e9f2),
            ));
        }
    }
    group
}
