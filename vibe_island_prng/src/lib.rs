// Seeded random numbers for Vibe Island scenes.
//
// xoshiro256++ (Blackman & Vigna, 2019), seeded through SplitMix64.
// Hand-rolled with zero external dependencies so the same seed produces the
// same island on every platform.
//
// This crate is the single PRNG used across Vibe Island: `vibe_island_scene`
// draws island heights, missing shack blocks, prop scatter, cloud layout,
// particle spawn positions, light flicker and lightning timing from it. The
// mood crate itself is fully deterministic and never needs randomness.
//
// Independent streams are derived with `VibeRng::derive(seed, stream)` so
// that, for example, rebuilding the house never perturbs the per-frame
// flicker sequence.
//
// **Critical constraint: determinism.** Every method on `VibeRng` must produce
// identical output given the same prior state, regardless of platform or
// optimization level. No OS entropy, no system time.

use serde::{Deserialize, Serialize};

/// xoshiro256++ state. Cheap to clone; serializes as its four state words.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VibeRng {
    s: [u64; 4],
}

impl VibeRng {
    /// Expand `seed` into the 256-bit state with SplitMix64.
    pub fn new(seed: u64) -> Self {
        let mut sm = seed;
        Self {
            s: [
                splitmix64(&mut sm),
                splitmix64(&mut sm),
                splitmix64(&mut sm),
                splitmix64(&mut sm),
            ],
        }
    }

    /// Create a generator for a named sub-stream of `seed`.
    ///
    /// Two different `stream` values give unrelated sequences; the same
    /// `(seed, stream)` pair always gives the same sequence.
    pub fn derive(seed: u64, stream: u64) -> Self {
        let mut sm = seed ^ stream.wrapping_mul(0x9e37_79b9_7f4a_7c15);
        Self::new(splitmix64(&mut sm))
    }

    pub fn next_u64(&mut self) -> u64 {
        let result = (self.s[0].wrapping_add(self.s[3]))
            .rotate_left(23)
            .wrapping_add(self.s[0]);

        let t = self.s[1] << 17;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];

        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);

        result
    }

    /// Generate a uniform `f32` in [0, 1) from the upper 24 bits.
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Uniform in `[low, high)`. Panics unless `low < high`.
    pub fn range_f32(&mut self, low: f32, high: f32) -> f32 {
        assert!(low < high, "range_f32: low must be less than high");
        low + self.next_f32() * (high - low)
    }

    /// Generate a value in `[-half_extent, half_extent)`, the scatter pattern
    /// used for particles and flashes centered on the island.
    pub fn centered_f32(&mut self, half_extent: f32) -> f32 {
        (self.next_f32() - 0.5) * 2.0 * half_extent
    }

    /// Unbiased integer in `[low, high)` (rejection sampling). Panics unless
    /// `low < high`.
    pub fn range_u64(&mut self, low: u64, high: u64) -> u64 {
        assert!(low < high, "range_u64: low must be less than high");
        let range = high - low;
        if range.is_power_of_two() {
            return low + (self.next_u64() & (range - 1));
        }
        let threshold = range.wrapping_neg() % range;
        loop {
            let r = self.next_u64();
            if r >= threshold {
                return low + (r % range);
            }
        }
    }

    pub fn range_usize(&mut self, low: usize, high: usize) -> usize {
        self.range_u64(low as u64, high as u64) as usize
    }

    /// Pick one element of a non-empty slice uniformly.
    ///
    /// Panics if `items` is empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.range_usize(0, items.len())]
    }

    /// Return `true` with probability `p`. `p <= 0.0` never fires,
    /// `p >= 1.0` always does.
    pub fn random_bool(&mut self, p: f32) -> bool {
        self.next_f32() < p
    }
}

/// One SplitMix64 step.
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = VibeRng::new(42);
        let mut b = VibeRng::new(42);
        for _ in 0..1000 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn derived_streams_differ_but_repeat() {
        let mut island = VibeRng::derive(7, 1);
        let mut house = VibeRng::derive(7, 2);
        assert_ne!(island.next_u64(), house.next_u64());

        let mut again = VibeRng::derive(7, 1);
        let mut island = VibeRng::derive(7, 1);
        for _ in 0..100 {
            assert_eq!(island.next_u64(), again.next_u64());
        }
    }

    #[test]
    fn next_f32_is_a_unit_fraction() {
        let mut rng = VibeRng::new(12345);
        for _ in 0..10_000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v), "{v}");
        }
    }

    #[test]
    fn centered_stays_within_extent() {
        let mut rng = VibeRng::new(9);
        for _ in 0..10_000 {
            let v = rng.centered_f32(10.0);
            assert!((-10.0..10.0).contains(&v), "centered out of range: {v}");
        }
    }

    #[test]
    fn range_usize_respects_bounds() {
        let mut rng = VibeRng::new(555);
        for _ in 0..10_000 {
            let v = rng.range_usize(5, 15);
            assert!((5..15).contains(&v), "{v}");
        }
    }

    #[test]
    fn pick_reaches_every_element() {
        let mut rng = VibeRng::new(3);
        let palette = ["a", "b", "c"];
        let mut seen = [false; 3];
        for _ in 0..1000 {
            let p = rng.pick(&palette);
            let idx = palette.iter().position(|x| x == p).unwrap();
            seen[idx] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn random_bool_never_and_always() {
        let mut rng = VibeRng::new(42);
        for _ in 0..100 {
            assert!(!rng.random_bool(0.0));
            assert!(rng.random_bool(1.0));
        }
    }

    #[test]
    fn restored_state_continues_the_sequence() {
        let mut rng = VibeRng::new(42);
        for _ in 0..100 {
            rng.next_u64();
        }
        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: VibeRng = serde_json::from_str(&json).unwrap();
        for _ in 0..100 {
            assert_eq!(rng.next_u64(), restored.next_u64());
        }
    }
}
