// Deterministic, portable pseudo-random number generator.
//
// Implements xoshiro256++ (Blackman & Vigna, 2019) with SplitMix64 seeding.
// Hand-rolled so that the output stream is identical on every platform and
// never shifts underneath us with an upstream crate release.
//
// This crate is the single PRNG used by `seedsong_music`: the seed draw,
// the drum pattern, and the melody walk all come from one `SongRng`.
//
// **Critical constraint: determinism.** A piece is identified by its seed.
// Every method on `SongRng` must produce identical output given the same
// prior state, regardless of platform, compiler version, or optimization
// level. This crate never reads OS entropy; picking a seed when the caller
// did not supply one is the binary's job.

use serde::{Deserialize, Serialize};

/// Xoshiro256++ PRNG — the project's sole source of randomness.
///
/// A generation run owns exactly one `SongRng`, reseeds it once from the
/// piece seed, then threads it by `&mut` through each generation stage in
/// a fixed order. Nothing else may draw from it mid-run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SongRng {
    s: [u64; 4],
}

impl SongRng {
    /// Create a new PRNG seeded from a `u64`.
    ///
    /// Uses SplitMix64 to expand the seed into the 256-bit internal state.
    /// Two `SongRng` instances created with the same seed will produce
    /// identical output sequences.
    pub fn new(seed: u64) -> Self {
        Self {
            s: expand_seed(seed),
        }
    }

    /// Replace the internal state as if freshly constructed with `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.s = expand_seed(seed);
    }

    /// Generate the next `u64` in the sequence.
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

    /// Generate a uniform `f64` in [0, 1).
    ///
    /// Uses the upper 53 bits of a `u64` to fill the mantissa of an f64.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Generate a uniform random integer in `[low, high)`.
    ///
    /// Uses rejection sampling to avoid modulo bias.
    /// Panics if `low >= high`.
    pub fn range_u64(&mut self, low: u64, high: u64) -> u64 {
        assert!(low < high, "range_u64: low must be less than high");
        let range = high - low;
        if range.is_power_of_two() {
            return low + (self.next_u64() & (range - 1));
        }
        // Rejection sampling to avoid modulo bias.
        let threshold = range.wrapping_neg() % range; // = (2^64 - range) % range
        loop {
            let r = self.next_u64();
            if r >= threshold {
                return low + (r % range);
            }
        }
    }

    /// Generate a uniform random `usize` in `[low, high)`.
    ///
    /// Panics if `low >= high`.
    pub fn range_usize(&mut self, low: usize, high: usize) -> usize {
        self.range_u64(low as u64, high as u64) as usize
    }

    /// Return `true` with probability `p`, `false` otherwise.
    ///
    /// Draws exactly one `next_f64()`. `p <= 0.0` always returns false,
    /// `p >= 1.0` always returns true.
    pub fn random_bool(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Pick one element uniformly. Returns `None` for an empty slice
    /// without consuming any randomness.
    pub fn choose<'a, T>(&mut self, candidates: &'a [T]) -> Option<&'a T> {
        if candidates.is_empty() {
            return None;
        }
        let idx = self.range_usize(0, candidates.len());
        candidates.get(idx)
    }
}

fn expand_seed(seed: u64) -> [u64; 4] {
    let mut sm = seed;
    [
        splitmix64(&mut sm),
        splitmix64(&mut sm),
        splitmix64(&mut sm),
        splitmix64(&mut sm),
    ]
}

/// SplitMix64 — used only for seeding xoshiro256++ from a single `u64`.
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
