//! Deterministic random number generation for dealing.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical deals
//! - **Per-round streams**: Each round shuffles from its own stream, so a
//!   round can be replayed without replaying the rounds before it
//!
//! ```
//! use president::core::GameRng;
//!
//! let rng = GameRng::new(42);
//! let mut round_one = rng.for_round(1);
//! let mut again = GameRng::new(42).for_round(1);
//! assert_eq!(round_one.gen_range_usize(0..52), again.gen_range_usize(0..52));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Independent stream for one round's shuffle.
    ///
    /// The same seed and round number always produce the same stream.
    #[must_use]
    pub fn for_round(&self, round: u32) -> Self {
        Self::new(mix(self.seed.wrapping_add(u64::from(round).wrapping_mul(GOLDEN_GAMMA))))
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

// splitmix64 finalizer
fn mix(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range_usize(0..1000), rng2.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_round_streams_differ() {
        let rng = GameRng::new(7);
        let mut r1 = rng.for_round(1);
        let mut r2 = rng.for_round(2);

        let seq1: Vec<_> = (0..10).map(|_| r1.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| r2.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_round_stream_is_deterministic() {
        assert_eq!(GameRng::new(9).for_round(3).seed(), GameRng::new(9).for_round(3).seed());
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = GameRng::new(42);
        let mut data: Vec<u32> = (0..52).collect();

        rng.shuffle(&mut data);
        assert_ne!(data, (0..52).collect::<Vec<_>>());

        data.sort_unstable();
        assert_eq!(data, (0..52).collect::<Vec<_>>());
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3];
        assert!(items.contains(rng.choose(&items).unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }
}
