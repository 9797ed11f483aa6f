use std::ops::RangeInclusive;

use near_sdk::env;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Source of the uniform choices made by the engine. Production code uses
/// [`BlockRandomness`]; tests can substitute a scripted source.
pub trait RandomSource {
    /// Returns a value uniformly distributed over `range`.
    fn pick(&mut self, range: RangeInclusive<u32>) -> u32;
}

/// ChaCha20 stream keyed by the block random seed.
pub struct BlockRandomness {
    rng: ChaCha20Rng,
}

impl BlockRandomness {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self { rng: ChaCha20Rng::from_seed(seed) }
    }

    pub fn from_env() -> Self {
        let seed: [u8; 32] = env::random_seed()
            .try_into()
            .unwrap_or_else(|_| env::panic_str("random seed of incorrect length"));

        Self::from_seed(seed)
    }
}

impl RandomSource for BlockRandomness {
    fn pick(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.rng.gen_range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut first = BlockRandomness::from_seed([7; 32]);
        let mut second = BlockRandomness::from_seed([7; 32]);

        for _ in 0..50 {
            assert_eq!(first.pick(1..=10), second.pick(1..=10));
        }
    }

    #[test]
    fn test_picks_stay_in_range_and_cover_it() {
        let mut source = BlockRandomness::from_seed([42; 32]);
        let mut seen = [false; 10];

        for _ in 0..1_000 {
            let value = source.pick(1..=10);
            assert!((1..=10).contains(&value));
            seen[(value - 1) as usize] = true;
        }

        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    fn test_single_value_range() {
        let mut source = BlockRandomness::from_seed([0; 32]);
        assert_eq!(source.pick(0..=0), 0);
    }

    #[test]
    fn test_env_seed_is_used() {
        let mut from_env = BlockRandomness::from_env();
        let mut explicit = BlockRandomness::from_seed(env::random_seed().try_into().unwrap());
        assert_eq!(from_env.pick(0..=u32::MAX), explicit.pick(0..=u32::MAX));
    }
}
