//! A simple pseudorandom number generator.
//!
//! Specifically, the *really* minimal C PCG32 generator from <https://www.pcg-random.org/>, implemented as a [RngCore] so it may be used anywhere a [rand::Rng] is expected.
//!
//! A [context](crate::context) holds a source of rng, used for [random](crate::config::Polarity::Random) decisions.
//! As the generator is seeded from the [configuration](crate::config::Config::seed), a solve is reproducible.

use rand::SeedableRng;
use rand_core::{impls, RngCore};

/// State and increment.
#[derive(Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc);

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        /// The increment must be odd.
        const INCREMENT: u64 = 1442695040888963407;
        let mut pcg = Self {
            state: 0,
            inc: INCREMENT,
        };
        pcg.next_u32();
        pcg.state = pcg.state.wrapping_add(u64::from_le_bytes(seed));
        pcg.next_u32();
        pcg
    }
}

#[cfg(test)]
mod pcg_tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = MinimalPCG32::seed_from_u64(73);
        let mut b = MinimalPCG32::seed_from_u64(73);
        for _ in 0..32 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn distinct_seeds() {
        let mut a = MinimalPCG32::from_seed(2u64.to_le_bytes());
        let mut b = MinimalPCG32::from_seed(3u64.to_le_bytes());
        let a_sequence = (0..8).map(|_| a.next_u32()).collect::<Vec<_>>();
        let b_sequence = (0..8).map(|_| b.next_u32()).collect::<Vec<_>>();
        assert_ne!(a_sequence, b_sequence);
    }
}
