//! A simple pseudorandom number generator.
//!
//! Specifically, a translation of the *really* minimal C PCG32 implementation from <https://www.pcg-random.org/>, implemented to satisfy the [RngCore] and [SeedableRng] traits.[^note]
//!
//! PCG(32) was chosen as the default source of (pseudo)random numbers as it is simple, fast, and has some nice supporting documentation.
//!
//! Each procedure takes a source of rng as an argument, and so any [Rng](rand::Rng) may be used in place of [MinimalPCG32].
//!
//! The generator produces 32 bits at a time.
//! A 64 bit value is composed of two 32 bit values, low bits first, as sampling a probability or a range draws on all 64 bits.
//!
//! [^note]: At the time of writing, the C implementation is at the top of the [download page](https://www.pcg-random.org/download.html).

use rand_core::{impls, RngCore, SeedableRng};

/// State and increment
#[derive(Clone, Debug, Default)]
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
        /// Entirely unmotivated.
        const INCREMENT: u64 = 3215534235932367345;
        Self {
            state: (u64::from_le_bytes(seed)).wrapping_add(INCREMENT),
            inc: INCREMENT,
        }
    }
}

#[cfg(test)]
mod pcg_tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = MinimalPCG32::seed_from_u64(2);
        let mut b = MinimalPCG32::seed_from_u64(2);
        for _ in 0..64 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn distinct_seeds_diverge() {
        let mut a = MinimalPCG32::seed_from_u64(2);
        let mut b = MinimalPCG32::seed_from_u64(73);
        let a_values = (0..16).map(|_| a.next_u32()).collect::<Vec<_>>();
        let b_values = (0..16).map(|_| b.next_u32()).collect::<Vec<_>>();
        assert_ne!(a_values, b_values);
    }

    #[test]
    fn high_bits_are_used() {
        let mut rng = MinimalPCG32::seed_from_u64(11);
        assert!((0..64).any(|_| rng.next_u64() > u32::MAX as u64));
    }

    #[test]
    fn fair_coin() {
        let mut rng = MinimalPCG32::seed_from_u64(5);
        let heads = (0..10_000).filter(|_| rng.random_bool(0.5)).count();
        assert!((4_500..5_500).contains(&heads));
    }
}
