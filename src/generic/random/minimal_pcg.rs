//! A simple pseudorandom number generator.
//!
//! A translation of the *really* minimal C PCG32 implementation from
//! <https://www.pcg-random.org/>, implemented against [rand_core].[^note]
//!
//! PCG(32) is the default source of (pseudo)random numbers as it is simple,
//! fast, and has some nice supporting documentation.
//! As each [context](crate::context) is parameterised to its source of rng,
//! swapping the source is a matter of revising the parameter.
//!
//! [^note]: At the time of writing, the C implementation is at the top of the
//! [download page](https://www.pcg-random.org/download.html).

use rand::SeedableRng;
use rand_core::{RngCore, impls};

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

        let xorshifted = ((old_state >> 18) ^ old_state) >> 27;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_u32() as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        /// Entirely unmotivated.
        const INCREMENT: u64 = 3215534235932367344;
        Self {
            state: (u64::from_le_bytes(seed)).wrapping_add(INCREMENT),
            inc: INCREMENT,
        }
    }
}
