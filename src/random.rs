use log::debug;
use rand::{seq::SliceRandom as _, thread_rng, Rng as _, SeedableRng as _};

use crate::cell::Direction;

/// Random number generator used for anything where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Source of the randomness the generator consumes.
///
/// Passed in by the caller, so a fixed seed (or a scripted stub) reproduces a maze exactly.
pub trait RandomSource {
    /// Uniformly distributed integer in `0..bound`. `bound` is never zero.
    fn below(&mut self, bound: usize) -> usize;

    /// Puts the four directions into a uniformly random order.
    fn shuffle_directions(&mut self, dirs: &mut [Direction; 4]) {
        for i in (1..dirs.len()).rev() {
            let j = self.below(i + 1);
            dirs.swap(i, j);
        }
    }
}

impl RandomSource for Random {
    fn below(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }

    fn shuffle_directions(&mut self, dirs: &mut [Direction; 4]) {
        dirs.shuffle(self);
    }
}

/// Seeds a [`Random`], drawing a fresh seed from the thread rng when none is given.
///
/// Returns the seed actually used, so a run can be reproduced.
pub fn seeded(seed: Option<u64>) -> (Random, u64) {
    let seed = seed.unwrap_or_else(|| thread_rng().gen());
    debug!("seeding generator with {seed}");
    (Random::seed_from_u64(seed), seed)
}
