//! Seedable random source.
//!
//! All randomness flows through one RNG handle created here and passed by
//! mutable reference — never hidden global state. ChaCha8 keeps runs
//! reproducible across platforms for a fixed seed.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Creates a deterministic RNG from a seed.
pub fn create_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Shuffles a slice in place.
pub fn shuffle<T, R: Rng>(slice: &mut [T], rng: &mut R) {
    slice.shuffle(rng);
}
