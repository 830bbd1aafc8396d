#![allow(dead_code)]

pub mod targets;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

pub fn boxed(seed: u64) -> Box<dyn rand::RngCore> {
    Box::new(seeded(seed))
}
