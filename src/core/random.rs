use crate::domain::ports::RandomSource;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// 預設來源：執行緒本地 RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn rng(&self) -> Box<dyn RngCore> {
        Box::new(rand::thread_rng())
    }
}

/// Hands out a freshly seeded `StdRng` on every call, so identical inputs
/// produce identical passphrases.
#[derive(Debug, Clone, Copy)]
pub struct SeededRandom {
    seed: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl RandomSource for SeededRandom {
    fn rng(&self) -> Box<dyn RngCore> {
        Box::new(StdRng::seed_from_u64(self.seed))
    }
}
