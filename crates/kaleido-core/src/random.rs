use rand::prelude::*;

/// Injectable randomness for palette picks, decoration seeding and sparkle
/// placement. Behind a trait so tests can substitute a scripted sequence and
/// make `randomize()` fully deterministic.
pub trait RandomSource {
    /// Uniform value in [0, 1).
    fn unit(&mut self) -> f32;

    fn range(&mut self, min: f32, max: f32) -> f32 {
        min + (max - min) * self.unit()
    }

    /// Uniform integer in [min, max] inclusive.
    fn range_int(&mut self, min: usize, max: usize) -> usize {
        let span = (max - min) as f32 + 1.0;
        (min + (self.unit() * span) as usize).min(max)
    }

    fn chance(&mut self, probability: f32) -> bool {
        self.unit() < probability
    }
}

/// Default source backed by `StdRng` so a whole session can be replayed from
/// a single seed.
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededSource {
    fn unit(&mut self) -> f32 {
        self.rng.gen()
    }
}
