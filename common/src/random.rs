use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of every random decision the engine makes (food placement, spectator steering).
pub trait RandomSource {
    /// Uniform index in `[0, upper)`. `upper` must be non-zero.
    fn index_below(&mut self, upper: usize) -> usize;

    /// `true` with the given probability.
    fn chance(&mut self, probability: f64) -> bool;
}

pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SessionRng {
    fn index_below(&mut self, upper: usize) -> usize {
        assert!(upper > 0, "index_below called with an empty range");
        self.rng.random_range(0..upper)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.rng.random::<f64>() < probability
    }
}

/// Replays fixed sequences of indices and rolls.
///
/// Once a sequence runs out, indices fall back to `0` and rolls to `1.0`, so `chance` never fires.
#[derive(Debug, Default, Clone)]
pub struct ScriptedRandom {
    indices: VecDeque<usize>,
    rolls: VecDeque<f64>,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.indices.extend(indices);
        self
    }

    pub fn with_rolls(mut self, rolls: impl IntoIterator<Item = f64>) -> Self {
        self.rolls.extend(rolls);
        self
    }
}

impl RandomSource for ScriptedRandom {
    fn index_below(&mut self, upper: usize) -> usize {
        assert!(upper > 0, "index_below called with an empty range");
        self.indices.pop_front().unwrap_or(0) % upper
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.rolls.pop_front().unwrap_or(1.0) < probability
    }
}
