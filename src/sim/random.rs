//! Random number sources
//!
//! Every probabilistic behavior (spawn rolls, AI jitter, oil spin, drops) is
//! expressed through `uniform_int`, so a run is fully replayable from a seed
//! and tests can script exact draws.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// The sole source of randomness for the simulation
pub trait RandomSource {
    /// Uniform integer in `[low, high]` (both inclusive)
    fn uniform_int(&mut self, low: i32, high: i32) -> i32;

    /// True with probability 1 / `one_in`
    fn one_in(&mut self, one_in: i32) -> bool {
        self.uniform_int(0, one_in.max(1) - 1) == 0
    }
}

/// Seeded PCG generator used for real runs
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: Pcg32,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn uniform_int(&mut self, low: i32, high: i32) -> i32 {
        debug_assert!(low <= high, "empty range [{low}, {high}]");
        if low >= high {
            return low;
        }
        self.rng.random_range(low..=high)
    }
}

/// Replays a fixed script of draws
///
/// Each draw is clamped into the requested range. Once the script runs out
/// every draw returns `high`, which makes every "1 in N" roll fail, so an
/// exhausted script means "nothing random happens".
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    script: VecDeque<i32>,
}

impl ScriptedRandom {
    pub fn new(script: impl IntoIterator<Item = i32>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Queue more draws at the end of the script
    pub fn push(&mut self, values: impl IntoIterator<Item = i32>) {
        self.script.extend(values);
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform_int(&mut self, low: i32, high: i32) -> i32 {
        match self.script.pop_front() {
            Some(v) => v.clamp(low, high.max(low)),
            None => high.max(low),
        }
    }
}
