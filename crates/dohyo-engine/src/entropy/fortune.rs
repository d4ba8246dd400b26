//! Seeded fortune generation.
//!
//! Produces streams with the distribution the match scheduler uses:
//! a small chance of each sentinel, otherwise a uniform normal value.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{
    CRITICAL_FAIL, CRITICAL_SUCCESS, EntropyStream, MAX_FORTUNE, MIN_FORTUNE, REQUIRED_DRAWS,
};

/// Configuration for fortune generation.
#[derive(Debug, Clone)]
pub struct FortuneConfig {
    /// RNG seed for reproducible streams.
    pub seed: u64,
    /// Number of values to generate.
    pub count: usize,
    /// Probability of a critical success per value.
    pub critical_success_chance: f64,
    /// Probability of a critical failure per value.
    pub critical_fail_chance: f64,
}

impl Default for FortuneConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            count: REQUIRED_DRAWS,
            critical_success_chance: 0.02,
            critical_fail_chance: 0.02,
        }
    }
}

impl FortuneConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of values (at least [`REQUIRED_DRAWS`]).
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count.max(REQUIRED_DRAWS);
        self
    }

    /// Set both critical chances, each clamped to `0.0..=0.5`.
    pub fn with_critical_chances(mut self, success: f64, fail: f64) -> Self {
        self.critical_success_chance = success.clamp(0.0, 0.5);
        self.critical_fail_chance = fail.clamp(0.0, 0.5);
        self
    }
}

/// Generate a fortune stream from the given configuration.
pub fn generate_fortune(config: &FortuneConfig) -> EntropyStream {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let values: Vec<i32> = (0..config.count)
        .map(|_| draw_value(&mut rng, config))
        .collect();
    tracing::debug!(seed = config.seed, ?values, "generated fortune");
    EntropyStream { values, cursor: 0 }
}

fn draw_value(rng: &mut StdRng, config: &FortuneConfig) -> i32 {
    let roll: f64 = rng.random();
    if roll < config.critical_success_chance {
        CRITICAL_SUCCESS
    } else if roll < config.critical_success_chance + config.critical_fail_chance {
        CRITICAL_FAIL
    } else {
        rng.random_range(MIN_FORTUNE..=MAX_FORTUNE)
    }
}
