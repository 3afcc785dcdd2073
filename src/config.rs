//! Run configuration.

use crate::mechanics::score::DEFAULT_LUCK_WEIGHT;

/// Knobs for one simulation run. Fixed for the duration of the run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimConfig {
    pub population_size: usize,
    pub num_candidates: usize,
    pub luck_weight: f64,
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            population_size: 1_000_000,
            num_candidates: 1_000,
            luck_weight: DEFAULT_LUCK_WEIGHT,
            seed: 0,
        }
    }
}

impl SimConfig {
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    pub fn with_num_candidates(mut self, num_candidates: usize) -> Self {
        self.num_candidates = num_candidates;
        self
    }

    pub fn with_luck_weight(mut self, luck_weight: f64) -> Self {
        self.luck_weight = luck_weight;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
