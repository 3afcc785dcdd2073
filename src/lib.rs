/*!
`skill_luck` — how much does a selection reward skill, and how much luck?

What it does
- Gives every candidate an independent skill and luck draw (Normal(0.5, 0.2)).
- Blends them into one composite: `(1 - w) * skill + w * luck`.
- Ranks the population by composite and keeps the top K.
- Packages the three parallel arrays plus the selected indices so a caller can
  compare the selected subset against the whole population.

How to use (call surface only)
- Seeded: `run_seeded(&SimConfig::default().with_seed(7))`.
- Explicit generator: `run(&mut rng, population_size, k, weight)` where `rng`
  is any `rand_core::RngCore` (see `mechanics::stoch::rng_from_seed`).
- Inspect `Selection::population` by attribute, or call
  `Selection::compare` for histogram/summary data.

What it does NOT do
- No plotting, no persistence, no streaming re-rank, no concurrency.
*/

pub mod config;
pub mod error;
pub mod mechanics;
pub mod report;
pub mod systems;

pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use systems::population::{Attribute, Population};

use rand_core::RngCore;

use crate::report::Comparison;
use crate::systems::{population, selection};

/// Output of one run: who got picked, and the data they were picked from.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    /// Indices into `population`, highest composite first.
    pub selected: Vec<usize>,
    pub population: Population,
}

impl Selection {
    pub fn selected_values(&self, attr: Attribute) -> SimResult<Vec<f64>> {
        report::gather(&self.population, &self.selected, attr)
    }

    pub fn compare(&self, attr: Attribute, bins: usize) -> SimResult<Comparison> {
        report::compare(&self.population, &self.selected, attr, bins)
    }

    /// See [`selection::skill_overlap`].
    pub fn skill_overlap(&self) -> f64 {
        selection::skill_overlap(&self.population, &self.selected)
    }
}

/// Generate a population, then take its top `k` by composite score.
pub fn run<R: RngCore + ?Sized>(
    rng: &mut R,
    population_size: usize,
    k: usize,
    weight: f64,
) -> SimResult<Selection> {
    let population = population::generate(rng, population_size, weight)?;
    let selected = selection::select_top(population.total_scores(), k);
    tracing::info!(
        population_size,
        k,
        weight,
        selected = selected.len(),
        "selection run complete"
    );
    Ok(Selection { selected, population })
}

/// [`run`] with a fresh generator seeded from `cfg.seed`.
pub fn run_seeded(cfg: &SimConfig) -> SimResult<Selection> {
    let mut rng = mechanics::stoch::rng_from_seed(cfg.seed);
    run(&mut rng, cfg.population_size, cfg.num_candidates, cfg.luck_weight)
}
