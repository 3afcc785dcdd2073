//! Population generator.
//!
//! Draws independent skill and luck values for every candidate, then derives
//! the composite score with [`crate::mechanics::score::composite_all`]. The
//! three arrays are index-aligned: position `i` in each one describes
//! candidate `i` for the lifetime of the run.

use std::fmt;
use std::str::FromStr;

use rand_core::RngCore;

use crate::error::{SimError, SimResult};
use crate::mechanics::{score, stoch};

/// Normal(mean, std_dev) used for one attribute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Distribution {
    pub mean: f64,
    pub std_dev: f64,
}

impl Default for Distribution {
    fn default() -> Self {
        Self { mean: 0.5, std_dev: 0.2 }
    }
}

impl Distribution {
    fn validate(self) -> SimResult<Self> {
        if self.mean.is_finite() && self.std_dev.is_finite() && self.std_dev >= 0.0 {
            Ok(self)
        } else {
            Err(SimError::InvalidDistribution { mean: self.mean, std_dev: self.std_dev })
        }
    }

    fn sample_n<R: RngCore + ?Sized>(self, rng: &mut R, n: usize) -> Vec<f64> {
        (0..n).map(|_| stoch::normal(rng, self.mean, self.std_dev)).collect()
    }
}

/// The closed set of per-candidate attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    Skill,
    Luck,
    Total,
}

impl Attribute {
    pub const ALL: [Attribute; 3] = [Attribute::Skill, Attribute::Luck, Attribute::Total];

    /// Key used by presentation code.
    pub fn key(self) -> &'static str {
        match self {
            Attribute::Skill => "skill_scores",
            Attribute::Luck => "luck_scores",
            Attribute::Total => "total_scores",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Attribute {
    type Err = SimError;

    fn from_str(name: &str) -> SimResult<Self> {
        Attribute::ALL
            .into_iter()
            .find(|a| a.key() == name)
            .ok_or_else(|| SimError::UnknownAttribute { name: name.to_owned() })
    }
}

/// One run's candidates. Immutable after [`generate`].
#[derive(Clone, Debug, PartialEq)]
pub struct Population {
    skill: Vec<f64>,
    luck: Vec<f64>,
    total: Vec<f64>,
    weight: f64,
}

impl Population {
    /// Build from existing skill/luck arrays (e.g. measured data).
    pub fn from_scores(skill: Vec<f64>, luck: Vec<f64>, weight: f64) -> SimResult<Self> {
        if skill.is_empty() {
            return Err(SimError::EmptyPopulation);
        }
        if skill.len() != luck.len() {
            return Err(SimError::LengthMismatch { skill: skill.len(), luck: luck.len() });
        }
        let total = score::composite_all(&skill, &luck, weight);
        Ok(Self { skill, luck, total, weight })
    }

    pub fn len(&self) -> usize {
        self.total.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total.is_empty()
    }

    /// Luck weight the composites were derived with.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn skill_scores(&self) -> &[f64] {
        &self.skill
    }

    pub fn luck_scores(&self) -> &[f64] {
        &self.luck
    }

    pub fn total_scores(&self) -> &[f64] {
        &self.total
    }

    pub fn get(&self, attr: Attribute) -> &[f64] {
        match attr {
            Attribute::Skill => &self.skill,
            Attribute::Luck => &self.luck,
            Attribute::Total => &self.total,
        }
    }

    /// Lookup by presentation key; anything outside the closed set fails.
    pub fn attribute(&self, name: &str) -> SimResult<&[f64]> {
        Ok(self.get(name.parse()?))
    }
}

/// Generate `population_size` candidates with skill, luck ~ Normal(0.5, 0.2).
pub fn generate<R: RngCore + ?Sized>(
    rng: &mut R,
    population_size: usize,
    weight: f64,
) -> SimResult<Population> {
    generate_with(rng, population_size, weight, Distribution::default(), Distribution::default())
}

/// Like [`generate`] with explicit per-attribute distributions.
///
/// All skill values are drawn before any luck value, so a seeded generator
/// yields the same population for the same `(size, weight, distributions)`.
pub fn generate_with<R: RngCore + ?Sized>(
    rng: &mut R,
    population_size: usize,
    weight: f64,
    skill_dist: Distribution,
    luck_dist: Distribution,
) -> SimResult<Population> {
    if population_size == 0 {
        return Err(SimError::EmptyPopulation);
    }
    let skill_dist = skill_dist.validate()?;
    let luck_dist = luck_dist.validate()?;

    let skill = skill_dist.sample_n(rng, population_size);
    let luck = luck_dist.sample_n(rng, population_size);
    tracing::debug!(population_size, weight, "generated skill and luck draws");

    Population::from_scores(skill, luck, weight)
}
