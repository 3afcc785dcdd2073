//! Comparative distributions for presentation code.
//!
//! Nothing here draws anything. A plotting front end takes a [`Comparison`]
//! and renders the two histograms side by side; both share one bin range so
//! bar heights line up.

use crate::error::{SimError, SimResult};
use crate::systems::population::{Attribute, Population};

/// Moments and extremes of one sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    /// Population (not sample) standard deviation.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    /// Empty input yields `count == 0` and NaN everywhere else.
    pub fn of(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self { count: 0, mean: f64::NAN, std_dev: f64::NAN, min: f64::NAN, max: f64::NAN };
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let var = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        Self { count: values.len(), mean, std_dev: var.sqrt(), min, max }
    }
}

/// Equal-width bins over `[lo, hi]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    pub lo: f64,
    pub hi: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Values outside `[lo, hi]` are dropped; `hi` itself lands in the last bin.
    pub fn build(values: &[f64], lo: f64, hi: f64, bins: usize) -> SimResult<Self> {
        if bins == 0 {
            return Err(SimError::InvalidBins);
        }
        let mut counts = vec![0usize; bins];
        let width = (hi - lo) / bins as f64;
        for &v in values {
            if !(lo..=hi).contains(&v) {
                continue;
            }
            let b = if width > 0.0 { ((v - lo) / width) as usize } else { 0 };
            counts[b.min(bins - 1)] += 1;
        }
        Ok(Self { lo, hi, counts })
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn bin_width(&self) -> f64 {
        (self.hi - self.lo) / self.counts.len() as f64
    }

    /// Left edge of bin `i`.
    pub fn edge(&self, i: usize) -> f64 {
        self.lo + self.bin_width() * i as f64
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Selected subset vs. full population for one attribute.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    pub attribute: Attribute,
    pub selected: Summary,
    pub population: Summary,
    pub selected_hist: Histogram,
    pub population_hist: Histogram,
}

/// Values of `attr` at the `selected` indices, in selection order.
///
/// An index past the end of the population is an error, not a skip.
pub fn gather(population: &Population, selected: &[usize], attr: Attribute) -> SimResult<Vec<f64>> {
    let values = population.get(attr);
    selected
        .iter()
        .map(|&i| {
            values
                .get(i)
                .copied()
                .ok_or(SimError::IndexOutOfRange { index: i, len: values.len() })
        })
        .collect()
}

pub fn compare(
    population: &Population,
    selected: &[usize],
    attr: Attribute,
    bins: usize,
) -> SimResult<Comparison> {
    let all = population.get(attr);
    let picked = gather(population, selected, attr)?;
    let pop_summary = Summary::of(all);
    let (lo, hi) = (pop_summary.min, pop_summary.max);
    Ok(Comparison {
        attribute: attr,
        selected: Summary::of(&picked),
        population: pop_summary,
        selected_hist: Histogram::build(&picked, lo, hi, bins)?,
        population_hist: Histogram::build(all, lo, hi, bins)?,
    })
}

/// [`compare`] keyed by presentation name; rejects names outside the closed set.
pub fn compare_by_name(
    population: &Population,
    selected: &[usize],
    name: &str,
    bins: usize,
) -> SimResult<Comparison> {
    let attr: Attribute = name.parse()?;
    compare(population, selected, attr, bins)
}
