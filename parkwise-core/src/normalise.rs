//! Z-score normalisation over a candidate population.
//!
//! Statistics are rebuilt for every scoring pass from the population that
//! survived filtering, so scores are only comparable within one pass.

use std::collections::BTreeMap;

use crate::{CriterionSample, CriterionValues};

/// Rescale `value` against a population's mean and standard deviation.
///
/// Degenerate statistics are not an error: a zero, NaN or infinite standard
/// deviation, or a non-finite mean, yields `0.0`. This covers populations in
/// which every facility shares the same value.
///
/// # Examples
/// ```
/// use parkwise_core::normalise;
///
/// assert_eq!(normalise(12.0, 10.0, 2.0), 1.0);
/// assert_eq!(normalise(3.0, 3.0, 0.0), 0.0);
/// assert_eq!(normalise(3.0, f64::NAN, 1.0), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::float_cmp,
    reason = "z-scores are floating-point by definition; zero spread is an exact sentinel"
)]
pub fn normalise(value: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev == 0.0 || !mean.is_finite() || !std_dev.is_finite() {
        return 0.0;
    }
    let z = (value - mean) / std_dev;
    if z.is_finite() { z } else { 0.0 }
}

/// Mean and population standard deviation of one criterion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriterionStats {
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation (divides by `n`, not `n - 1`).
    pub std_dev: f64,
}

impl CriterionStats {
    /// Compute statistics over `values`.
    ///
    /// An empty slice yields NaN statistics, which [`normalise`] maps to
    /// zero. A population of identical values has a standard deviation of
    /// exactly zero, whatever rounding the mean picks up.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        clippy::float_cmp,
        reason = "population sizes are far below f64's integer precision"
    )]
    pub fn from_values(values: &[f64]) -> Self {
        let Some(&first) = values.first() else {
            return Self {
                mean: f64::NAN,
                std_dev: f64::NAN,
            };
        };
        if values.iter().all(|&value| value == first) {
            return Self {
                mean: first,
                std_dev: 0.0,
            };
        }
        let count = values.len() as f64;
        let mean = values.iter().sum::<f64>() / count;
        let variance = values
            .iter()
            .map(|value| {
                let delta = value - mean;
                delta * delta
            })
            .sum::<f64>()
            / count;
        Self {
            mean,
            std_dev: variance.sqrt(),
        }
    }

    /// Normalise `value` against these statistics.
    #[must_use]
    pub fn normalise(&self, value: f64) -> f64 {
        normalise(value, self.mean, self.std_dev)
    }
}

impl CriterionSample {
    /// Statistics of this sample.
    #[must_use]
    pub fn stats(&self) -> CriterionStats {
        CriterionStats::from_values(&self.values)
    }
}

/// Per-criterion statistics for one candidate population.
///
/// # Examples
/// ```
/// use parkwise_core::{CriterionValues, NormalizationStats};
///
/// let population = vec![
///     CriterionValues::new().with("handicap_spaces", 1.0),
///     CriterionValues::new().with("handicap_spaces", 3.0),
/// ];
/// let stats = NormalizationStats::from_population(&population);
/// assert_eq!(stats.normalise("handicap_spaces", 3.0), 1.0);
/// assert_eq!(stats.normalise("unknown", 5.0), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizationStats {
    criteria: BTreeMap<String, CriterionStats>,
}

impl NormalizationStats {
    /// Build statistics for every criterion reported by the population.
    #[must_use]
    pub fn from_population(population: &[CriterionValues]) -> Self {
        let mut names: Vec<&str> = population
            .iter()
            .flat_map(|row| row.iter().map(|(name, _)| name))
            .collect();
        names.sort_unstable();
        names.dedup();
        let criteria = names
            .into_iter()
            .map(|name| {
                let sample = CriterionSample::collect(name, population);
                (sample.name.clone(), sample.stats())
            })
            .collect();
        Self { criteria }
    }

    /// Build statistics from explicit samples.
    #[must_use]
    pub fn from_samples<'a>(samples: impl IntoIterator<Item = &'a CriterionSample>) -> Self {
        Self {
            criteria: samples
                .into_iter()
                .map(|sample| (sample.name.clone(), sample.stats()))
                .collect(),
        }
    }

    /// Statistics for `criterion`, if the population reported it.
    #[must_use]
    pub fn get(&self, criterion: &str) -> Option<CriterionStats> {
        self.criteria.get(criterion).copied()
    }

    /// Report whether statistics exist for `criterion`.
    #[must_use]
    pub fn contains(&self, criterion: &str) -> bool {
        self.criteria.contains_key(criterion)
    }

    /// Normalise `value` for `criterion`; unknown criteria normalise to zero.
    #[must_use]
    pub fn normalise(&self, criterion: &str, value: f64) -> f64 {
        self.get(criterion)
            .map_or(0.0, |stats| stats.normalise(value))
    }

    /// Iterate over the criteria names with statistics.
    pub fn criteria(&self) -> impl Iterator<Item = &str> {
        self.criteria.keys().map(String::as_str)
    }
}
