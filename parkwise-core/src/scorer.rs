//! Score facilities against a user's weights.
//!
//! The `Scorer` trait turns one facility's raw [`CriterionValues`] into a
//! scalar, given the caller's [`WeightVector`] and the
//! [`NormalizationStats`] of the population the facility belongs to.

use crate::{CriterionValues, NormalizationStats, WeightVector};

/// Calculate a weighted score for one facility.
///
/// Higher scores are better. Scores are only comparable between facilities
/// scored against the same statistics. The method is infallible;
/// implementations return `0.0` when no information is available and should
/// pass results through [`Scorer::sanitise`].
///
/// Implementations must be thread-safe (`Send` + `Sync`) so independent
/// requests can be scored in parallel.
///
/// # Examples
///
/// ```rust
/// use parkwise_core::{CriterionValues, NormalizationStats, Scorer, WeightVector};
///
/// struct AvailabilityOnly;
///
/// impl Scorer for AvailabilityOnly {
///     fn score(
///         &self,
///         values: &CriterionValues,
///         weights: &WeightVector,
///         stats: &NormalizationStats,
///     ) -> f64 {
///         let raw = values.get("availability").unwrap_or(0.0);
///         Self::sanitise(weights.weight("availability") * stats.normalise("availability", raw))
///     }
/// }
///
/// let population = vec![
///     CriterionValues::new().with("availability", 1.0),
///     CriterionValues::new().with("availability", 3.0),
/// ];
/// let stats = NormalizationStats::from_population(&population);
/// let weights = WeightVector::new().with_weight("availability", 2.0).unwrap();
/// assert_eq!(AvailabilityOnly.score(&population[1], &weights, &stats), 2.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Return the score of one facility.
    fn score(
        &self,
        values: &CriterionValues,
        weights: &WeightVector,
        stats: &NormalizationStats,
    ) -> f64;

    /// Report whether `criterion` can be resolved against `stats`.
    ///
    /// Callers use this to reject weight vectors naming criteria nobody
    /// supplies. The default accepts exactly the criteria with statistics.
    fn recognises(&self, criterion: &str, stats: &NormalizationStats) -> bool {
        stats.contains(criterion)
    }

    /// Map non-finite scores to `0.0`.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if score.is_finite() { score } else { 0.0 }
    }
}
