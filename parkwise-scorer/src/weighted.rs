//! Weighted sum of normalised criteria.

use std::collections::BTreeMap;

use parkwise_core::{CriterionValues, NormalizationStats, Scorer, WeightVector};

use crate::{Composite, CompositeError};

/// Default [`Scorer`] for the planner.
///
/// The score is `Σ weight[c] × normalised[c]` over the weight vector's
/// entries. Raw criteria normalise against the population statistics;
/// composite criteria sum the normalised values of their parts. Criteria
/// absent from a facility's values contribute nothing.
///
/// # Examples
/// ```
/// use parkwise_core::{CriterionValues, NormalizationStats, Scorer, WeightVector};
/// use parkwise_scorer::WeightedScorer;
///
/// let population = vec![
///     CriterionValues::new().with("time_to_facility", 10.0).with("time_from_facility", 5.0),
///     CriterionValues::new().with("time_to_facility", 30.0).with("time_from_facility", 15.0),
/// ];
/// let stats = NormalizationStats::from_population(&population);
/// let weights = WeightVector::new().with_weight("time_to_destination", -1.0).unwrap();
///
/// let scorer = WeightedScorer::default();
/// assert_eq!(scorer.score(&population[0], &weights, &stats), 2.0);
/// assert_eq!(scorer.score(&population[1], &weights, &stats), -2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedScorer {
    composites: BTreeMap<String, Vec<String>>,
}

impl Default for WeightedScorer {
    fn default() -> Self {
        Self::without_composites().with_builtin(Composite::time_to_destination())
    }
}

impl WeightedScorer {
    /// Scorer with the built-in `time_to_destination` composite.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scorer that only resolves raw criteria.
    #[must_use]
    pub const fn without_composites() -> Self {
        Self {
            composites: BTreeMap::new(),
        }
    }

    fn with_builtin(mut self, composite: Composite) -> Self {
        self.composites
            .insert(composite.name().to_owned(), composite.parts().to_vec());
        self
    }

    /// Register an additional composite, replacing one of the same name.
    ///
    /// # Errors
    /// [`CompositeError::Nested`] when a part is itself a composite, and
    /// [`CompositeError::UsedAsPart`] when the new name is already a part of
    /// another composite.
    pub fn with_composite(mut self, composite: Composite) -> Result<Self, CompositeError> {
        if let Some(part) = composite
            .parts()
            .iter()
            .find(|part| self.composites.contains_key(part.as_str()))
        {
            return Err(CompositeError::Nested {
                name: composite.name().to_owned(),
                part: part.clone(),
            });
        }
        if let Some((owner, _)) = self.composites.iter().find(|(owner, parts)| {
            owner.as_str() != composite.name() && parts.iter().any(|part| part == composite.name())
        }) {
            return Err(CompositeError::UsedAsPart {
                name: composite.name().to_owned(),
                composite: owner.clone(),
            });
        }
        Ok(self.with_builtin(composite))
    }

    /// Parts of the composite `criterion`, if it is one.
    #[must_use]
    pub fn composite_parts(&self, criterion: &str) -> Option<&[String]> {
        self.composites.get(criterion).map(Vec::as_slice)
    }

    /// Normalised value of `criterion` for one facility.
    ///
    /// Returns `None` when neither the criterion nor any of its parts is
    /// present in `values`.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "composites sum normalised parts")]
    pub fn normalised(
        &self,
        criterion: &str,
        values: &CriterionValues,
        stats: &NormalizationStats,
    ) -> Option<f64> {
        match self.composites.get(criterion) {
            Some(parts) => parts
                .iter()
                .filter_map(|part| {
                    values
                        .get(part)
                        .map(|raw| stats.normalise(part, raw))
                })
                .reduce(|sum, value| sum + value),
            None => values
                .get(criterion)
                .map(|raw| stats.normalise(criterion, raw)),
        }
    }

    /// Weighted contribution of every weighted criterion, in name order.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "weights scale normalised values")]
    pub fn contributions(
        &self,
        values: &CriterionValues,
        weights: &WeightVector,
        stats: &NormalizationStats,
    ) -> Vec<(String, f64)> {
        weights
            .iter()
            .map(|(criterion, weight)| {
                let normalised = self.normalised(criterion, values, stats).unwrap_or(0.0);
                (criterion.to_owned(), weight * normalised)
            })
            .collect()
    }
}

impl Scorer for WeightedScorer {
    fn score(
        &self,
        values: &CriterionValues,
        weights: &WeightVector,
        stats: &NormalizationStats,
    ) -> f64 {
        let total: f64 = self
            .contributions(values, weights, stats)
            .into_iter()
            .map(|(_, contribution)| contribution)
            .sum();
        if !total.is_finite() {
            log::warn!("weighted score overflowed to {total}; using 0");
        }
        Self::sanitise(total)
    }

    fn recognises(&self, criterion: &str, stats: &NormalizationStats) -> bool {
        self.composites.get(criterion).map_or_else(
            || stats.contains(criterion),
            |parts| parts.iter().all(|part| stats.contains(part)),
        )
    }
}
