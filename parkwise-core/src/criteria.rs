//! Named scoring criteria, per-facility raw values and user weights.
//!
//! Criteria are identified by name rather than by a closed enum so callers
//! can score any metric they can supply. The names the planner extracts for
//! every facility are exposed as constants.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::travel_time::minutes;
use crate::{Facility, Journey};

/// Drive minutes from the origin to the facility.
pub const TIME_TO_FACILITY: &str = "time_to_facility";
/// Walk minutes from the facility to the destination.
pub const TIME_FROM_FACILITY: &str = "time_from_facility";
/// Composite of the two time legs; see the scorer crate.
pub const TIME_TO_DESTINATION: &str = "time_to_destination";
/// Congestion level of the facility's traffic tier.
pub const TRAFFIC_DENSITY: &str = "traffic_density";
/// Share of general slots that are free.
pub const AVAILABILITY: &str = "availability";
/// Count of accessible bays.
pub const HANDICAP_SPACES: &str = "handicap_spaces";
/// Count of family bays.
pub const FAMILY_SPACES: &str = "family_spaces";
/// Count of EV-charging bays.
pub const EV_CHARGING_SPACES: &str = "ev_charging_spaces";

/// Raw criterion values of one facility, keyed by criterion name.
///
/// # Examples
/// ```
/// use parkwise_core::CriterionValues;
///
/// let values = CriterionValues::new().with("availability", 0.75);
/// assert_eq!(values.get("availability"), Some(0.75));
/// assert_eq!(values.get("unknown"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CriterionValues {
    values: BTreeMap<String, f64>,
}

impl CriterionValues {
    /// Construct an empty set of values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract the standard criteria for `facility` reached via `journey`.
    #[must_use]
    pub fn extract(facility: &Facility, journey: &Journey) -> Self {
        let spaces = facility.specialised();
        Self::new()
            .with(TIME_TO_FACILITY, minutes(journey.drive))
            .with(TIME_FROM_FACILITY, minutes(journey.walk))
            .with(TRAFFIC_DENSITY, facility.traffic_tier().level())
            .with(AVAILABILITY, facility.slots().availability_ratio())
            .with(HANDICAP_SPACES, f64::from(spaces.handicap))
            .with(FAMILY_SPACES, f64::from(spaces.family))
            .with(EV_CHARGING_SPACES, f64::from(spaces.ev_charging))
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, criterion: impl Into<String>, value: f64) {
        self.values.insert(criterion.into(), value);
    }

    /// Insert a value while returning `self` for chaining.
    #[must_use]
    pub fn with(mut self, criterion: impl Into<String>, value: f64) -> Self {
        self.insert(criterion, value);
        self
    }

    /// Raw value for `criterion`, if present.
    #[must_use]
    pub fn get(&self, criterion: &str) -> Option<f64> {
        self.values.get(criterion).copied()
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

/// One criterion's raw values across a facility population.
#[derive(Debug, Clone, PartialEq)]
pub struct CriterionSample {
    /// Criterion name.
    pub name: String,
    /// One value per facility, in population order.
    pub values: Vec<f64>,
}

impl CriterionSample {
    /// Collect the values of `name` from a population, skipping facilities
    /// that do not report it.
    #[must_use]
    pub fn collect(name: &str, population: &[CriterionValues]) -> Self {
        Self {
            name: name.to_owned(),
            values: population.iter().filter_map(|row| row.get(name)).collect(),
        }
    }
}

/// Errors raised while building a [`WeightVector`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightError {
    /// A weight was NaN or infinite.
    #[error("weight for criterion '{criterion}' must be finite, got {value}")]
    NonFinite {
        /// Offending criterion.
        criterion: String,
        /// Rejected value.
        value: f64,
    },
}

/// Weight per criterion. Weights need not sum to one; absent criteria weigh
/// zero.
///
/// # Examples
/// ```
/// use parkwise_core::WeightVector;
///
/// # fn main() -> Result<(), parkwise_core::WeightError> {
/// let weights = WeightVector::new()
///     .with_weight("time_to_destination", 0.8)?
///     .with_weight("availability", 0.2)?;
/// assert_eq!(weights.weight("availability"), 0.2);
/// assert_eq!(weights.weight("family_spaces"), 0.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")
)]
pub struct WeightVector {
    weights: BTreeMap<String, f64>,
}

impl WeightVector {
    /// Construct an empty weight vector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update a weight.
    ///
    /// # Errors
    /// Returns [`WeightError::NonFinite`] for NaN or infinite weights.
    pub fn set_weight(
        &mut self,
        criterion: impl Into<String>,
        weight: f64,
    ) -> Result<(), WeightError> {
        let name = criterion.into();
        if !weight.is_finite() {
            return Err(WeightError::NonFinite {
                criterion: name,
                value: weight,
            });
        }
        self.weights.insert(name, weight);
        Ok(())
    }

    /// Add a weight while returning `self` for chaining.
    ///
    /// # Errors
    /// Returns [`WeightError::NonFinite`] for NaN or infinite weights.
    pub fn with_weight(
        mut self,
        criterion: impl Into<String>,
        weight: f64,
    ) -> Result<Self, WeightError> {
        self.set_weight(criterion, weight)?;
        Ok(self)
    }

    /// Weight for `criterion`, zero when absent.
    #[must_use]
    pub fn weight(&self, criterion: &str) -> f64 {
        self.weights.get(criterion).copied().unwrap_or(0.0)
    }

    /// Iterate over `(criterion, weight)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(name, weight)| (name.as_str(), *weight))
    }

    /// Report whether no weights are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl TryFrom<BTreeMap<String, f64>> for WeightVector {
    type Error = WeightError;

    fn try_from(weights: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        weights
            .into_iter()
            .try_fold(Self::new(), |acc, (name, weight)| acc.with_weight(name, weight))
    }
}

impl From<WeightVector> for BTreeMap<String, f64> {
    fn from(vector: WeightVector) -> Self {
        vector.weights
    }
}
