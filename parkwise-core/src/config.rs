//! Planner configuration.

#[cfg(feature = "serde")]
use thiserror::Error;

use crate::{AssignmentMode, TierTimes, TimeModel, TrafficTier};

/// Tunables for [`ParkingPlanner`](crate::ParkingPlanner).
///
/// Missing fields take their defaults when deserialised; unknown fields are
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct PlannerConfig {
    /// Minutes per grid unit for each traffic tier.
    pub tier_times: TierTimes,
    /// Tier used for the walk from facility to destination.
    pub walk_tier: TrafficTier,
    /// One request per facility, or up to each facility's free slots.
    pub assignment_mode: AssignmentMode,
}

impl PlannerConfig {
    /// Time model built from [`PlannerConfig::tier_times`].
    #[must_use]
    pub const fn time_model(&self) -> TimeModel {
        TimeModel::new(self.tier_times)
    }
}

/// Errors raised while loading a [`PlannerConfig`].
#[cfg(feature = "serde")]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document was not valid configuration JSON.
    #[error("failed to parse planner configuration: {0}")]
    Parse(#[source] serde_json::Error),
}

#[cfg(feature = "serde")]
impl PlannerConfig {
    /// Parse configuration from a JSON document.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON, unknown fields or
    /// unknown tier names.
    ///
    /// # Examples
    /// ```
    /// use parkwise_core::{AssignmentMode, PlannerConfig};
    ///
    /// let config = PlannerConfig::from_json_str(
    ///     r#"{"tier_times": {"high": 20}, "assignment_mode": "by_capacity"}"#,
    /// )
    /// .unwrap();
    /// assert_eq!(config.tier_times.high, 20);
    /// assert_eq!(config.tier_times.low, 5);
    /// assert_eq!(config.assignment_mode, AssignmentMode::ByCapacity);
    /// ```
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(ConfigError::Parse)
    }
}
