//! Traffic-density tiers and the minutes-per-unit table that scales them.
//!
//! # Examples
//! ```
//! use parkwise_core::{TierTimes, TrafficTier};
//!
//! assert_eq!(TrafficTier::Medium.as_str(), "medium");
//! assert_eq!(TierTimes::default().minutes_per_unit(TrafficTier::High), 15);
//! ```

use thiserror::Error;

/// Discrete congestion classification of the roads around a facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TrafficTier {
    /// Free-flowing traffic. Also the pace used for walking legs.
    #[default]
    Low,
    /// Moderate congestion.
    Medium,
    /// Heavy congestion.
    High,
}

/// Error returned when a tier name is not one of `low`, `medium` or `high`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown traffic tier '{0}'")]
pub struct TrafficTierParseError(pub String);

impl TrafficTier {
    /// Every tier, lightest first.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Return the tier as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Ordinal congestion level used as the raw `traffic_density` criterion.
    ///
    /// Z-scores are invariant under affine rescaling, so only the ordering
    /// and even spacing of these values matter.
    #[must_use]
    pub const fn level(self) -> f64 {
        match self {
            Self::Low => 1.0,
            Self::Medium => 2.0,
            Self::High => 3.0,
        }
    }
}

impl std::fmt::Display for TrafficTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TrafficTier {
    type Err = TrafficTierParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(TrafficTierParseError(s.to_owned())),
        }
    }
}

/// Minutes needed to cross one grid unit at each traffic tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct TierTimes {
    /// Minutes per unit when traffic is light.
    pub low: u32,
    /// Minutes per unit under moderate traffic.
    pub medium: u32,
    /// Minutes per unit under heavy traffic.
    pub high: u32,
}

impl TierTimes {
    /// Look up the minutes-per-unit constant for `tier`.
    #[must_use]
    pub const fn minutes_per_unit(&self, tier: TrafficTier) -> u32 {
        match tier {
            TrafficTier::Low => self.low,
            TrafficTier::Medium => self.medium,
            TrafficTier::High => self.high,
        }
    }
}

impl Default for TierTimes {
    fn default() -> Self {
        Self {
            low: 5,
            medium: 10,
            high: 15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("low", TrafficTier::Low)]
    #[case("Medium", TrafficTier::Medium)]
    #[case(" HIGH ", TrafficTier::High)]
    fn parses_known_tiers(#[case] raw: &str, #[case] expected: TrafficTier) {
        assert_eq!(TrafficTier::from_str(raw), Ok(expected));
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = TrafficTier::from_str("gridlock").expect_err("unknown tier");
        assert!(err.to_string().contains("gridlock"));
    }

    #[rstest]
    fn display_matches_as_str() {
        for tier in TrafficTier::ALL {
            assert_eq!(tier.to_string(), tier.as_str());
        }
    }

    #[rstest]
    fn default_minutes_follow_reference_table() {
        let times = TierTimes::default();
        assert_eq!(times.minutes_per_unit(TrafficTier::Low), 5);
        assert_eq!(times.minutes_per_unit(TrafficTier::Medium), 10);
        assert_eq!(times.minutes_per_unit(TrafficTier::High), 15);
    }
}
