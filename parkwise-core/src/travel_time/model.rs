//! Manhattan travel-time model with per-tier pace.

use std::time::Duration;

use crate::{Facility, GridPosition, ParkingRequest, TierTimes, TrafficTier};

const SECONDS_PER_MINUTE: u64 = 60;

/// Convert a duration to fractional minutes, the unit criteria are scored in.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "criteria are expressed in fractional minutes"
)]
pub fn minutes(duration: Duration) -> f64 {
    duration.as_secs_f64() / 60.0
}

/// Grid travel-time estimator.
///
/// Distance is the L1 norm between positions; both axis deltas are summed
/// before scaling by the tier's minutes per unit.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use geo::Coord;
/// use parkwise_core::{TimeModel, TrafficTier};
///
/// let model = TimeModel::default();
/// let time = model.time(Coord { x: 0, y: 0 }, Coord { x: 2, y: 3 }, TrafficTier::Low);
/// assert_eq!(time, Duration::from_secs(25 * 60));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeModel {
    tiers: TierTimes,
}

impl TimeModel {
    /// Build a model from explicit tier constants.
    #[must_use]
    pub const fn new(tiers: TierTimes) -> Self {
        Self { tiers }
    }

    /// Tier constants in use.
    #[must_use]
    pub const fn tiers(&self) -> TierTimes {
        self.tiers
    }

    /// Manhattan distance in grid units. Saturates instead of overflowing.
    #[must_use]
    pub const fn grid_distance(from: GridPosition, to: GridPosition) -> u64 {
        from.x
            .abs_diff(to.x)
            .saturating_add(from.y.abs_diff(to.y))
    }

    /// Travel time between two positions at the given tier.
    #[must_use]
    pub const fn time(&self, from: GridPosition, to: GridPosition, tier: TrafficTier) -> Duration {
        let per_unit = self.tiers.minutes_per_unit(tier) as u64;
        let total_minutes = Self::grid_distance(from, to).saturating_mul(per_unit);
        Duration::from_secs(total_minutes.saturating_mul(SECONDS_PER_MINUTE))
    }

    /// Estimate the drive to `facility` and the walk on to the destination.
    ///
    /// The drive uses the facility's own traffic tier; the walk uses
    /// `walk_tier` because pedestrians are unaffected by congestion.
    #[must_use]
    pub fn journey(
        &self,
        request: &ParkingRequest,
        facility: &Facility,
        walk_tier: TrafficTier,
    ) -> Journey {
        Journey {
            drive: self.time(request.origin, facility.position(), facility.traffic_tier()),
            walk: self.time(facility.position(), request.destination, walk_tier),
        }
    }
}

/// Drive and walk legs of a trip through one facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Journey {
    /// Origin to facility.
    pub drive: Duration,
    /// Facility to destination.
    pub walk: Duration,
}

impl Journey {
    /// Combined duration of both legs.
    #[must_use]
    pub const fn total(&self) -> Duration {
        self.drive.saturating_add(self.walk)
    }
}
