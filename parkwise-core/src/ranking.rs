//! Ordering of scored facilities.

use crate::{Facility, FacilityId, Journey};

/// A facility paired with its score and the journey used to score it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredFacility {
    /// Facility record.
    pub facility: Facility,
    /// Weighted score; higher is better.
    pub score: f64,
    /// Drive and walk estimate for the request that produced the score.
    pub journey: Journey,
}

impl ScoredFacility {
    /// Identifier of the wrapped facility.
    #[must_use]
    pub const fn id(&self) -> FacilityId {
        self.facility.id()
    }
}

/// Sort `scored` by score, highest first.
///
/// The sort is stable: entries with equal scores keep their input order and
/// no secondary key is consulted. NaN scores rank last, level with
/// negative infinity.
///
/// # Examples
/// ```
/// use parkwise_core::{ScoredFacility, rank};
/// # use geo::Coord;
/// # use parkwise_core::{Facility, FacilityId, Journey, SlotStates, SpecialisedSpaces, TrafficTier};
/// # fn site(id: u64) -> Facility {
/// #     Facility::new(
/// #         FacilityId(id),
/// #         "site",
/// #         Coord { x: 0, y: 0 },
/// #         SlotStates::new(vec![false]),
/// #         SpecialisedSpaces::default(),
/// #         TrafficTier::Low,
/// #     )
/// #     .unwrap()
/// # }
///
/// let scored = [(1, 2.1), (2, 2.1), (3, 1.4)]
///     .into_iter()
///     .map(|(id, score)| ScoredFacility { facility: site(id), score, journey: Journey::default() })
///     .collect();
/// let ids: Vec<u64> = rank(scored).iter().map(|entry| entry.id().0).collect();
/// assert_eq!(ids, vec![1, 2, 3]);
/// ```
#[must_use]
pub fn rank(mut scored: Vec<ScoredFacility>) -> Vec<ScoredFacility> {
    scored.sort_by(|a, b| rank_key(b.score).total_cmp(&rank_key(a.score)));
    scored
}

const fn rank_key(score: f64) -> f64 {
    if score.is_nan() {
        f64::NEG_INFINITY
    } else {
        score
    }
}

/// Sort `scored` by total journey time, shortest first. Stable.
#[must_use]
pub fn rank_by_travel_time(mut scored: Vec<ScoredFacility>) -> Vec<ScoredFacility> {
    scored.sort_by_key(|entry| entry.journey.total());
    scored
}
