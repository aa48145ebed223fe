//! Pick a single actionable facility from a ranking.

use crate::{GridPosition, ScoredFacility, TimeModel};

/// Choose the non-full facility closest in travel time to `user_position`.
///
/// This reorders the already-ranked candidates by proximity alone; travel
/// time is computed at each facility's own traffic tier. On a tie the
/// earlier (higher-ranked) entry wins. Returns `None` when no candidate has
/// a free slot.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use parkwise_core::{TimeModel, recommend};
///
/// assert!(recommend(Coord { x: 0, y: 0 }, &[], &TimeModel::default()).is_none());
/// ```
#[must_use]
pub fn recommend<'a>(
    user_position: GridPosition,
    ranked: &'a [ScoredFacility],
    time_model: &TimeModel,
) -> Option<&'a ScoredFacility> {
    ranked
        .iter()
        .filter(|entry| !entry.facility.is_full())
        .min_by_key(|entry| {
            time_model.time(
                user_position,
                entry.facility.position(),
                entry.facility.traffic_tier(),
            )
        })
}
