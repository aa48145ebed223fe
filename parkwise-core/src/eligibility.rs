//! Availability filtering ahead of scoring.
//!
//! Filtering happens before population statistics are built, so excluded
//! facilities never skew the mean or spread of the remaining candidates.

use crate::{Facility, SpaceRequirement};

/// Report whether `facility` can take a driver with `requirement`.
///
/// Full facilities are never eligible (including those declaring zero
/// slots). A specialised requirement additionally needs the matching
/// counter to be positive; unrecognised kinds are never available.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use parkwise_core::{
///     Facility, FacilityId, SlotStates, SpaceRequirement, SpecialisedSpaces, TrafficTier,
///     is_eligible,
/// };
///
/// let facility = Facility::new(
///     FacilityId(1),
///     "Bravo",
///     Coord { x: 5, y: 7 },
///     SlotStates::new(vec![true, false]),
///     SpecialisedSpaces { handicap: 1, ev_charging: 0, family: 0 },
///     TrafficTier::Low,
/// )
/// .unwrap();
/// assert!(is_eligible(&facility, &SpaceRequirement::Handicap));
/// assert!(!is_eligible(&facility, &SpaceRequirement::EvCharging));
/// ```
#[must_use]
pub fn is_eligible(facility: &Facility, requirement: &SpaceRequirement) -> bool {
    !facility.is_full() && facility.offers(requirement)
}

/// Keep the facilities eligible for `requirement`, preserving order.
#[must_use]
pub fn filter_eligible<'a, I>(facilities: I, requirement: &SpaceRequirement) -> Vec<&'a Facility>
where
    I: IntoIterator<Item = &'a Facility>,
{
    facilities
        .into_iter()
        .filter(|facility| {
            let eligible = is_eligible(facility, requirement);
            if !eligible {
                log::debug!(
                    "excluding {} ({}): full={} requirement={requirement}",
                    facility.id(),
                    facility.name(),
                    facility.is_full()
                );
            }
            eligible
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    use crate::test_support::FacilityBuilder;

    #[fixture]
    fn population() -> Vec<Facility> {
        vec![
            FacilityBuilder::new(1).slots(&[true, false]).handicap(1).build(),
            FacilityBuilder::new(2).slots(&[true, true]).handicap(4).ev_charging(2).build(),
            FacilityBuilder::new(3).slots(&[false]).ev_charging(1).build(),
            FacilityBuilder::new(4).slots(&[]).handicap(2).build(),
        ]
    }

    fn ids(facilities: &[&Facility]) -> Vec<u64> {
        facilities.iter().map(|facility| facility.id().0).collect()
    }

    #[rstest]
    fn excludes_full_and_slotless_facilities(population: Vec<Facility>) {
        let eligible = filter_eligible(&population, &SpaceRequirement::None);
        assert_eq!(ids(&eligible), vec![1, 3]);
    }

    #[rstest]
    #[case(SpaceRequirement::Handicap, vec![1])]
    #[case(SpaceRequirement::EvCharging, vec![3])]
    #[case(SpaceRequirement::Unrecognised("family".into()), vec![])]
    fn requirement_needs_matching_counter(
        population: Vec<Facility>,
        #[case] requirement: SpaceRequirement,
        #[case] expected: Vec<u64>,
    ) {
        let eligible = filter_eligible(&population, &requirement);
        assert_eq!(ids(&eligible), expected);
    }
}
