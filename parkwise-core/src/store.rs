//! Read-only access to facility records.
//!
//! The `FacilitySource` trait is the boundary between the planner and
//! whatever loads facilities (a database, a file, generated fixtures). The
//! core never mutates or constructs facility data itself.

use crate::Facility;

/// Supply facility records to the planner.
///
/// Iteration order is significant: it is the input order the ranker's
/// stable tie policy preserves.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use parkwise_core::{Facility, FacilityId, FacilitySource, SlotStates, SpecialisedSpaces, TrafficTier};
///
/// let facilities = vec![
///     Facility::new(
///         FacilityId(7),
///         "Harbour",
///         Coord { x: 1, y: 1 },
///         SlotStates::new(vec![false]),
///         SpecialisedSpaces::default(),
///         TrafficTier::Low,
///     )
///     .unwrap(),
/// ];
/// assert_eq!(facilities.facilities().count(), 1);
/// ```
pub trait FacilitySource {
    /// Iterate over every known facility.
    fn facilities(&self) -> Box<dyn Iterator<Item = &Facility> + Send + '_>;
}

impl FacilitySource for [Facility] {
    fn facilities(&self) -> Box<dyn Iterator<Item = &Facility> + Send + '_> {
        Box::new(self.iter())
    }
}

impl FacilitySource for Vec<Facility> {
    fn facilities(&self) -> Box<dyn Iterator<Item = &Facility> + Send + '_> {
        self.as_slice().facilities()
    }
}

impl<T: FacilitySource + ?Sized> FacilitySource for &T {
    fn facilities(&self) -> Box<dyn Iterator<Item = &Facility> + Send + '_> {
        (**self).facilities()
    }
}
