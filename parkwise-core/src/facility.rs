//! Parking facilities and their slot state.

use geo::Coord;
use thiserror::Error;

use crate::{SpaceRequirement, TrafficTier};

/// Integer grid position, `x` along columns and `y` along rows.
pub type GridPosition = Coord<i64>;

/// Stable identifier of a parking facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct FacilityId(pub u64);

impl std::fmt::Display for FacilityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "facility#{}", self.0)
    }
}

/// Ordered occupancy flags for the general slots of a facility.
///
/// `true` marks an occupied slot and `false` a free one.
///
/// # Examples
/// ```
/// use parkwise_core::SlotStates;
///
/// let slots = SlotStates::new(vec![true, false, false, true]);
/// assert_eq!(slots.free_count(), 2);
/// assert!(!slots.is_full());
/// assert!(SlotStates::new(Vec::new()).is_full());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct SlotStates(Vec<bool>);

impl SlotStates {
    /// Wrap a sequence of occupancy flags.
    #[must_use]
    pub const fn new(occupied: Vec<bool>) -> Self {
        Self(occupied)
    }

    /// Number of declared slots.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Report whether the facility declares no slots at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.0.iter().filter(|occupied| **occupied).count()
    }

    /// Number of free slots.
    #[must_use]
    pub fn free_count(&self) -> usize {
        self.0.iter().filter(|occupied| !**occupied).count()
    }

    /// Report whether no slot is free.
    ///
    /// A facility declaring zero slots is full: there is nowhere to park.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.0.iter().all(|occupied| *occupied)
    }

    /// Fraction of slots that are free, `0.0` when no slots are declared.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "slot counts are small and the ratio is a scoring input"
    )]
    pub fn availability_ratio(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.free_count() as f64 / self.len() as f64
    }

    /// Borrow the raw flags.
    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

impl From<Vec<bool>> for SlotStates {
    fn from(occupied: Vec<bool>) -> Self {
        Self::new(occupied)
    }
}

/// Counts of slots reserved for constrained-eligibility use.
///
/// When deserialised every counter must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct SpecialisedSpaces {
    /// Accessible bays for drivers with a disability permit.
    pub handicap: u32,
    /// Bays fitted with an electric-vehicle charger.
    pub ev_charging: u32,
    /// Wider bays intended for families.
    pub family: u32,
}

/// Errors returned by [`Facility::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FacilityError {
    /// The display name was empty or whitespace.
    #[error("facility {id} must have a non-empty name")]
    EmptyName {
        /// Identifier of the rejected facility.
        id: FacilityId,
    },
}

/// A parking facility as supplied by the facility source.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use parkwise_core::{Facility, FacilityId, SlotStates, SpecialisedSpaces, TrafficTier};
///
/// # fn main() -> Result<(), parkwise_core::FacilityError> {
/// let facility = Facility::new(
///     FacilityId(1),
///     "Alpha",
///     Coord { x: 2, y: 3 },
///     SlotStates::new(vec![true, false]),
///     SpecialisedSpaces::default(),
///     TrafficTier::Low,
/// )?;
/// assert!(!facility.is_full());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize)
)]
pub struct Facility {
    id: FacilityId,
    name: String,
    position: GridPosition,
    slots: SlotStates,
    specialised: SpecialisedSpaces,
    traffic_tier: TrafficTier,
}

impl Facility {
    /// Validate and construct a facility.
    ///
    /// # Errors
    /// Returns [`FacilityError::EmptyName`] when `name` is blank.
    pub fn new(
        id: FacilityId,
        name: impl Into<String>,
        position: GridPosition,
        slots: SlotStates,
        specialised: SpecialisedSpaces,
        traffic_tier: TrafficTier,
    ) -> Result<Self, FacilityError> {
        let label: String = name.into();
        if label.trim().is_empty() {
            return Err(FacilityError::EmptyName { id });
        }
        Ok(Self {
            id,
            name: label,
            position,
            slots,
            specialised,
            traffic_tier,
        })
    }

    /// Facility identifier.
    #[must_use]
    pub const fn id(&self) -> FacilityId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Grid position of the entrance.
    #[must_use]
    pub const fn position(&self) -> GridPosition {
        self.position
    }

    /// General slot occupancy.
    #[must_use]
    pub const fn slots(&self) -> &SlotStates {
        &self.slots
    }

    /// Specialised-space counters.
    #[must_use]
    pub const fn specialised(&self) -> SpecialisedSpaces {
        self.specialised
    }

    /// Traffic tier of the surrounding roads.
    #[must_use]
    pub const fn traffic_tier(&self) -> TrafficTier {
        self.traffic_tier
    }

    /// Report whether every slot is occupied. See [`SlotStates::is_full`].
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.is_full()
    }

    /// Report whether the facility offers at least one space of the
    /// requested kind.
    ///
    /// [`SpaceRequirement::None`] is always satisfied and
    /// [`SpaceRequirement::Unrecognised`] never is.
    #[must_use]
    pub fn offers(&self, requirement: &SpaceRequirement) -> bool {
        match requirement {
            SpaceRequirement::None => true,
            SpaceRequirement::Handicap => self.specialised.handicap > 0,
            SpaceRequirement::EvCharging => self.specialised.ev_charging > 0,
            SpaceRequirement::Unrecognised(_) => false,
        }
    }
}

/// Wire shape of a facility; every field is required.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct FacilityRecord {
    id: FacilityId,
    name: String,
    position: GridPosition,
    slots: SlotStates,
    specialised: SpecialisedSpaces,
    traffic_tier: TrafficTier,
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Facility {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let record = <FacilityRecord as serde::Deserialize>::deserialize(deserializer)?;
        Self::new(
            record.id,
            record.name,
            record.position,
            record.slots,
            record.specialised,
            record.traffic_tier,
        )
        .map_err(serde::de::Error::custom)
    }
}
