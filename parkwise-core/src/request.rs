//! Parking requests and the specialised-space kinds they may require.

use crate::GridPosition;

/// Specialised space a driver needs at the facility.
///
/// Parsing never fails: names outside the known set become
/// [`SpaceRequirement::Unrecognised`], which no facility satisfies.
///
/// # Examples
/// ```
/// use parkwise_core::SpaceRequirement;
///
/// assert_eq!(SpaceRequirement::parse("handicap"), SpaceRequirement::Handicap);
/// assert_eq!(SpaceRequirement::parse(""), SpaceRequirement::None);
/// assert!(matches!(
///     SpaceRequirement::parse("valet"),
///     SpaceRequirement::Unrecognised(_)
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum SpaceRequirement {
    /// Any general slot will do.
    #[default]
    None,
    /// An accessible bay.
    Handicap,
    /// A bay with an electric-vehicle charger.
    EvCharging,
    /// A kind this engine does not know; treated as unavailable everywhere.
    Unrecognised(String),
}

impl SpaceRequirement {
    /// Interpret a free-form space kind.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "" | "none" => Self::None,
            "handicap" => Self::Handicap,
            "ev" | "ev_charging" | "ev-charging" => Self::EvCharging,
            _ => Self::Unrecognised(raw.to_owned()),
        }
    }

    /// Canonical name of the requirement.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "none",
            Self::Handicap => "handicap",
            Self::EvCharging => "ev_charging",
            Self::Unrecognised(raw) => raw,
        }
    }
}

impl std::fmt::Display for SpaceRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for SpaceRequirement {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<SpaceRequirement> for String {
    fn from(requirement: SpaceRequirement) -> Self {
        requirement.as_str().to_owned()
    }
}

/// A driver's request for a parking recommendation.
///
/// # Examples
/// ```rust
/// use geo::Coord;
/// use parkwise_core::{ParkingRequest, SpaceRequirement};
///
/// let request = ParkingRequest::new(Coord { x: 0, y: 0 }, Coord { x: 6, y: 4 })
///     .requiring(SpaceRequirement::EvCharging);
/// assert_eq!(request.required_space, SpaceRequirement::EvCharging);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct ParkingRequest {
    /// Where the driver is now.
    pub origin: GridPosition,
    /// Where the driver wants to end up on foot.
    pub destination: GridPosition,
    /// Specialised space the driver needs, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub required_space: SpaceRequirement,
}

impl ParkingRequest {
    /// Build a request with no specialised-space requirement.
    #[must_use]
    pub const fn new(origin: GridPosition, destination: GridPosition) -> Self {
        Self {
            origin,
            destination,
            required_space: SpaceRequirement::None,
        }
    }

    /// Set the required space kind while returning `self` for chaining.
    #[must_use]
    pub fn requiring(mut self, required_space: SpaceRequirement) -> Self {
        self.required_space = required_space;
        self
    }
}
