//! Core domain types and algorithms for the Parkwise engine.
//!
//! The crate models parking facilities and driver requests, estimates grid
//! travel times, normalises heterogeneous criteria against the candidate
//! population, filters facilities by availability and ranks them. It also
//! defines the seams the rest of the workspace plugs into: the [`Scorer`]
//! trait for weighted scoring, the [`AssignmentSolver`] trait for joint
//! matching and the [`FacilitySource`] trait for facility data.
//!
//! Constructors return `Result` so invalid records are rejected early.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod assignment;
mod config;
pub mod criteria;
mod eligibility;
mod facility;
mod normalise;
mod planner;
mod ranking;
mod recommend;
mod request;
mod scorer;
mod store;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
mod tier;
pub mod travel_time;

pub use assignment::{
    Assignment, AssignmentError, AssignmentMode, AssignmentSolver, CapacityExpansion, CostMatrix,
};
#[cfg(feature = "serde")]
pub use config::ConfigError;
pub use config::PlannerConfig;
pub use criteria::{CriterionSample, CriterionValues, WeightError, WeightVector};
pub use eligibility::{filter_eligible, is_eligible};
pub use facility::{
    Facility, FacilityError, FacilityId, GridPosition, SlotStates, SpecialisedSpaces,
};
pub use normalise::{CriterionStats, NormalizationStats, normalise};
pub use planner::{JointPlan, ParkingPlanner, PlanError, Ranking, Recommendation};
pub use ranking::{ScoredFacility, rank, rank_by_travel_time};
pub use recommend::recommend;
pub use request::{ParkingRequest, SpaceRequirement};
pub use scorer::Scorer;
pub use store::FacilitySource;
pub use tier::{TierTimes, TrafficTier, TrafficTierParseError};
pub use travel_time::{Journey, TimeModel};
