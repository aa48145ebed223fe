//! Facade crate for the Parkwise parking recommender.
//!
//! This crate re-exports the core domain types and exposes the default
//! scorer and assignment solver behind feature flags.

#![forbid(unsafe_code)]

pub use parkwise_core::{
    Assignment, AssignmentError, AssignmentMode, AssignmentSolver, CostMatrix, CriterionValues,
    Facility, FacilityError, FacilityId, FacilitySource, GridPosition, JointPlan, Journey,
    NormalizationStats, ParkingPlanner, ParkingRequest, PlanError, PlannerConfig, Ranking,
    Recommendation, ScoredFacility, Scorer, SlotStates, SpaceRequirement, SpecialisedSpaces,
    TierTimes, TimeModel, TrafficTier, WeightError, WeightVector, criteria, filter_eligible,
    is_eligible, rank, rank_by_travel_time, recommend,
};

#[cfg(feature = "serde")]
pub use parkwise_core::ConfigError;

#[cfg(feature = "scorer")]
pub use parkwise_scorer::{Composite, CompositeError, WeightedScorer};

#[cfg(feature = "solver-hungarian")]
pub use parkwise_solver_hungarian::HungarianSolver;
