//! Estimate travel times over the facility grid.
//!
//! [`TimeModel`] converts two grid positions and a [`TrafficTier`](crate::TrafficTier)
//! into a [`Duration`](std::time::Duration) using Manhattan distance scaled
//! by the tier's minutes-per-unit constant. [`Journey`] pairs the drive to a
//! facility with the walk from it to the destination.

mod model;

pub use model::{Journey, TimeModel, minutes};
