//! Exact joint assignment for Parkwise.
//!
//! This crate provides [`HungarianSolver`], the default implementation of the
//! [`AssignmentSolver`](parkwise_core::AssignmentSolver) trait. Costs are
//! converted to fixed-point integers and handed to the Kuhn–Munkres
//! implementation in `pathfinding`, which runs in `O(n³)` and finds a
//! minimum-cost matching over `min(rows, columns)` pairs.
//!
//! Rectangular matrices are supported in either orientation. When there are
//! more requests than facilities the matrix is transposed before solving and
//! the pairs are flipped back afterwards, so the surplus requests stay
//! unmatched.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod solver;
mod weights;

pub use solver::{COST_RESOLUTION, DEFAULT_MAX_CELLS, HungarianSolver};
