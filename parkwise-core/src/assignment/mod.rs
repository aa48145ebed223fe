//! Joint assignment of requests to facilities.
//!
//! The [`AssignmentSolver`] trait computes a minimum-cost matching over a
//! [`CostMatrix`]. Solving is pure: it reports a pairing and never reserves
//! a slot.

mod capacity;
mod matrix;

pub use capacity::{AssignmentMode, CapacityExpansion};
pub use matrix::CostMatrix;

use thiserror::Error;

/// Errors raised while building cost matrices or solving assignments.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssignmentError {
    /// A row's length differed from the first row's.
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        /// Offending row.
        row: usize,
        /// Column count of the first row.
        expected: usize,
        /// Column count of the offending row.
        found: usize,
    },
    /// An entry was NaN or infinite.
    #[error("cost at ({row}, {column}) is not finite")]
    NonFinite {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        column: usize,
    },
    /// An entry was below zero.
    #[error("cost at ({row}, {column}) is negative: {value}")]
    Negative {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        column: usize,
        /// Rejected cost.
        value: f64,
    },
    /// The matrix exceeds the solver's size bound.
    #[error("cost matrix has {cells} cells, more than the limit of {max_cells}")]
    TooLarge {
        /// Cells in the rejected matrix.
        cells: usize,
        /// Configured bound.
        max_cells: usize,
    },
    /// A cost cannot be represented in the solver's internal precision.
    #[error("cost at ({row}, {column}) is out of range: {value}")]
    CostOutOfRange {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        column: usize,
        /// Rejected cost.
        value: f64,
    },
    /// Capacities did not line up with the matrix columns.
    #[error("expected {expected} capacities, got {found}")]
    CapacityMismatch {
        /// Column count of the matrix.
        expected: usize,
        /// Number of capacities supplied.
        found: usize,
    },
}

/// Matched `(request, facility)` index pairs and their total cost.
///
/// Pairs are sorted by request index. When the matrix is not square only
/// `min(rows, columns)` pairs exist and the larger side is partially
/// unmatched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Assignment {
    pairs: Vec<(usize, usize)>,
    total_cost: f64,
}

impl Assignment {
    /// Build an assignment, sorting the pairs by request index.
    #[must_use]
    pub fn new(mut pairs: Vec<(usize, usize)>, total_cost: f64) -> Self {
        pairs.sort_unstable();
        Self { pairs, total_cost }
    }

    /// `(request, facility)` pairs in request order.
    #[must_use]
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Sum of the matched costs.
    #[must_use]
    pub const fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Facility matched to `request`, if any.
    #[must_use]
    pub fn facility_for(&self, request: usize) -> Option<usize> {
        self.pairs
            .binary_search_by_key(&request, |&(row, _)| row)
            .ok()
            .and_then(|index| self.pairs.get(index))
            .map(|&(_, column)| column)
    }

    /// Number of matched pairs.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Report whether nothing was matched.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Compute a minimum-cost matching between the rows and columns of a
/// [`CostMatrix`].
///
/// Implementations must cover `min(rows, columns)` pairs, use no row or
/// column twice, and return an empty [`Assignment`] when either dimension is
/// zero. They are `Send + Sync` so one solver can serve concurrent callers.
pub trait AssignmentSolver: Send + Sync {
    /// Solve the assignment problem for `costs`.
    ///
    /// # Errors
    /// Implementations may reject matrices they cannot handle, for example
    /// with [`AssignmentError::TooLarge`].
    fn solve(&self, costs: &CostMatrix) -> Result<Assignment, AssignmentError>;
}
