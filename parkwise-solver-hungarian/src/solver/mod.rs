//! `HungarianSolver` implementation backed by `pathfinding`.

use parkwise_core::{Assignment, AssignmentError, AssignmentSolver, CostMatrix};
use pathfinding::kuhn_munkres::kuhn_munkres_min;

use crate::weights::ScaledCosts;
pub use crate::weights::COST_RESOLUTION;

/// Default bound on `rows × columns`; roughly a 500 × 500 matrix.
pub const DEFAULT_MAX_CELLS: usize = 250_000;

/// Exact minimum-cost assignment using the Kuhn–Munkres algorithm.
///
/// The solver is stateless apart from its size bound and can be shared
/// between threads. Matrices with more than `max_cells` entries are
/// rejected with [`AssignmentError::TooLarge`] instead of being solved in
/// cubic time.
///
/// Costs are rounded to the nearest multiple of [`COST_RESOLUTION`] before
/// solving, so the returned total can exceed the true optimum by up to
/// `min(rows, columns) × COST_RESOLUTION`. The reported
/// [`Assignment::total_cost`] is always the exact sum of the chosen cells.
///
/// # Examples
/// ```
/// use parkwise_core::{AssignmentSolver, CostMatrix};
/// use parkwise_solver_hungarian::HungarianSolver;
///
/// # fn main() -> Result<(), parkwise_core::AssignmentError> {
/// let costs = CostMatrix::new(vec![vec![4.0, 1.0], vec![2.0, 3.0]])?;
/// let assignment = HungarianSolver::new().solve(&costs)?;
/// assert_eq!(assignment.pairs(), &[(0, 1), (1, 0)]);
/// assert_eq!(assignment.total_cost(), 3.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HungarianSolver {
    max_cells: usize,
}

impl Default for HungarianSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl HungarianSolver {
    /// Construct a solver with [`DEFAULT_MAX_CELLS`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_max_cells(DEFAULT_MAX_CELLS)
    }

    /// Construct a solver with an explicit size bound.
    #[must_use]
    pub const fn with_max_cells(max_cells: usize) -> Self {
        Self { max_cells }
    }

    /// Largest matrix, in cells, this solver accepts.
    #[must_use]
    pub const fn max_cells(&self) -> usize {
        self.max_cells
    }

    /// Solve a matrix with no more rows than columns.
    fn solve_wide(costs: &CostMatrix) -> Result<Vec<(usize, usize)>, AssignmentError> {
        let weights = ScaledCosts::from_matrix(costs)?;
        let (_, columns) = kuhn_munkres_min(&weights);
        Ok(columns.into_iter().enumerate().collect())
    }
}

impl AssignmentSolver for HungarianSolver {
    fn solve(&self, costs: &CostMatrix) -> Result<Assignment, AssignmentError> {
        if costs.cell_count() > self.max_cells {
            return Err(AssignmentError::TooLarge {
                cells: costs.cell_count(),
                max_cells: self.max_cells,
            });
        }
        if costs.is_empty() {
            return Ok(Assignment::default());
        }

        let pairs = if costs.rows() > costs.columns() {
            Self::solve_wide(&costs.transpose())?
                .into_iter()
                .map(|(facility, request)| (request, facility))
                .collect()
        } else {
            Self::solve_wide(costs)?
        };

        let total = total_cost(costs, &pairs);
        log::debug!(
            "matched {} of {} requests across {} facilities, total cost {total}",
            pairs.len(),
            costs.rows(),
            costs.columns()
        );
        Ok(Assignment::new(pairs, total))
    }
}

/// Sum the original floating-point costs of the chosen pairs.
fn total_cost(costs: &CostMatrix, pairs: &[(usize, usize)]) -> f64 {
    pairs
        .iter()
        .filter_map(|&(row, column)| costs.get(row, column))
        .sum()
}
