//! Fixed-point view of a cost matrix for `pathfinding`'s Kuhn–Munkres.

use parkwise_core::{AssignmentError, CostMatrix};
use pathfinding::kuhn_munkres::Weights;

/// Costs keep six decimal places.
const SCALE: f64 = 1_000_000.0;

/// Smallest cost difference the solver distinguishes.
pub const COST_RESOLUTION: f64 = 1.0e-6;

/// Upper bound on the sum of one full matching, leaving room for the
/// algorithm's dual labels.
const HEADROOM: i64 = i64::MAX >> 2;

/// Row-major integer costs.
#[derive(Debug, Clone)]
pub(crate) struct ScaledCosts {
    rows: usize,
    columns: usize,
    units: Vec<i64>,
}

impl ScaledCosts {
    /// Scale every cost to integer units.
    ///
    /// A single cost may be at most `HEADROOM / (min(rows, columns) + 1)`
    /// units so that no matching can overflow.
    pub(crate) fn from_matrix(costs: &CostMatrix) -> Result<Self, AssignmentError> {
        let pairs = costs.rows().min(costs.columns()).saturating_add(1);
        let limit = i64::try_from(pairs)
            .ok()
            .and_then(|count| HEADROOM.checked_div(count))
            .unwrap_or(0);

        let mut units = Vec::with_capacity(costs.cell_count());
        for (row, values) in costs.iter_rows().enumerate() {
            for (column, &value) in values.iter().enumerate() {
                let scaled = to_units(value);
                if scaled > limit {
                    return Err(AssignmentError::CostOutOfRange { row, column, value });
                }
                units.push(scaled);
            }
        }
        Ok(Self {
            rows: costs.rows(),
            columns: costs.columns(),
            units,
        })
    }
}

#[expect(clippy::float_arithmetic, reason = "fixed-point conversion")]
#[expect(
    clippy::cast_possible_truncation,
    reason = "out-of-range costs saturate and are rejected by the caller"
)]
fn to_units(cost: f64) -> i64 {
    (cost * SCALE).round() as i64
}

impl Weights<i64> for ScaledCosts {
    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn at(&self, row: usize, col: usize) -> i64 {
        row.checked_mul(self.columns)
            .and_then(|start| start.checked_add(col))
            .and_then(|index| self.units.get(index))
            .copied()
            .unwrap_or(0)
    }

    fn neg(&self) -> Self {
        Self {
            rows: self.rows,
            columns: self.columns,
            units: self.units.iter().map(|unit| unit.saturating_neg()).collect(),
        }
    }
}
