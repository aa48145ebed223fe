//! Capacity-bounded many-to-one matching by column expansion.

use super::{Assignment, AssignmentError, CostMatrix};

/// How the planner maps requests onto facilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum AssignmentMode {
    /// Each facility takes at most one request.
    #[default]
    OneToOne,
    /// Each facility takes up to its free slot count.
    ByCapacity,
}

/// A cost matrix whose columns are repeated once per unit of capacity.
///
/// A facility with capacity `k` contributes `k` identical columns, so a
/// one-to-one solver over the expanded matrix yields a many-to-one matching
/// that respects every capacity. Capacities beyond the row count are clamped
/// since no more rows than that can share a facility.
///
/// # Examples
/// ```
/// use parkwise_core::{Assignment, CapacityExpansion, CostMatrix};
///
/// # fn main() -> Result<(), parkwise_core::AssignmentError> {
/// let costs = CostMatrix::new(vec![vec![1.0, 5.0], vec![1.0, 5.0]])?;
/// let expansion = CapacityExpansion::expand(&costs, &[2, 1])?;
/// assert_eq!(expansion.matrix().columns(), 3);
///
/// let expanded = Assignment::new(vec![(0, 0), (1, 1)], 2.0);
/// assert_eq!(expansion.collapse(&expanded).pairs(), &[(0, 0), (1, 0)]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CapacityExpansion {
    matrix: CostMatrix,
    owners: Vec<usize>,
}

impl CapacityExpansion {
    /// Expand `costs` so column `c` appears `capacities[c]` times.
    ///
    /// Zero-capacity columns vanish.
    ///
    /// # Errors
    /// [`AssignmentError::CapacityMismatch`] when `capacities` does not have
    /// one entry per column.
    pub fn expand(costs: &CostMatrix, capacities: &[u32]) -> Result<Self, AssignmentError> {
        if capacities.len() != costs.columns() {
            return Err(AssignmentError::CapacityMismatch {
                expected: costs.columns(),
                found: capacities.len(),
            });
        }
        let owners: Vec<usize> = capacities
            .iter()
            .enumerate()
            .flat_map(|(column, &capacity)| {
                let copies = usize::try_from(capacity)
                    .unwrap_or(usize::MAX)
                    .min(costs.rows());
                std::iter::repeat_n(column, copies)
            })
            .collect();
        let rows = costs
            .iter_rows()
            .map(|row| {
                owners
                    .iter()
                    .filter_map(|&column| row.get(column).copied())
                    .collect()
            })
            .collect();
        Ok(Self {
            matrix: CostMatrix::new(rows)?,
            owners,
        })
    }

    /// Matrix to hand to a one-to-one solver.
    #[must_use]
    pub const fn matrix(&self) -> &CostMatrix {
        &self.matrix
    }

    /// Original column behind an expanded column.
    #[must_use]
    pub fn owner_of(&self, expanded_column: usize) -> Option<usize> {
        self.owners.get(expanded_column).copied()
    }

    /// Map an assignment over the expanded matrix back to original columns.
    #[must_use]
    pub fn collapse(&self, expanded: &Assignment) -> Assignment {
        let pairs = expanded
            .pairs()
            .iter()
            .filter_map(|&(row, column)| self.owner_of(column).map(|owner| (row, owner)))
            .collect();
        Assignment::new(pairs, expanded.total_cost())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn rejects_mismatched_capacities() {
        let costs = CostMatrix::new(vec![vec![1.0, 2.0]]).expect("valid");
        let err = CapacityExpansion::expand(&costs, &[1]).expect_err("mismatch");
        assert_eq!(
            err,
            AssignmentError::CapacityMismatch {
                expected: 2,
                found: 1
            }
        );
    }

    #[rstest]
    fn zero_capacity_columns_vanish() {
        let costs = CostMatrix::new(vec![vec![1.0, 2.0, 3.0]]).expect("valid");
        let expansion = CapacityExpansion::expand(&costs, &[0, 1, 0]).expect("expand");
        assert_eq!(expansion.matrix().row(0), Some(&[2.0][..]));
        assert_eq!(expansion.owner_of(0), Some(1));
        assert_eq!(expansion.owner_of(1), None);
    }

    #[rstest]
    fn capacity_is_clamped_to_row_count() {
        let costs = CostMatrix::new(vec![vec![1.0], vec![2.0]]).expect("valid");
        let expansion = CapacityExpansion::expand(&costs, &[500]).expect("expand");
        assert_eq!(expansion.matrix().columns(), 2);
        assert_eq!(expansion.matrix().row(1), Some(&[2.0, 2.0][..]));
    }
}
