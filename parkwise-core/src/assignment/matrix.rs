//! Validated cost matrices.

use super::AssignmentError;

/// Rectangular matrix of non-negative, finite pairing costs.
///
/// Rows are requests and columns are facilities. Construction validates the
/// shape and every entry, so solvers can rely on well-formed input.
///
/// # Examples
/// ```
/// use parkwise_core::CostMatrix;
///
/// # fn main() -> Result<(), parkwise_core::AssignmentError> {
/// let costs = CostMatrix::new(vec![vec![4.0, 1.0], vec![2.0, 3.0]])?;
/// assert_eq!((costs.rows(), costs.columns()), (2, 2));
/// assert_eq!(costs.get(1, 0), Some(2.0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CostMatrix {
    rows: usize,
    columns: usize,
    cells: Vec<f64>,
}

impl CostMatrix {
    /// Validate and build a matrix from row vectors.
    ///
    /// # Errors
    /// [`AssignmentError::Ragged`] when rows differ in length,
    /// [`AssignmentError::NonFinite`] for NaN or infinite entries and
    /// [`AssignmentError::Negative`] for entries below zero.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, AssignmentError> {
        let matrix = Self::rectangular(rows)?;
        for (index, &value) in matrix.cells.iter().enumerate() {
            let (row, column) = Self::position(index, matrix.columns);
            if !value.is_finite() {
                return Err(AssignmentError::NonFinite { row, column });
            }
            if value < 0.0 {
                return Err(AssignmentError::Negative { row, column, value });
            }
        }
        Ok(matrix)
    }

    /// Convert a score matrix into costs by subtracting every score from the
    /// largest one, so the best-scoring pair costs zero.
    ///
    /// # Errors
    /// [`AssignmentError::Ragged`] or [`AssignmentError::NonFinite`] when the
    /// scores are malformed, and [`AssignmentError::CostOutOfRange`] when a
    /// score's distance from the best overflows.
    ///
    /// # Examples
    /// ```
    /// use parkwise_core::CostMatrix;
    ///
    /// let costs = CostMatrix::from_scores(vec![vec![2.0, -1.0], vec![0.5, 2.0]]).unwrap();
    /// assert_eq!(costs.get(0, 1), Some(3.0));
    /// assert_eq!(costs.get(1, 1), Some(0.0));
    /// ```
    #[expect(clippy::float_arithmetic, reason = "scores are floating-point")]
    pub fn from_scores(scores: Vec<Vec<f64>>) -> Result<Self, AssignmentError> {
        let mut matrix = Self::rectangular(scores)?;
        if let Some(index) = matrix.cells.iter().position(|value| !value.is_finite()) {
            let (row, column) = Self::position(index, matrix.columns);
            return Err(AssignmentError::NonFinite { row, column });
        }
        let best = matrix.cells.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        for (index, value) in matrix.cells.iter_mut().enumerate() {
            let cost = best - *value;
            if !cost.is_finite() {
                let (row, column) = Self::position(index, matrix.columns);
                return Err(AssignmentError::CostOutOfRange {
                    row,
                    column,
                    value: cost,
                });
            }
            *value = cost;
        }
        Ok(matrix)
    }

    fn rectangular(rows: Vec<Vec<f64>>) -> Result<Self, AssignmentError> {
        let row_count = rows.len();
        let columns = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(row_count.saturating_mul(columns));
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != columns {
                return Err(AssignmentError::Ragged {
                    row,
                    expected: columns,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }
        Ok(Self {
            rows: row_count,
            columns,
            cells,
        })
    }

    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "row-major index decomposition"
    )]
    const fn position(index: usize, columns: usize) -> (usize, usize) {
        if columns == 0 {
            return (0, 0);
        }
        (index / columns, index % columns)
    }

    /// Number of rows (requests).
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (facilities).
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.rows.saturating_mul(self.columns)
    }

    /// Report whether either dimension is zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }

    /// Cost of pairing `row` with `column`.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.cells.get(row * self.columns + column).copied()
    }

    /// Costs of one row.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.columns;
        self.cells.get(start..start + self.columns)
    }

    /// Iterate over rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.rows).filter_map(|row| self.row(row))
    }

    /// The matrix with rows and columns swapped.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let cells = (0..self.columns)
            .flat_map(|column| (0..self.rows).filter_map(move |row| self.get(row, column)))
            .collect();
        Self {
            rows: self.columns,
            columns: self.rows,
            cells,
        }
    }
}
