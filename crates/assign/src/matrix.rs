//! Dense cost matrix consumed by the assignment stage.
//!
//! Cells are stored row-major in a single allocation. The matrix is built
//! once and then only read, so it is safe to share across threads.

use serde::{Deserialize, Serialize};

use crate::error::AssignError;

/// Row-major `rows x columns` table of non-negative integer costs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(try_from = "RawCostMatrix")]
pub struct CostMatrix {
    rows: usize,
    columns: usize,
    cells: Vec<usize>,
}

/// Unchecked wire shape; deserialized matrices go through [`CostMatrix::new`].
#[derive(Deserialize)]
struct RawCostMatrix {
    rows: usize,
    columns: usize,
    cells: Vec<usize>,
}

impl TryFrom<RawCostMatrix> for CostMatrix {
    type Error = AssignError;

    fn try_from(raw: RawCostMatrix) -> Result<Self, Self::Error> {
        CostMatrix::new(raw.rows, raw.columns, raw.cells)
    }
}

impl CostMatrix {
    /// Wrap a row-major cell buffer. `cells.len()` must equal `rows * columns`.
    pub fn new(rows: usize, columns: usize, cells: Vec<usize>) -> Result<Self, AssignError> {
        let expected = rows
            .checked_mul(columns)
            .ok_or(AssignError::ShapeMismatch {
                expected: usize::MAX,
                actual: cells.len(),
            })?;
        if cells.len() != expected {
            return Err(AssignError::ShapeMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// Build from nested rows. Every row must have the width of the first one.
    pub fn from_rows(rows: Vec<Vec<usize>>) -> Result<Self, AssignError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(height * width);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(AssignError::RaggedRow {
                    row,
                    expected: width,
                    actual: values.len(),
                });
            }
            cells.extend(values);
        }
        Ok(Self {
            rows: height,
            columns: width,
            cells,
        })
    }

    /// Build by evaluating `cost(row, column)` for every cell.
    pub fn from_fn<F>(rows: usize, columns: usize, mut cost: F) -> Self
    where
        F: FnMut(usize, usize) -> usize,
    {
        let mut cells = Vec::with_capacity(rows * columns);
        for r in 0..rows {
            for c in 0..columns {
                cells.push(cost(r, c));
            }
        }
        Self {
            rows,
            columns,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Cost at `(row, column)`. Panics when out of bounds, like slice indexing.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> usize {
        self.cells[row * self.columns + column]
    }

    /// All costs of one row, in column order.
    #[inline]
    pub fn row(&self, row: usize) -> &[usize] {
        let start = row * self.columns;
        &self.cells[start..start + self.columns]
    }

    /// Swap the roles of rows and columns.
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.columns, self.rows, |r, c| self.get(c, r))
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_keeps_row_major_layout() {
        let m = CostMatrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).expect("matrix");
        assert_eq!(m.rows(), 2);
        assert_eq!(m.columns(), 3);
        assert_eq!(m.get(1, 2), 6);
        assert_eq!(m.row(0), &[1, 2, 3]);
    }

    #[test]
    fn ragged_rows_rejected() {
        let res = CostMatrix::from_rows(vec![vec![1, 2], vec![3]]);
        assert_eq!(
            res,
            Err(AssignError::RaggedRow {
                row: 1,
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn new_checks_cell_count() {
        let res = CostMatrix::new(2, 2, vec![0; 3]);
        assert!(matches!(
            res,
            Err(AssignError::ShapeMismatch {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn transpose_swaps_shape() {
        let m = CostMatrix::from_fn(2, 3, |r, c| r * 10 + c);
        let t = m.transpose();
        assert_eq!(t.rows(), 3);
        assert_eq!(t.columns(), 2);
        for r in 0..2 {
            for c in 0..3 {
                assert_eq!(m.get(r, c), t.get(c, r));
            }
        }
    }

    #[test]
    fn deserialize_checks_shape() {
        let res = serde_json::from_str::<CostMatrix>(r#"{"rows":2,"columns":2,"cells":[]}"#);
        let err = res.expect_err("cell count does not match shape");
        assert!(err.to_string().contains("expects 4 cells"), "{err}");

        let m: CostMatrix =
            serde_json::from_str(r#"{"rows":1,"columns":2,"cells":[3,4]}"#).expect("matrix");
        assert_eq!(m.row(0), &[3, 4]);
    }

    #[test]
    fn empty_rows_give_empty_matrix() {
        let m = CostMatrix::from_rows(Vec::new()).expect("matrix");
        assert_eq!(m.rows(), 0);
        assert_eq!(m.columns(), 0);
        assert!(m.is_empty());
    }
}
