use thiserror::Error;

/// Errors that can occur while building a cost matrix or assigning over it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssignError {
    #[error("cannot assign {rows} rows injectively into {columns} columns; transpose the matrix first")]
    TooManyRows { rows: usize, columns: usize },
    #[error("cost matrix expects {expected} cells, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
}
