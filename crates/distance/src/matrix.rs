//! Phrase-level distance matrix.
//!
//! Every cell is an independent [`phrase_distance`] call, so rows can be
//! computed on the rayon pool without changing a single value.

use assign::CostMatrix;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::DistanceError;
use crate::phrase::{phrase_distance, Phrase};

/// Knobs for building the phrase distance matrix.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MatrixConfig {
    /// Compute rows in parallel.
    #[serde(default)]
    pub use_parallel: bool,
}

impl MatrixConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }
}

/// Builder for the `smaller x larger` phrase distance matrix.
pub struct DistanceMatrix;

impl DistanceMatrix {
    /// Build the matrix with rows indexed by `smaller` and columns by `larger`.
    ///
    /// `smaller` must not hold more phrases than `larger`; the result feeds
    /// straight into the assignment stage, which relies on that shape.
    pub fn build(
        smaller: &[Phrase],
        larger: &[Phrase],
        cfg: &MatrixConfig,
    ) -> Result<CostMatrix, DistanceError> {
        if smaller.len() > larger.len() {
            return Err(DistanceError::SmallerSetLarger {
                smaller: smaller.len(),
                larger: larger.len(),
            });
        }

        if !cfg.use_parallel {
            return Ok(CostMatrix::from_fn(smaller.len(), larger.len(), |i, j| {
                phrase_distance(&smaller[i], &larger[j])
            }));
        }

        let rows: Vec<Vec<usize>> = smaller
            .par_iter()
            .map(|row| larger.iter().map(|col| phrase_distance(row, col)).collect())
            .collect();

        Ok(CostMatrix::from_fn(smaller.len(), larger.len(), |i, j| {
            rows[i][j]
        }))
    }
}
