use thiserror::Error;

/// Errors raised while building a phrase distance matrix.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DistanceError {
    #[error("smaller set has {smaller} phrases but larger set only {larger}; swap the arguments")]
    SmallerSetLarger { smaller: usize, larger: usize },
}
