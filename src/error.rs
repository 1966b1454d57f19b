use std::io;
use std::path::PathBuf;

use assign::AssignError;
use distance::DistanceError;
use thiserror::Error;

/// Which of the two input blocks an input error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    First,
    Second,
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Block::First => f.write_str("first"),
            Block::Second => f.write_str("second"),
        }
    }
}

/// Errors that can occur while reading, aligning or writing phrase sets.
#[derive(Debug, Error)]
pub enum AlignError {
    #[error("{block} block: missing count header")]
    MissingHeader { block: Block },

    #[error("{block} block: count header {line:?} does not start with a non-negative integer")]
    MalformedHeader { block: Block, line: String },

    #[error("{block} block: expected {expected} phrases, found {found}")]
    MissingPhrases {
        block: Block,
        expected: usize,
        found: usize,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("distance matrix failure: {0}")]
    Distance(#[from] DistanceError),

    #[error("assignment failure: {0}")]
    Assign(#[from] AssignError),

    #[error("failed to encode alignment as JSON: {0}")]
    Json(#[from] serde_json::Error),
}
