//! Phrase set alignment.
//!
//! Pairs the phrases of two lists (two transcripts, two label sets) when no
//! key says which phrase corresponds to which. Similarity comes from a
//! phrase distance built on word edit distance, and pairing from a greedy
//! injective assignment over the resulting distance matrix.
//!
//! ## Stages
//!
//! 1.  [`read_phrase_sets`] parses the two count-prefixed phrase blocks.
//! 2.  [`align`] picks the smaller set as matrix rows, builds the
//!     [`distance::DistanceMatrix`], and runs [`assign::assign_greedy_with`].
//! 3.  [`render`] / [`write_alignment`] serialize the [`Alignment`].
//!
//! [`run`] chains all three for the one-shot file transformation.
//!
//! ## Example
//!
//! ```
//! use phrase_align::{align_text, AlignConfig};
//!
//! let input = "1\nhello world\n2\nhello there\ngoodbye world\n";
//! let output = align_text(input, &AlignConfig::default()).unwrap();
//!
//! let lines: Vec<&str> = output.lines().collect();
//! assert_eq!(lines.len(), 2);
//! assert!(lines[0].starts_with("hello world:"));
//! assert!(lines[1].ends_with(":?"));
//! ```
//!
//! ## Observability
//!
//! Every [`align`] call runs inside a `tracing` span and logs
//! `align_success` / `align_failure` events. Install an [`AlignMetrics`]
//! implementation via [`set_align_metrics`] to receive latency and shape
//! per run.

mod align;
mod config;
mod error;
mod io;
mod metrics;

pub use assign::{AssignError, Assignment, CandidateOrder, CostMatrix};
pub use distance::{phrase_distance, word_distance, DistanceError, MatrixConfig, Phrase};

pub use crate::align::{align, align_text, run, AlignedPair, Alignment, Side, UnmatchedPhrase};
pub use crate::config::{AlignConfig, AssignmentConfig, ConfigLoadError, OutputFormat};
pub use crate::error::{AlignError, Block};
pub use crate::io::{
    read_phrase_sets, read_phrase_sets_from_path, render, render_json, render_text,
    write_alignment,
};
pub use crate::metrics::{set_align_metrics, AlignMetrics};
