use std::time::Instant;

use assign::assign_greedy_with;
use distance::{DistanceMatrix, Phrase};
use serde::{Deserialize, Serialize};
use tracing::{info, warn, Level};

use crate::config::AlignConfig;
use crate::error::AlignError;
use crate::io::{read_phrase_sets, read_phrase_sets_from_path, render, write_alignment};
use crate::metrics::metrics_recorder;

/// Which input set drove the pairing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    First,
    Second,
}

/// One committed pair, phrases kept in input-set order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlignedPair {
    /// Phrase from the first input set.
    pub first: String,
    /// Phrase from the second input set.
    pub second: String,
    /// Phrase distance of the pair.
    pub cost: usize,
}

/// A phrase of the larger set that got no partner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnmatchedPhrase {
    pub side: Side,
    /// Index in its own input set.
    pub index: usize,
    pub phrase: String,
}

/// Result of aligning two phrase sets.
///
/// `pairs` follows the row order of the smaller set; `unmatched` follows the
/// index order of the larger set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Alignment {
    /// The set whose phrases became matrix rows. The first set wins ties.
    pub smaller: Side,
    pub pairs: Vec<AlignedPair>,
    pub unmatched: Vec<UnmatchedPhrase>,
}

impl Alignment {
    pub fn total_cost(&self) -> usize {
        self.pairs.iter().map(|p| p.cost).sum()
    }
}

/// Align two phrase sets.
///
/// The set with fewer phrases provides the rows of the distance matrix (the
/// first set on equal sizes); every one of its phrases receives a distinct
/// partner from the other set, whose leftovers are reported as unmatched.
pub fn align(
    first: &[Phrase],
    second: &[Phrase],
    cfg: &AlignConfig,
) -> Result<Alignment, AlignError> {
    let start = Instant::now();
    let (smaller, rows, columns) = if first.len() > second.len() {
        (Side::Second, second.len(), first.len())
    } else {
        (Side::First, first.len(), second.len())
    };

    let span = tracing::span!(
        Level::INFO,
        "phrase_align.align",
        rows,
        columns,
        smaller = ?smaller
    );
    let _guard = span.enter();

    let result = align_inner(first, second, smaller, cfg);
    let elapsed = start.elapsed();

    match &result {
        Ok(alignment) => {
            info!(
                pairs = alignment.pairs.len(),
                unmatched = alignment.unmatched.len(),
                total_cost = alignment.total_cost(),
                elapsed_micros = elapsed.as_micros(),
                "align_success"
            );
        }
        Err(err) => {
            warn!(
                error = %err,
                elapsed_micros = elapsed.as_micros(),
                "align_failure"
            );
        }
    }

    if let Some(recorder) = metrics_recorder() {
        recorder.record_align(
            elapsed,
            rows,
            columns,
            result.as_ref().map(Alignment::total_cost),
        );
    }

    result
}

fn align_inner(
    first: &[Phrase],
    second: &[Phrase],
    smaller: Side,
    cfg: &AlignConfig,
) -> Result<Alignment, AlignError> {
    let (rows, columns) = match smaller {
        Side::First => (first, second),
        Side::Second => (second, first),
    };

    let matrix = DistanceMatrix::build(rows, columns, &cfg.matrix)?;
    let assignment = assign_greedy_with(&matrix, cfg.assignment.order)?;

    let pairs = assignment
        .pairs()
        .map(|(row, column)| {
            let (first_idx, second_idx) = match smaller {
                Side::First => (row, column),
                Side::Second => (column, row),
            };
            AlignedPair {
                first: first[first_idx].text().to_owned(),
                second: second[second_idx].text().to_owned(),
                cost: matrix.get(row, column),
            }
        })
        .collect();

    let larger_side = match smaller {
        Side::First => Side::Second,
        Side::Second => Side::First,
    };
    let unmatched = assignment
        .unassigned_columns()
        .into_iter()
        .map(|index| UnmatchedPhrase {
            side: larger_side,
            index,
            phrase: columns[index].text().to_owned(),
        })
        .collect();

    Ok(Alignment {
        smaller,
        pairs,
        unmatched,
    })
}

/// Parse both phrase blocks from `input`, align them and render the result
/// in the configured output format.
pub fn align_text(input: &str, cfg: &AlignConfig) -> Result<String, AlignError> {
    let (first, second) = read_phrase_sets(input)?;
    let alignment = align(&first, &second, cfg)?;
    render(&alignment, cfg.format)
}

/// One-shot file transformation: read `cfg.input`, align, write `cfg.output`.
pub fn run(cfg: &AlignConfig) -> Result<Alignment, AlignError> {
    let (first, second) = read_phrase_sets_from_path(&cfg.input)?;
    let alignment = align(&first, &second, cfg)?;
    write_alignment(&cfg.output, &alignment, cfg.format)?;
    info!(
        input = %cfg.input.display(),
        output = %cfg.output.display(),
        "alignment_written"
    );
    Ok(alignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assign::CandidateOrder;

    fn phrases(texts: &[&str]) -> Vec<Phrase> {
        texts.iter().map(|t| Phrase::new(*t)).collect()
    }

    #[test]
    fn first_set_smaller_keeps_orientation() {
        let first = phrases(&["hello world"]);
        let second = phrases(&["hello there", "goodbye world"]);
        let out = align(&first, &second, &AlignConfig::default()).expect("align");

        assert_eq!(out.smaller, Side::First);
        assert_eq!(out.pairs.len(), 1);
        assert_eq!(out.pairs[0].first, "hello world");
        assert_eq!(out.unmatched.len(), 1);
        assert_eq!(out.unmatched[0].side, Side::Second);
        assert_ne!(out.unmatched[0].phrase, out.pairs[0].second);
    }

    #[test]
    fn second_set_smaller_swaps_roles() {
        let first = phrases(&["red apple", "green pear", "blue sky"]);
        let second = phrases(&["blue skies", "red apples"]);
        let out = align(&first, &second, &AlignConfig::default()).expect("align");

        assert_eq!(out.smaller, Side::Second);
        assert_eq!(
            out.pairs,
            vec![
                AlignedPair {
                    first: "blue sky".into(),
                    second: "blue skies".into(),
                    cost: 3,
                },
                AlignedPair {
                    first: "red apple".into(),
                    second: "red apples".into(),
                    cost: 1,
                },
            ]
        );
        assert_eq!(
            out.unmatched,
            vec![UnmatchedPhrase {
                side: Side::First,
                index: 1,
                phrase: "green pear".into(),
            }]
        );
        assert_eq!(out.total_cost(), 4);
    }

    #[test]
    fn equal_sizes_pick_first_as_smaller() {
        let first = phrases(&["a b", "c d"]);
        let second = phrases(&["c d", "a b"]);
        let out = align(&first, &second, &AlignConfig::default()).expect("align");
        assert_eq!(out.smaller, Side::First);
        assert!(out.unmatched.is_empty());
        assert_eq!(out.pairs[0].second, "a b");
        assert_eq!(out.pairs[1].second, "c d");
    }

    #[test]
    fn empty_set_leaves_everything_unmatched() {
        let second = phrases(&["x", "y"]);
        let out = align(&[], &second, &AlignConfig::default()).expect("align");
        assert!(out.pairs.is_empty());
        let indices: Vec<usize> = out.unmatched.iter().map(|u| u.index).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn order_option_reaches_assignment() {
        // Row costs against column 0: "ab" -> 1, "abcd" -> 3 ("a" is column 0).
        let first = phrases(&["ab", "abcd"]);
        let second = phrases(&["a", "abcdefgh"]);
        let cheap = align(&first, &second, &AlignConfig::default()).expect("align");
        let costly = align(
            &first,
            &second,
            &AlignConfig::default().with_order(CandidateOrder::CostliestFirst),
        )
        .expect("align");
        assert_eq!(cheap.pairs[0].second, "a");
        assert_eq!(costly.pairs[1].second, "a");
    }
}
