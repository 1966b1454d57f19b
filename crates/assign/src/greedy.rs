//! Greedy collision-resolving assignment.
//!
//! Every row starts with a candidate pointing at its cheapest column. The
//! candidate pool is drained in priority order: a candidate whose column is
//! still free is committed, one whose column was claimed in the meantime is
//! replaced by a fresh candidate for the cheapest *unclaimed* column of the
//! same row and goes back into the pool.
//!
//! The result is injective but not necessarily a global minimum.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::AssignError;
use crate::matrix::CostMatrix;

/// A row's current best available pairing option.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Candidate {
    pub row: usize,
    pub column: usize,
    pub cost: usize,
}

/// Which candidate leaves the pool first.
///
/// Ties on cost always go to the lowest row index, so both orders are fully
/// deterministic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CandidateOrder {
    /// Commit the globally cheapest candidate first.
    #[default]
    CheapestFirst,
    /// Commit the most expensive candidate first. Reproduces the ordering of
    /// older alignment files.
    CostliestFirst,
}

/// Heap entry: a candidate ranked under a given order.
struct Queued {
    candidate: Candidate,
    order: CandidateOrder,
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the greatest element.
        let by_cost = match self.order {
            CandidateOrder::CheapestFirst => other.candidate.cost.cmp(&self.candidate.cost),
            CandidateOrder::CostliestFirst => self.candidate.cost.cmp(&other.candidate.cost),
        };
        by_cost.then_with(|| other.candidate.row.cmp(&self.candidate.row))
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Queued {}

/// Injective mapping from every row of a matrix to a distinct column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Assignment {
    columns: usize,
    pairs: Vec<usize>,
    costs: Vec<usize>,
}

impl Assignment {
    /// Column paired with `row`, if the row exists.
    pub fn column_for(&self, row: usize) -> Option<usize> {
        self.pairs.get(row).copied()
    }

    /// Committed cost of `row`'s pair.
    pub fn cost_for(&self, row: usize) -> Option<usize> {
        self.costs.get(row).copied()
    }

    /// `(row, column)` pairs in row order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pairs.iter().copied().enumerate()
    }

    /// Row-indexed column vector.
    pub fn as_slice(&self) -> &[usize] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Columns that no row was paired with, in ascending order.
    pub fn unassigned_columns(&self) -> Vec<usize> {
        let claimed = self.claimed_mask();
        (0..self.columns).filter(|&c| !claimed[c]).collect()
    }

    /// Sum of committed pair costs.
    pub fn total_cost(&self) -> usize {
        self.costs.iter().sum()
    }

    /// True when no two rows share a column.
    pub fn is_injective(&self) -> bool {
        let mut seen = vec![false; self.columns];
        for &c in &self.pairs {
            if c >= self.columns || seen[c] {
                return false;
            }
            seen[c] = true;
        }
        true
    }

    fn claimed_mask(&self) -> Vec<bool> {
        let mut claimed = vec![false; self.columns];
        for &c in &self.pairs {
            if let Some(slot) = claimed.get_mut(c) {
                *slot = true;
            }
        }
        claimed
    }
}

/// Assign every row to a distinct column, cheapest candidates first.
pub fn assign_greedy(matrix: &CostMatrix) -> Result<Assignment, AssignError> {
    assign_greedy_with(matrix, CandidateOrder::default())
}

/// Assign every row to a distinct column using the given extraction order.
///
/// Requires `rows <= columns`; transpose the matrix otherwise.
pub fn assign_greedy_with(
    matrix: &CostMatrix,
    order: CandidateOrder,
) -> Result<Assignment, AssignError> {
    let rows = matrix.rows();
    let columns = matrix.columns();
    if rows > columns {
        return Err(AssignError::TooManyRows { rows, columns });
    }
    if rows == 0 {
        return Ok(Assignment {
            columns,
            pairs: Vec::new(),
            costs: Vec::new(),
        });
    }

    let mut claimed = vec![false; columns];
    let mut pool: BinaryHeap<Queued> = BinaryHeap::with_capacity(rows);
    for row in 0..rows {
        let candidate = cheapest_unclaimed(matrix, row, &claimed);
        pool.push(Queued { candidate, order });
    }

    let mut pairs = vec![0; rows];
    let mut costs = vec![0; rows];
    let mut committed = 0usize;

    while let Some(Queued { candidate, .. }) = pool.pop() {
        if claimed[candidate.column] {
            let retry = cheapest_unclaimed(matrix, candidate.row, &claimed);
            trace!(
                row = candidate.row,
                lost_column = candidate.column,
                next_column = retry.column,
                next_cost = retry.cost,
                "assign_collision"
            );
            pool.push(Queued {
                candidate: retry,
                order,
            });
        } else {
            claimed[candidate.column] = true;
            pairs[candidate.row] = candidate.column;
            costs[candidate.row] = candidate.cost;
            committed += 1;
        }
    }
    debug_assert_eq!(committed, rows);

    Ok(Assignment {
        columns,
        pairs,
        costs,
    })
}

/// Cheapest unclaimed column of `row`; ties go to the lowest column index.
///
/// The caller guarantees at least one unclaimed column: the row is not yet
/// committed, so fewer than `rows <= columns` columns are claimed.
fn cheapest_unclaimed(matrix: &CostMatrix, row: usize, claimed: &[bool]) -> Candidate {
    let mut best: Option<(usize, usize)> = None;
    for (column, &cost) in matrix.row(row).iter().enumerate() {
        if claimed[column] {
            continue;
        }
        match best {
            Some((_, best_cost)) if cost >= best_cost => {}
            _ => best = Some((column, cost)),
        }
    }
    let (column, cost) = best.unwrap_or((0, matrix.get(row, 0)));
    Candidate { row, column, cost }
}
