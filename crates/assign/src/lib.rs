//! # Greedy assignment (`assign`)
//!
//! Pairs every row of a cost matrix with a distinct column. The stage is
//! metric-agnostic: it sees only integer costs, so the same routine pairs
//! words inside two phrases and phrases across two phrase sets.
//!
//! ## Contract
//!
//! - Input: a fully materialized [`CostMatrix`] with `rows <= columns`.
//!   Wider-than-tall is the caller's job; [`CostMatrix::transpose`] helps.
//! - Output: an [`Assignment`] that covers every row exactly once and never
//!   reuses a column.
//! - Deterministic: row minima break ties on the lowest column, the
//!   candidate pool breaks ties on the lowest row.
//!
//! The heuristic does not promise a globally optimal matching.
//!
//! ## Example
//!
//! ```
//! use assign::{assign_greedy, CostMatrix};
//!
//! let costs = CostMatrix::from_rows(vec![vec![3, 4, 9], vec![1, 6, 2]]).unwrap();
//! let assignment = assign_greedy(&costs).unwrap();
//!
//! assert_eq!(assignment.column_for(1), Some(0));
//! assert_eq!(assignment.column_for(0), Some(1));
//! assert_eq!(assignment.unassigned_columns(), vec![2]);
//! ```

mod error;
mod greedy;
mod matrix;

pub use crate::error::AssignError;
pub use crate::greedy::{assign_greedy, assign_greedy_with, Assignment, Candidate, CandidateOrder};
pub use crate::matrix::CostMatrix;
