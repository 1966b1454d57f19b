//! # Phrase distance (`distance`)
//!
//! Distance metrics for aligning two sets of short phrases.
//!
//! ## Layers
//!
//! 1.  **Word distance**: classic single-character edit distance between
//!     two words ([`word_distance`]).
//! 2.  **Phrase distance**: words of the phrase with fewer words are paired
//!     with distinct words of the other phrase by greedy assignment; pair
//!     distances are summed and leftover words of the longer phrase add
//!     their character length ([`phrase_distance`]).
//! 3.  **Distance matrix**: phrase distance for every `(smaller, larger)`
//!     pair of two phrase sets ([`DistanceMatrix::build`]), optionally row
//!     parallel via rayon.
//!
//! All three are pure functions of their inputs. No I/O, no global state.
//!
//! ## Example
//!
//! ```
//! use distance::{phrase_distance, word_distance, Phrase};
//!
//! assert_eq!(word_distance("kitten", "sitting"), 3);
//!
//! let a = Phrase::new("hello");
//! let b = Phrase::new("hello there");
//! // "there" has no partner and costs its 5 characters.
//! assert_eq!(phrase_distance(&a, &b), 5);
//! ```

mod error;
mod matrix;
mod phrase;
mod word;

pub use crate::error::DistanceError;
pub use crate::matrix::{DistanceMatrix, MatrixConfig};
pub use crate::phrase::{phrase_distance, Phrase};
pub use crate::word::word_distance;
