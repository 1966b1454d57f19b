use std::fmt;

use assign::{assign_greedy, CostMatrix};
use serde::{Deserialize, Serialize};

use crate::word::word_distance;

/// A line of raw text and the words it splits into.
///
/// Words are the maximal runs of non-whitespace characters. The split is
/// rigid: no case folding, punctuation handling or normalization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Phrase {
    text: String,
    words: Vec<String>,
}

impl Phrase {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let words = text.split_whitespace().map(str::to_owned).collect();
        Self { text, words }
    }

    /// The raw text exactly as it was read.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Phrase {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

impl From<&str> for Phrase {
    fn from(value: &str) -> Self {
        Phrase::new(value)
    }
}

impl From<String> for Phrase {
    fn from(value: String) -> Self {
        Phrase::new(value)
    }
}

/// Distance between two phrases built on word edit distance.
///
/// Each word of the phrase with fewer words is greedily paired with a
/// distinct word of the other phrase; the pair distances are summed and
/// every word of the longer phrase left without a partner adds its length
/// in characters. On equal word counts `a` plays the shorter side.
pub fn phrase_distance(a: &Phrase, b: &Phrase) -> usize {
    let (short, long) = if a.word_count() > b.word_count() {
        (b.words(), a.words())
    } else {
        (a.words(), b.words())
    };

    let costs = CostMatrix::from_fn(short.len(), long.len(), |i, j| {
        word_distance(&short[i], &long[j])
    });
    // `short` never has more words than `long`, so the assignment cannot fail.
    let assignment = match assign_greedy(&costs) {
        Ok(assignment) => assignment,
        Err(err) => unreachable!("word pairing failed: {err}"),
    };

    let paired = assignment.total_cost();
    let unmatched: usize = assignment
        .unassigned_columns()
        .into_iter()
        .map(|j| long[j].chars().count())
        .sum();

    paired + unmatched
}
