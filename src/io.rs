//! Input parsing and output rendering for the one-shot file format.
//!
//! ## Input
//!
//! Two blocks, back to back. Each block starts with a header line whose
//! first whitespace-delimited token is the phrase count `n`; anything after
//! that token is ignored. The next `n` lines are the phrases, taken verbatim.
//!
//! ```text
//! 2
//! hello world
//! good night
//! 3
//! goodnight moon
//! hello there
//! goodbye world
//! ```
//!
//! ## Output
//!
//! In [`OutputFormat::Text`], one `first:second` line per pair in the row
//! order of the smaller set, then one `phrase:?` line per unmatched phrase
//! of the larger set in its index order.

use std::fs;
use std::path::Path;
use std::str::Lines;

use distance::Phrase;

use crate::align::Alignment;
use crate::config::OutputFormat;
use crate::error::{AlignError, Block};

/// Parse both phrase blocks from `input`.
pub fn read_phrase_sets(input: &str) -> Result<(Vec<Phrase>, Vec<Phrase>), AlignError> {
    let mut lines = input.lines();
    let first = read_block(&mut lines, Block::First)?;
    let second = read_block(&mut lines, Block::Second)?;
    Ok((first, second))
}

/// Read and parse both phrase blocks from a file.
pub fn read_phrase_sets_from_path(
    path: impl AsRef<Path>,
) -> Result<(Vec<Phrase>, Vec<Phrase>), AlignError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| AlignError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    read_phrase_sets(&content)
}

fn read_block(lines: &mut Lines<'_>, block: Block) -> Result<Vec<Phrase>, AlignError> {
    let header = lines.next().ok_or(AlignError::MissingHeader { block })?;
    let expected = parse_count(header).ok_or_else(|| AlignError::MalformedHeader {
        block,
        line: header.to_string(),
    })?;

    // `expected` is untrusted; size the buffer from the lines actually read.
    let phrases: Vec<Phrase> = lines.by_ref().take(expected).map(Phrase::new).collect();
    if phrases.len() < expected {
        return Err(AlignError::MissingPhrases {
            block,
            expected,
            found: phrases.len(),
        });
    }
    Ok(phrases)
}

fn parse_count(header: &str) -> Option<usize> {
    header.split_whitespace().next()?.parse().ok()
}

/// Render in the line format: `first:second` per pair, `phrase:?` per leftover.
pub fn render_text(alignment: &Alignment) -> String {
    let mut out = String::new();
    for pair in &alignment.pairs {
        out.push_str(&pair.first);
        out.push(':');
        out.push_str(&pair.second);
        out.push('\n');
    }
    for leftover in &alignment.unmatched {
        out.push_str(&leftover.phrase);
        out.push_str(":?\n");
    }
    out
}

/// Render as pretty-printed JSON, costs included.
pub fn render_json(alignment: &Alignment) -> Result<String, AlignError> {
    let mut json = serde_json::to_string_pretty(alignment)?;
    json.push('\n');
    Ok(json)
}

/// Render in the requested format.
pub fn render(alignment: &Alignment, format: OutputFormat) -> Result<String, AlignError> {
    match format {
        OutputFormat::Text => Ok(render_text(alignment)),
        OutputFormat::Json => render_json(alignment),
    }
}

/// Render and write the alignment to `path`, replacing any existing file.
pub fn write_alignment(
    path: impl AsRef<Path>,
    alignment: &Alignment,
    format: OutputFormat,
) -> Result<(), AlignError> {
    let path = path.as_ref();
    let body = render(alignment, format)?;
    fs::write(path, body).map_err(|source| AlignError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::{AlignedPair, Side, UnmatchedPhrase};

    fn texts(phrases: &[Phrase]) -> Vec<&str> {
        phrases.iter().map(Phrase::text).collect()
    }

    #[test]
    fn reads_two_blocks() {
        let input = "2\nhello world\ngood night\n1 trailing words\nmoon\n";
        let (first, second) = read_phrase_sets(input).expect("parse");
        assert_eq!(texts(&first), vec!["hello world", "good night"]);
        assert_eq!(texts(&second), vec!["moon"]);
    }

    #[test]
    fn handles_crlf_and_zero_counts() {
        let input = "0\r\n1\r\nonly phrase\r\n";
        let (first, second) = read_phrase_sets(input).expect("parse");
        assert!(first.is_empty());
        assert_eq!(texts(&second), vec!["only phrase"]);
    }

    #[test]
    fn non_integer_header_rejected() {
        let err = read_phrase_sets("two\na\nb\n1\nc\n").expect_err("malformed");
        assert!(matches!(
            err,
            AlignError::MalformedHeader { block: Block::First, ref line } if line == "two"
        ));
    }

    #[test]
    fn negative_count_rejected() {
        let err = read_phrase_sets("1\na\n-1\n").expect_err("malformed");
        assert!(matches!(
            err,
            AlignError::MalformedHeader {
                block: Block::Second,
                ..
            }
        ));
    }

    #[test]
    fn short_block_rejected() {
        let err = read_phrase_sets("1\na\n3\nb\nc\n").expect_err("short");
        assert!(matches!(
            err,
            AlignError::MissingPhrases {
                block: Block::Second,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn huge_count_reports_missing_phrases() {
        let err = read_phrase_sets("18446744073709551615\na\n1\nb\n").expect_err("short");
        assert!(matches!(
            err,
            AlignError::MissingPhrases {
                block: Block::First,
                expected: usize::MAX,
                found: 3
            }
        ));
    }

    #[test]
    fn missing_second_header_rejected() {
        let err = read_phrase_sets("1\na\n").expect_err("missing");
        assert!(matches!(
            err,
            AlignError::MissingHeader {
                block: Block::Second
            }
        ));
    }

    #[test]
    fn text_rendering_pairs_then_leftovers() {
        let alignment = Alignment {
            smaller: Side::First,
            pairs: vec![AlignedPair {
                first: "hello world".into(),
                second: "goodbye world".into(),
                cost: 6,
            }],
            unmatched: vec![UnmatchedPhrase {
                side: Side::Second,
                index: 0,
                phrase: "hello there".into(),
            }],
        };
        assert_eq!(
            render_text(&alignment),
            "hello world:goodbye world\nhello there:?\n"
        );
    }

    #[test]
    fn json_rendering_carries_costs() {
        let alignment = Alignment {
            smaller: Side::Second,
            pairs: vec![AlignedPair {
                first: "a".into(),
                second: "b".into(),
                cost: 1,
            }],
            unmatched: Vec::new(),
        };
        let json = render(&alignment, OutputFormat::Json).expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["smaller"], "second");
        assert_eq!(value["pairs"][0]["cost"], 1);
        assert_eq!(value["unmatched"].as_array().map(Vec::len), Some(0));
    }
}
