//! Turns one free-form completion into exactly three review strings.
//!
//! Models do not reliably honour "one review per line", so the text goes
//! through an ordered list of extraction stages. Each stage is a pure
//! function reporting its candidates and whether they are enough; the first
//! sufficient stage wins, otherwise the candidates of the last stage are
//! padded up to [`ReviewSet::SIZE`].

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::domain::review::entities::ReviewSet;

/// Paragraphs this short (in characters, after trimming) are not reviews.
pub const MIN_PARAGRAPH_CHARS: usize = 20;

// ASCII digits only: `\d` would also match other Unicode numerals.
static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+[.)]").expect("list marker pattern is valid"));

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\r?\n){2,}").expect("paragraph break pattern is valid"));

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub candidates: Vec<String>,
    pub sufficient: bool,
}

impl Extraction {
    fn from_candidates(candidates: Vec<String>) -> Self {
        let sufficient = candidates.len() >= ReviewSet::SIZE;
        Self {
            candidates,
            sufficient,
        }
    }
}

pub type Stage = fn(&str) -> Extraction;

/// Extraction stages in the order they are tried.
pub const STAGES: [(&str, Stage); 3] = [
    ("lines", extract_lines),
    ("paragraphs", extract_paragraphs),
    ("positional", split_positional),
];

pub fn normalize(raw_text: &str) -> ReviewSet {
    let mut extraction = Extraction::default();

    for (stage_name, stage) in STAGES {
        extraction = stage(raw_text);
        if extraction.sufficient {
            debug!(stage = stage_name, "review candidates extracted");
            break;
        }
        debug!(
            stage = stage_name,
            found = extraction.candidates.len(),
            "not enough review candidates"
        );
    }

    pad(extraction.candidates, raw_text)
}

/// Non-empty trimmed lines, minus lines opening with a numeric list marker
/// such as `1.` or `2)`.
///
/// Numbered output is dropped entirely here, even though the model is often
/// asked for exactly that shape. Such output only survives through the
/// later stages.
pub fn extract_lines(raw_text: &str) -> Extraction {
    let candidates = raw_text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && !LIST_MARKER.is_match(line))
        .map(str::to_string)
        .collect();

    Extraction::from_candidates(candidates)
}

/// Trimmed blocks separated by blank lines, longer than [`MIN_PARAGRAPH_CHARS`].
pub fn extract_paragraphs(raw_text: &str) -> Extraction {
    let candidates = PARAGRAPH_BREAK
        .split(raw_text)
        .map(str::trim)
        .filter(|paragraph| paragraph.chars().count() > MIN_PARAGRAPH_CHARS)
        .map(str::to_string)
        .collect();

    Extraction::from_candidates(candidates)
}

/// Cuts the whole text into thirds at character offsets `L/3` and `2L/3`.
/// Pieces keep their surrounding whitespace; blank pieces are dropped.
pub fn split_positional(raw_text: &str) -> Extraction {
    let length = raw_text.chars().count();
    let first_cut = byte_offset(raw_text, length / 3);
    let second_cut = byte_offset(raw_text, length * 2 / 3);

    let candidates = [
        &raw_text[..first_cut],
        &raw_text[first_cut..second_cut],
        &raw_text[second_cut..],
    ]
    .into_iter()
    .filter(|piece| !piece.trim().is_empty())
    .map(str::to_string)
    .collect();

    Extraction::from_candidates(candidates)
}

fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

/// Repeats the last candidate (or the raw text when there is none) until
/// three reviews exist, and drops anything past the third.
fn pad(candidates: Vec<String>, raw_text: &str) -> ReviewSet {
    let mut candidates = candidates.into_iter();

    let first = candidates.next().unwrap_or_else(|| raw_text.to_string());
    let second = candidates.next().unwrap_or_else(|| first.clone());
    let third = candidates.next().unwrap_or_else(|| second.clone());

    ReviewSet::new([first, second, third])
}
