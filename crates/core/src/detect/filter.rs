//! Acceptance rules for raw candidates.

use std::fmt;
use std::ops::Range;

use crate::detect::types::DetectedVariable;
use crate::patterns::{PatternKind, is_false_positive};

/// Minimum candidate name length, in characters.
pub const MIN_NAME_LEN: usize = 2;

/// Why a candidate was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Overlaps a canonical token or an already accepted candidate.
    Overlap,
    /// Name is an HTML tag, keyword or generic JSON field.
    FalsePositive,
    /// Name shorter than [`MIN_NAME_LEN`].
    TooShort,
    /// Angle-bracket content that reads like a markup tag.
    MarkupLike,
    /// Single-delimiter content inside a quoted string that reads like JSON.
    QuotedJson,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Rejection::Overlap => "overlaps a claimed span",
            Rejection::FalsePositive => "false positive",
            Rejection::TooShort => "name too short",
            Rejection::MarkupLike => "looks like a markup tag",
            Rejection::QuotedJson => "inside a quoted string",
        };
        f.write_str(reason)
    }
}

/// Spans that later candidates may not overlap.
#[derive(Debug, Default)]
pub struct ClaimedSpans {
    spans: Vec<Range<usize>>,
}

impl ClaimedSpans {
    #[must_use]
    pub fn from_variables(vars: &[DetectedVariable]) -> Self {
        Self { spans: vars.iter().map(DetectedVariable::span).collect() }
    }

    pub fn claim(&mut self, span: Range<usize>) {
        self.spans.push(span);
    }

    #[must_use]
    pub fn overlaps(&self, candidate: &DetectedVariable) -> bool {
        self.spans.iter().any(|span| candidate.overlaps(span))
    }
}

/// Double-quote parity of a text.
///
/// A position is "inside a string" when an odd number of unescaped `"`
/// precede it, counting from the start of the text. A quote is escaped when
/// the byte before it is a backslash; `\\"` therefore counts as escaped.
/// Unbalanced quotes anywhere earlier flip every later answer.
#[derive(Debug)]
pub struct QuoteMap {
    quotes: Vec<usize>,
}

impl QuoteMap {
    #[must_use]
    pub fn new(text: &str) -> Self {
        let bytes = text.as_bytes();
        let quotes = bytes
            .iter()
            .enumerate()
            .filter(|&(i, &b)| b == b'"' && (i == 0 || bytes[i - 1] != b'\\'))
            .map(|(i, _)| i)
            .collect();
        Self { quotes }
    }

    #[must_use]
    pub fn inside_string(&self, offset: usize) -> bool {
        self.quotes.partition_point(|&q| q < offset) % 2 == 1
    }
}

/// Starts with an uppercase letter or contains a space.
fn reads_as_placeholder(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase) || name.contains(' ')
}

/// Apply the acceptance rules to one candidate, in order.
pub fn check(
    candidate: &DetectedVariable,
    claimed: &ClaimedSpans,
    quotes: &QuoteMap,
) -> Result<(), Rejection> {
    if claimed.overlaps(candidate) {
        return Err(Rejection::Overlap);
    }
    if is_false_positive(&candidate.name) {
        return Err(Rejection::FalsePositive);
    }
    if candidate.name.chars().count() < MIN_NAME_LEN {
        return Err(Rejection::TooShort);
    }
    if candidate.pattern == PatternKind::AngleBracket && !reads_as_placeholder(&candidate.name) {
        return Err(Rejection::MarkupLike);
    }
    // Guards the shape table: the current single-delimiter shapes already
    // start uppercase, so this never fires through `detect_variables`.
    if candidate.pattern.is_single_delimiter()
        && quotes.inside_string(candidate.start_index)
        && !reads_as_placeholder(&candidate.name)
    {
        return Err(Rejection::QuotedJson);
    }
    Ok(())
}
