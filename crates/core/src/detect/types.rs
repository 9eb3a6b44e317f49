//! Detection result types.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::patterns::PatternKind;
use crate::position::{LineIndex, Position};

/// A placeholder found in a text.
///
/// `start_index`/`end_index` are byte offsets into the scanned text, so
/// `&text[v.start_index..v.end_index] == v.original` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedVariable {
    /// Matched text, verbatim (e.g. `"[[Your Name]]"`).
    pub original: String,
    /// Extracted name before normalization (e.g. `"Your Name"`).
    pub name: String,
    /// Default value from a `name: default` clause.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Notation that produced the match.
    pub pattern: PatternKind,
    /// Byte offset of the first matched character.
    pub start_index: usize,
    /// Byte offset one past the last matched character.
    pub end_index: usize,
}

impl DetectedVariable {
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.start_index..self.end_index
    }

    /// Half-open range overlap.
    #[must_use]
    pub fn overlaps(&self, span: &Range<usize>) -> bool {
        self.start_index < span.end && span.start < self.end_index
    }

    /// 1-based line and column of the match start.
    #[must_use]
    pub fn position(&self, index: &LineIndex<'_>) -> Position {
        index.position(self.start_index)
    }
}
