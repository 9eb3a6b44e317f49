//! Placeholder notation table.
//!
//! Every notation the detector understands is one [`PatternDef`] entry. The
//! legacy table is ordered by priority: double-delimiter notations come first so
//! they claim their span before a single-delimiter notation can reinterpret
//! the same characters (`[[name]]` must never be read as `[` + `[name]` + `]`).

mod false_positives;

use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

pub use false_positives::{FALSE_POSITIVES, is_false_positive};

/// Identifier of a placeholder notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// `[[name]]` or `[[name: default]]`
    DoubleBracket,
    /// `{{name}}` or `{{name: default}}`
    DoubleCurly,
    /// `[NAME]` or `[Your Name]`
    SingleBracket,
    /// `{NAME}` or `{Your Name}`
    SingleCurly,
    /// `<NAME>` or `<Your Name>`
    AngleBracket,
    /// `%name%`
    Percent,
    /// `${name}` or `${name:default}`, the supported notation
    Canonical,
}

impl PatternKind {
    /// Legacy notations in scan priority order.
    pub const LEGACY: [PatternKind; 6] = [
        PatternKind::DoubleBracket,
        PatternKind::DoubleCurly,
        PatternKind::SingleBracket,
        PatternKind::SingleCurly,
        PatternKind::AngleBracket,
        PatternKind::Percent,
    ];

    /// Display form of the notation, e.g. `[[...]]`.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            PatternKind::DoubleBracket => "[[...]]",
            PatternKind::DoubleCurly => "{{...}}",
            PatternKind::SingleBracket => "[...]",
            PatternKind::SingleCurly => "{...}",
            PatternKind::AngleBracket => "<...>",
            PatternKind::Percent => "%...%",
            PatternKind::Canonical => "${...}",
        }
    }

    /// Snake-case tag, matching the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PatternKind::DoubleBracket => "double_bracket",
            PatternKind::DoubleCurly => "double_curly",
            PatternKind::SingleBracket => "single_bracket",
            PatternKind::SingleCurly => "single_curly",
            PatternKind::AngleBracket => "angle_bracket",
            PatternKind::Percent => "percent",
            PatternKind::Canonical => "canonical",
        }
    }

    /// True for the single-delimiter notations that collide with JSON
    /// objects and Markdown link text.
    #[must_use]
    pub fn is_single_delimiter(self) -> bool {
        matches!(self, PatternKind::SingleBracket | PatternKind::SingleCurly)
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display string for a notation.
#[must_use]
pub fn get_pattern_description(kind: PatternKind) -> &'static str {
    kind.description()
}

/// One notation: how to match it and how to pull a name and default out of a
/// match.
#[derive(Debug)]
pub struct PatternDef {
    pub kind: PatternKind,
    pub regex: Regex,
    /// Whether capture group 2 holds a `: default` clause.
    pub has_default: bool,
}

impl PatternDef {
    fn new(kind: PatternKind, pattern: &str, has_default: bool) -> Self {
        let regex = Regex::new(pattern).expect("valid placeholder regex");
        Self { kind, regex, has_default }
    }

    /// Candidate name: capture group 1, trimmed.
    #[must_use]
    pub fn extract_name(&self, caps: &Captures<'_>) -> String {
        caps.get(1).map(|m| m.as_str().trim().to_string()).unwrap_or_default()
    }

    /// Default value: capture group 2, trimmed. An empty clause (`[[name:]]`)
    /// counts as no default.
    #[must_use]
    pub fn extract_default(&self, caps: &Captures<'_>) -> Option<String> {
        if !self.has_default {
            return None;
        }
        caps.get(2).map(|m| m.as_str().trim()).filter(|d| !d.is_empty()).map(str::to_string)
    }
}

// Shape shared by the single-delimiter notations: an all-uppercase token
// (`USER_ID2`) or a capitalized phrase of two or more words (`Your Name`).
const SINGLE_SHAPE: &str = r"[A-Z][A-Z0-9_]*|[A-Z][a-zA-Z0-9]*(?: [a-zA-Z0-9]+)+";

/// Legacy notations in priority order.
pub static LEGACY_PATTERNS: LazyLock<Vec<PatternDef>> = LazyLock::new(|| {
    vec![
        // Defaults never contain `}` so the canonical token they become is
        // still recognized as a whole on the next pass.
        PatternDef::new(
            PatternKind::DoubleBracket,
            r"\[\[([^\[\]:\n]+)(?::([^\[\]}\n]*))?\]\]",
            true,
        ),
        PatternDef::new(
            PatternKind::DoubleCurly,
            r"\{\{([^{}:\n]+)(?::([^{}\n]*))?\}\}",
            true,
        ),
        PatternDef::new(PatternKind::SingleBracket, &format!(r"\[({SINGLE_SHAPE})\]"), false),
        PatternDef::new(PatternKind::SingleCurly, &format!(r"\{{({SINGLE_SHAPE})\}}"), false),
        PatternDef::new(PatternKind::AngleBracket, &format!(r"<({SINGLE_SHAPE})>"), false),
        PatternDef::new(PatternKind::Percent, r"%([a-zA-Z_][a-zA-Z0-9_]*)%", false),
    ]
});

/// The supported notation. Identifier starts with a letter or underscore and
/// may contain spaces (trimmed on extraction); the default runs to the first
/// `}`.
pub static CANONICAL_PATTERN: LazyLock<PatternDef> = LazyLock::new(|| {
    PatternDef::new(
        PatternKind::Canonical,
        r"\$\{([a-zA-Z_][a-zA-Z0-9_ ]*)(?::([^}]*))?\}",
        true,
    )
});
