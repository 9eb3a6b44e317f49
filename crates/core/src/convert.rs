//! Rewriting detected placeholders into `${name}` notation.

use serde::Serialize;
use tracing::{debug, warn};

use crate::detect::{DetectedVariable, detect_variables};

/// Normalize a placeholder name to `[a-z0-9_]*`.
///
/// Lowercases, turns each whitespace run into one `_`, then drops every other
/// character outside `[a-z0-9_]` without leaving a gap (`user@@name` becomes
/// `username`). May return an empty string.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' {
            out.push(c);
        }
    }
    out
}

/// Whether a normalized name is read back as `${name}` by the detector:
/// non-empty and not starting with a digit.
#[must_use]
pub fn is_canonical_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_lowercase() || c == '_')
}

/// Canonical token for one detected placeholder: `${name}` or
/// `${name:default}`, with the default copied verbatim.
///
/// Total: an empty normalized name still yields `${}`. Callers decide
/// whether to apply such a token; [`convert_all_variables`] does not.
#[must_use]
pub fn convert_to_supported_format(variable: &DetectedVariable) -> String {
    let name = normalize_name(&variable.name);
    match &variable.default_value {
        Some(default) => format!("${{{name}:{default}}}"),
        None => format!("${{{name}}}"),
    }
}

/// One planned rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replacement {
    pub variable: DetectedVariable,
    pub replacement: String,
}

/// Rewrites for one text, plus the placeholders left alone because their
/// name does not normalize to a canonical identifier.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversionPlan {
    pub replacements: Vec<Replacement>,
    pub skipped: Vec<DetectedVariable>,
}

impl ConversionPlan {
    /// True when applying the plan would not change the text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    /// Splice the replacements into `text`, last offset first so earlier
    /// offsets stay valid.
    ///
    /// A replacement whose span no longer holds its original text is skipped
    /// with a warning; the plan was made for a different text.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        let mut ordered: Vec<&Replacement> = self.replacements.iter().collect();
        ordered.sort_by(|a, b| b.variable.start_index.cmp(&a.variable.start_index));

        let mut out = text.to_string();
        for r in ordered {
            let span = r.variable.span();
            if out.get(span.clone()) != Some(r.variable.original.as_str()) {
                warn!(
                    original = %r.variable.original,
                    start = span.start,
                    "placeholder span does not match text; skipping"
                );
                continue;
            }
            out.replace_range(span, &r.replacement);
        }
        out
    }
}

/// Detect placeholders in `text` and pair each with its canonical token.
#[must_use]
pub fn plan_conversion(text: &str) -> ConversionPlan {
    let mut plan = ConversionPlan::default();
    for variable in detect_variables(text) {
        let replacement = convert_to_supported_format(&variable);
        if is_canonical_name(&normalize_name(&variable.name)) {
            plan.replacements.push(Replacement { variable, replacement });
        } else {
            debug!(original = %variable.original, "name does not normalize; left as is");
            plan.skipped.push(variable);
        }
    }
    plan
}

/// Rewrite every legacy placeholder in `text` into `${name}` notation.
///
/// Text outside detected spans, including existing `${...}` tokens, is left
/// byte-for-byte identical. Idempotent.
#[must_use]
pub fn convert_all_variables(text: &str) -> String {
    plan_conversion(text).apply(text)
}
