//! Harvesting of tokens already in `${name}` notation.

use crate::detect::types::DetectedVariable;
use crate::patterns::CANONICAL_PATTERN;

/// Find every `${name}` / `${name:default}` token in `text`.
///
/// The name is trimmed; the default is kept exactly as written.
#[must_use]
pub fn find_canonical_variables(text: &str) -> Vec<DetectedVariable> {
    let def = &*CANONICAL_PATTERN;
    def.regex
        .captures_iter(text)
        .filter_map(|caps| {
            let full = caps.get(0)?;
            Some(DetectedVariable {
                original: full.as_str().to_string(),
                name: def.extract_name(&caps),
                default_value: caps.get(2).map(|m| m.as_str().to_string()),
                pattern: def.kind,
                start_index: full.start(),
                end_index: full.end(),
            })
        })
        .collect()
}
