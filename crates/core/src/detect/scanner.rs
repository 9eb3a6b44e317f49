//! Raw matching of the legacy notations.

use crate::detect::types::DetectedVariable;
use crate::patterns::{LEGACY_PATTERNS, PatternDef};

/// Every match of every legacy pattern, grouped by pattern in priority order.
///
/// Each pattern scans the whole text on its own; overlaps between patterns
/// are left for the acceptance filter to resolve.
pub fn scan(text: &str) -> Vec<DetectedVariable> {
    LEGACY_PATTERNS.iter().flat_map(|def| scan_pattern(def, text)).collect()
}

fn scan_pattern(def: &PatternDef, text: &str) -> Vec<DetectedVariable> {
    def.regex
        .captures_iter(text)
        .filter_map(|caps| {
            let full = caps.get(0)?;
            Some(DetectedVariable {
                original: full.as_str().to_string(),
                name: def.extract_name(&caps),
                default_value: def.extract_default(&caps),
                pattern: def.kind,
                start_index: full.start(),
                end_index: full.end(),
            })
        })
        .collect()
}
