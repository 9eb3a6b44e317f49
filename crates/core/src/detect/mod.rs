//! Placeholder detection.
//!
//! Detection runs in three steps over the same immutable text:
//!
//! 1. tokens already in `${name}` notation are harvested and their spans
//!    claimed, so they are never re-detected or converted twice;
//! 2. every legacy pattern scans the whole text, in priority order;
//! 3. candidates pass through the acceptance rules in that order, the first
//!    accepted candidate claiming its span against everything after it.
//!
//! The result is sorted by start offset and free of overlapping spans.

mod canonical;
mod filter;
mod scanner;
mod types;

use tracing::{debug, trace};

pub use canonical::find_canonical_variables;
pub use filter::{ClaimedSpans, MIN_NAME_LEN, QuoteMap, Rejection};
pub use types::DetectedVariable;

use crate::patterns::PatternKind;

/// Find every legacy placeholder in `text`.
///
/// Never fails; text without placeholders yields an empty list.
#[must_use]
pub fn detect_variables(text: &str) -> Vec<DetectedVariable> {
    if text.is_empty() {
        return Vec::new();
    }

    let canonical = find_canonical_variables(text);
    let mut claimed = ClaimedSpans::from_variables(&canonical);
    let quotes = QuoteMap::new(text);

    let mut accepted = Vec::new();
    for candidate in scanner::scan(text) {
        match filter::check(&candidate, &claimed, &quotes) {
            Ok(()) => {
                claimed.claim(candidate.span());
                accepted.push(candidate);
            }
            Err(reason) => {
                trace!(
                    original = %candidate.original,
                    pattern = %candidate.pattern,
                    start = candidate.start_index,
                    %reason,
                    "rejected placeholder candidate"
                );
            }
        }
    }

    accepted.sort_by_key(|v| v.start_index);
    accepted.dedup_by(|a, b| a.start_index == b.start_index && a.original == b.original);

    debug!(
        canonical = canonical.len(),
        detected = accepted.len(),
        bytes = text.len(),
        "placeholder detection finished"
    );
    accepted
}

/// Per-notation counts in priority order; notations with no matches are
/// left out.
#[must_use]
pub fn summarize(vars: &[DetectedVariable]) -> Vec<(PatternKind, usize)> {
    PatternKind::LEGACY
        .into_iter()
        .map(|kind| (kind, vars.iter().filter(|v| v.pattern == kind).count()))
        .filter(|&(_, count)| count > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn double_bracket_name() {
        let found = detect_variables("Hello [[name]]!");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "name");
        assert_eq!(found[0].pattern, PatternKind::DoubleBracket);
        assert_eq!(found[0].original, "[[name]]");
        assert_eq!((found[0].start_index, found[0].end_index), (6, 14));
    }

    #[test]
    fn double_bracket_default() {
        let found = detect_variables("Hello [[name: John]]!");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "name");
        assert_eq!(found[0].default_value.as_deref(), Some("John"));
    }

    #[test]
    fn canonical_tokens_are_not_detected() {
        assert!(detect_variables("Hello ${name}!").is_empty());
        assert!(detect_variables("${NAME} ${user_id:guest}").is_empty());
    }

    #[rstest]
    #[case("<div>content</div>")]
    #[case("<username>")]
    #[case("<DIV>")]
    #[case("{{if}} [[else]] %null%")]
    #[case("[[x]] {{y}} %z%")]
    #[case("[link](https://example.com) and [x]")]
    #[case("")]
    fn nothing_detected(#[case] text: &str) {
        assert_eq!(detect_variables(text), Vec::<DetectedVariable>::new(), "{text}");
    }

    #[rstest]
    #[case("[[user]]", PatternKind::DoubleBracket, "user")]
    #[case("{{ user }}", PatternKind::DoubleCurly, "user")]
    #[case("[USER_NAME]", PatternKind::SingleBracket, "USER_NAME")]
    #[case("[Your Name]", PatternKind::SingleBracket, "Your Name")]
    #[case("{COMPANY}", PatternKind::SingleCurly, "COMPANY")]
    #[case("{Company Name}", PatternKind::SingleCurly, "Company Name")]
    #[case("<TOPIC>", PatternKind::AngleBracket, "TOPIC")]
    #[case("<Main Topic>", PatternKind::AngleBracket, "Main Topic")]
    #[case("%user_name%", PatternKind::Percent, "user_name")]
    #[case("%USER%", PatternKind::Percent, "USER")]
    fn each_notation(#[case] text: &str, #[case] kind: PatternKind, #[case] name: &str) {
        let found = detect_variables(text);
        assert_eq!(found.len(), 1, "{text}");
        assert_eq!(found[0].pattern, kind);
        assert_eq!(found[0].name, name);
        assert_eq!(found[0].original, text);
    }

    #[test]
    fn double_delimiters_win_over_single() {
        let found = detect_variables("[[NAME]] and {{TOPIC}}");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].pattern, PatternKind::DoubleBracket);
        assert_eq!(found[1].pattern, PatternKind::DoubleCurly);
    }

    #[test]
    fn rejected_double_does_not_block_single() {
        // `{{A}}` is too short, so its inner `{A}` is considered on its own
        // and is too short as well; `{{AB}}` claims before `{AB}`.
        let found = detect_variables("{{A}} {{AB}}");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].original, "{{AB}}");
    }

    #[test]
    fn single_curly_inside_canonical_is_claimed() {
        assert!(detect_variables("${NAME}").is_empty());
    }

    #[test]
    fn quoted_uppercase_placeholders_in_json_are_kept() {
        let text = r#"{"greeting": "Hello {NAME}", "to": "[Your Name]"}"#;
        let found = detect_variables(text);
        let names: Vec<&str> = found.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["NAME", "Your Name"]);
    }

    #[test]
    fn lowercase_quoted_single_delimiters_never_match() {
        assert!(detect_variables(r#"{"k": "{user}", "v": "[item]"}"#).is_empty());
    }

    #[test]
    fn results_are_sorted_and_spans_round_trip() {
        let text = "%last% then <FIRST ONE> then [[middle: x]] and {{end}}";
        let found = detect_variables(text);
        assert_eq!(found.len(), 4);
        assert!(found.windows(2).all(|w| w[0].end_index <= w[1].start_index));
        for v in &found {
            assert_eq!(&text[v.span()], v.original);
        }
    }

    #[test]
    fn spans_are_byte_offsets() {
        let text = "héllo [[nom]]";
        let found = detect_variables(text);
        assert_eq!(found[0].start_index, 7);
        assert_eq!(&text[found[0].span()], "[[nom]]");
    }

    #[test]
    fn summary_counts_by_notation() {
        let found = detect_variables("[[a1]] [[b2]] %c3% {{d4}}");
        assert_eq!(
            summarize(&found),
            vec![
                (PatternKind::DoubleBracket, 2),
                (PatternKind::DoubleCurly, 1),
                (PatternKind::Percent, 1),
            ]
        );
    }
}
