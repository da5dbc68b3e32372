//! JSON Array Extraction
//!
//! Recovers a JSON array of strings from raw LLM output.
//!
//! Handles the common ways models break the "JSON only" instruction:
//! - Markdown code fence wrapping (```[ ... ]```)
//! - Leading prose ("Sure! Here you go: [...]")
//! - Trailing prose ("[...] Enjoy!")
//!
//! Extraction only checks the outer shape (`[` ... `]`). Interior validity is
//! left to the decoder, and a decode failure degrades to an empty list.

use tracing::{debug, warn};

use crate::constants::llm::LOG_PREVIEW_CHARS;

/// Canonical empty array literal
pub const EMPTY_JSON_ARRAY: &str = "[]";

const CODE_FENCE: &str = "```";

// =============================================================================
// Convenience Functions
// =============================================================================

/// Parse raw model output into instruction steps.
///
/// Never fails: absent, bracket-free or undecodable input yields an empty
/// list. A decoded list is returned as-is (order, duplicates and element
/// whitespace preserved).
pub fn parse_steps(raw: Option<&str>) -> Vec<String> {
    let cleaned = sanitize(raw);

    match serde_json::from_str::<Option<Vec<String>>>(&cleaned) {
        Ok(Some(steps)) => steps,
        Ok(None) => Vec::new(),
        Err(e) => {
            warn!(
                "Failed to parse instructions as JSON array, returning empty list: {} (candidate: {})",
                e,
                preview(&cleaned)
            );
            Vec::new()
        }
    }
}

/// Reduce raw model output to a candidate JSON array string.
///
/// The result either starts with `[` and ends with `]`, or is exactly `[]`.
/// Applying `sanitize` to its own output returns the same string.
pub fn sanitize(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return EMPTY_JSON_ARRAY.to_string();
    };

    let trimmed = raw.trim();
    let without_fences = strip_wrapping_code_fences(trimmed);
    let candidate = extract_bracketed_array(without_fences);

    if !looks_like_json_array(candidate) {
        debug!("No JSON array found in response: {}", preview(trimmed));
        return EMPTY_JSON_ARRAY.to_string();
    }

    candidate.to_string()
}

// =============================================================================
// Extraction Steps
// =============================================================================

/// Strip one triple-backtick fence from each end when both are present.
///
/// Only the outermost fence pair is removed; nested fences are left alone.
pub fn strip_wrapping_code_fences(text: &str) -> &str {
    if text.len() >= CODE_FENCE.len() * 2
        && text.starts_with(CODE_FENCE)
        && text.ends_with(CODE_FENCE)
    {
        return text[CODE_FENCE.len()..text.len() - CODE_FENCE.len()].trim();
    }
    text
}

/// Slice from the first `[` through the last `]`, or the whole (trimmed)
/// text when no such ordered pair exists.
pub fn extract_bracketed_array(text: &str) -> &str {
    match (text.find('['), text.rfind(']')) {
        (Some(start), Some(end)) if end > start => text[start..=end].trim(),
        _ => text.trim(),
    }
}

/// Shape check only: starts with `[` and ends with `]`
pub fn looks_like_json_array(text: &str) -> bool {
    text.starts_with('[') && text.ends_with(']')
}

fn preview(text: &str) -> String {
    text.chars().take(LOG_PREVIEW_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_absent_input() {
        assert_eq!(sanitize(None), "[]");
        assert!(parse_steps(None).is_empty());
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert_eq!(sanitize(Some("")), "[]");
        assert_eq!(sanitize(Some("   \n\t ")), "[]");
        assert!(parse_steps(Some("")).is_empty());
    }

    #[test]
    fn test_clean_array_passes_through() {
        let raw = r#"["Whisk the eggs", "Fry"]"#;
        assert_eq!(sanitize(Some(raw)), raw);
        assert_eq!(parse_steps(Some(raw)), vec!["Whisk the eggs", "Fry"]);
    }

    #[test]
    fn test_fenced_array_unwrapped() {
        let raw = "```[\"Mix\", \"Bake\"]```";
        assert_eq!(sanitize(Some(raw)), r#"["Mix", "Bake"]"#);
    }

    #[test]
    fn test_fenced_array_with_language_tag() {
        let raw = "```json\n[\"Mix\", \"Bake\"]\n```";
        assert_eq!(sanitize(Some(raw)), r#"["Mix", "Bake"]"#);
        assert_eq!(parse_steps(Some(raw)), vec!["Mix", "Bake"]);
    }

    #[test]
    fn test_only_outer_fence_stripped() {
        assert_eq!(strip_wrapping_code_fences("``````x``````"), "```x```");
        assert_eq!(strip_wrapping_code_fences("``````"), "");
        assert_eq!(strip_wrapping_code_fences("`````"), "`````");
    }

    #[test]
    fn test_prose_around_array() {
        let raw = r#"Sure! Here you go: ["Step 1", "Step 2"] Enjoy!"#;
        assert_eq!(sanitize(Some(raw)), r#"["Step 1", "Step 2"]"#);
        assert_eq!(parse_steps(Some(raw)), vec!["Step 1", "Step 2"]);
    }

    #[test]
    fn test_no_brackets() {
        let raw = "I cannot help with that.";
        assert_eq!(sanitize(Some(raw)), "[]");
        assert!(parse_steps(Some(raw)).is_empty());
    }

    #[test]
    fn test_reversed_brackets() {
        assert_eq!(sanitize(Some("] nothing here [")), "[]");
    }

    #[test]
    fn test_malformed_array_degrades_to_empty() {
        assert_eq!(sanitize(Some("[1, 2, incomplete")), "[]");
        assert!(parse_steps(Some("[1, 2, incomplete")).is_empty());
        assert!(parse_steps(Some(r#"["ok", "unterminated]"#)).is_empty());
    }

    #[test]
    fn test_non_string_elements_degrade_to_empty() {
        assert_eq!(sanitize(Some("[1, 2, 3]")), "[1, 2, 3]");
        assert!(parse_steps(Some("[1, 2, 3]")).is_empty());
        assert!(parse_steps(Some(r#"["Mix", {"step": 2}]"#)).is_empty());
    }

    #[test]
    fn test_span_covers_first_open_to_last_close() {
        let raw = r#"Use [brackets] wisely: ["Chop", "Stir"]"#;
        let cleaned = sanitize(Some(raw));
        assert_eq!(cleaned, r#"[brackets] wisely: ["Chop", "Stir"]"#);
        assert!(parse_steps(Some(raw)).is_empty());
    }

    #[test]
    fn test_elements_returned_unmodified() {
        let raw = r#"["  Preheat  ", "Stir", "Stir", ""]"#;
        assert_eq!(parse_steps(Some(raw)), vec!["  Preheat  ", "Stir", "Stir", ""]);
    }

    #[test]
    fn test_nested_brackets_inside_strings() {
        let raw = r#"["Add [optional] nuts", "Serve"]"#;
        assert_eq!(parse_steps(Some(raw)), vec!["Add [optional] nuts", "Serve"]);
    }

    #[test]
    fn test_empty_array() {
        assert_eq!(sanitize(Some("Here: []")), "[]");
        assert!(parse_steps(Some("[ ]")).is_empty());
    }

    #[test]
    fn test_multibyte_prose() {
        let raw = "Voilà, les étapes : [\"Mélanger\", \"Cuire\"] Bon appétit !";
        assert_eq!(parse_steps(Some(raw)), vec!["Mélanger", "Cuire"]);
    }

    proptest! {
        #[test]
        fn prop_sanitize_is_idempotent(raw in ".*") {
            let once = sanitize(Some(raw.as_str()));
            prop_assert_eq!(sanitize(Some(once.as_str())), once);
        }

        #[test]
        fn prop_sanitize_output_is_array_shaped(raw in ".*") {
            let cleaned = sanitize(Some(raw.as_str()));
            prop_assert!(looks_like_json_array(&cleaned));
        }

        #[test]
        fn prop_well_formed_arrays_survive_noise(
            steps in proptest::collection::vec("[a-zA-Z0-9 ,.]{0,20}", 0..6),
            prefix in "[a-zA-Z !:]{0,20}",
            suffix in "[a-zA-Z !.]{0,20}",
        ) {
            let array = serde_json::to_string(&steps).unwrap();
            let raw = format!("{}{}{}", prefix, array, suffix);
            prop_assert_eq!(parse_steps(Some(raw.as_str())), steps);
        }
    }
}
