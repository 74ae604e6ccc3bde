//! Response normalization for model output
//!
//! The model is asked for JSON (or prose, for `summary`) but nothing
//! enforces compliance, and observed output sometimes wraps JSON in
//! markdown code fences. Normalization is all-or-nothing: strip fences,
//! trim, try a JSON parse, and on any failure fall back to the raw text
//! unchanged. No partial parse, no schema validation.
//!
//! This is deliberately a boundary adapter, isolated from the dispatcher,
//! so a stricter schema-validating variant could replace it later.

use crate::domain::models::AnalysisResult;
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a code-fence marker (optionally tagged `json`) and the newline
/// that usually follows it, anywhere in the text.
static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(?:json)?\n?").expect("valid fence pattern"));

/// Remove markdown code-fence markers and trim surrounding whitespace.
///
/// A no-op (beyond trimming) for text that contains no fences.
pub fn strip_code_fences(text: &str) -> String {
    CODE_FENCE.replace_all(text, "").trim().to_string()
}

/// Convert raw model output into the most useful typed form.
///
/// Returns the parsed JSON value when the fence-stripped text is valid
/// JSON, otherwise the original raw text exactly as received.
pub fn normalize_response(raw: &str) -> AnalysisResult {
    let cleaned = strip_code_fences(raw);
    match serde_json::from_str::<serde_json::Value>(&cleaned) {
        Ok(value) => AnalysisResult::Structured(value),
        Err(_) => AnalysisResult::Text(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fenced_json_is_parsed() {
        let raw = "```json\n{\"a\":1}\n```";
        assert_eq!(
            normalize_response(raw),
            AnalysisResult::Structured(json!({"a": 1}))
        );
    }

    #[test]
    fn test_unfenced_json_is_parsed() {
        let raw = "{\"scenarios\": []}";
        assert_eq!(
            normalize_response(raw),
            AnalysisResult::Structured(json!({"scenarios": []}))
        );
    }

    #[test]
    fn test_untagged_fence_is_stripped() {
        let raw = "```\n[1, 2, 3]\n```";
        assert_eq!(
            normalize_response(raw),
            AnalysisResult::Structured(json!([1, 2, 3]))
        );
    }

    #[test]
    fn test_prose_falls_back_to_raw_text() {
        let raw = "Dear Client, thanks for meeting.";
        assert_eq!(normalize_response(raw), AnalysisResult::Text(raw.to_string()));
    }

    #[test]
    fn test_fallback_keeps_original_text_unmodified() {
        // Malformed JSON inside fences: the fallback must return the raw
        // input, fences and all, not the cleaned text.
        let raw = "```json\n{\"a\": \n```";
        assert_eq!(normalize_response(raw), AnalysisResult::Text(raw.to_string()));
    }

    #[test]
    fn test_empty_output_falls_back() {
        assert_eq!(normalize_response(""), AnalysisResult::Text(String::new()));
    }

    #[test]
    fn test_scalar_json_is_structured() {
        assert_eq!(normalize_response("4"), AnalysisResult::Structured(json!(4)));
    }

    #[test]
    fn test_strip_is_noop_without_fences() {
        let text = "no fences here";
        assert_eq!(strip_code_fences(text), text);
        // Idempotent: stripping already-stripped text changes nothing.
        assert_eq!(strip_code_fences(&strip_code_fences(text)), text);
    }

    #[test]
    fn test_strip_removes_interior_fences() {
        let text = "prefix ```json\n{}\n``` suffix";
        assert_eq!(strip_code_fences(text), "prefix {}\n suffix");
    }
}
