//! Assessment response parsing.
//!
//! Validators are instructed to reply with a single JSON object, but real
//! responses routinely arrive wrapped in markdown code fences, prefixed
//! with prose, or not as JSON at all. This module is the boundary against
//! that untrusted output: [`parse_provider_response`] is a total function
//! that either produces a fully-formed [`ProviderResult`] or the failure
//! sentinel. It never panics and never returns an error.
//!
//! Decoding is a chain of strategies, tried in order:
//!
//! 1. direct decode of the trimmed response
//! 2. decode after stripping markdown code fences
//! 3. decode of the first-`{`-to-last-`}` span
//! 4. failure sentinel

use super::issue::{Issue, Severity};
use super::result::ProviderResult;
use crate::core::provider::ProviderId;
use serde::Deserialize;

/// Failure reason recorded when no strategy could decode the response
pub const PARSE_FAILURE_REASON: &str = "parse error";

/// Parse a validator's raw response into a structured assessment.
///
/// Tolerates providers that ignore formatting instructions; on any decode
/// failure the sentinel result is returned.
///
/// # Examples
///
/// ```
/// use quizgate_domain::review::parsing::parse_provider_response;
/// use quizgate_domain::core::provider::ProviderId;
///
/// let ok = parse_provider_response(
///     r#"{"isValid": true, "accuracy": 92}"#,
///     ProviderId::Claude,
/// );
/// assert!(!ok.failed);
/// assert_eq!(ok.accuracy, 92);
///
/// let bad = parse_provider_response("I cannot help with that.", ProviderId::Claude);
/// assert!(bad.failed);
/// ```
pub fn parse_provider_response(raw: &str, provider: ProviderId) -> ProviderResult {
    let trimmed = raw.trim();

    let decoded = decode(trimmed)
        .or_else(|| strip_code_fences(trimmed).as_deref().and_then(decode))
        .or_else(|| extract_brace_span(trimmed).and_then(decode));

    match decoded {
        Some(assessment) => assessment.into_result(provider),
        None => ProviderResult::failure(provider, PARSE_FAILURE_REASON),
    }
}

fn decode(text: &str) -> Option<RawAssessment> {
    serde_json::from_str(text).ok()
}

/// Extract the body of the first markdown code fence, if any.
///
/// Handles both ```` ```json ```` and bare ```` ``` ```` fences.
fn strip_code_fences(text: &str) -> Option<String> {
    let start = text.find("```")?;
    let after_fence = &text[start + 3..];
    // Skip the rest of the fence line (language tag, if present)
    let body_start = after_fence.find('\n')? + 1;
    let body = &after_fence[body_start..];
    let end = body.rfind("```")?;
    Some(body[..end].trim().to_string())
}

/// Slice from the first `{` to the last `}`, the last-resort extraction
/// for responses that bury the object in surrounding prose.
fn extract_brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// The wire shape validators are asked to produce.
///
/// Every field is optional: providers omit fields, rename nothing we asked
/// for, and sometimes send numbers as strings. Coercion into the strict
/// [`ProviderResult`] happens in [`RawAssessment::into_result`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawAssessment {
    #[serde(alias = "isValid")]
    is_valid: Option<bool>,
    accuracy: Option<ScoreValue>,
    #[serde(alias = "difficultyMatch")]
    difficulty_match: Option<bool>,
    #[serde(alias = "difficultyComment")]
    difficulty_comment: Option<String>,
    issues: Vec<RawIssue>,
    suggestions: Vec<String>,
    #[serde(alias = "correctedAnswer")]
    corrected_answer: Option<String>,
    #[serde(alias = "correctedExplanation")]
    corrected_explanation: Option<String>,
}

impl RawAssessment {
    fn into_result(self, provider: ProviderId) -> ProviderResult {
        let accuracy = self
            .accuracy
            .and_then(|score| score.as_clamped_score())
            .unwrap_or(0);
        // A provider that omits its own verdict is judged by its score
        let is_valid = self.is_valid.unwrap_or(accuracy >= 80);

        ProviderResult {
            provider,
            is_valid,
            accuracy,
            difficulty_match: self.difficulty_match.unwrap_or(true),
            difficulty_comment: self.difficulty_comment,
            issues: self.issues.into_iter().map(RawIssue::into_issue).collect(),
            suggestions: self.suggestions,
            corrected_answer: self.corrected_answer,
            corrected_explanation: self.corrected_explanation,
            review_time_ms: 0,
            failed: false,
            failure_reason: None,
        }
    }
}

/// Accepts both JSON numbers and numeric strings for the accuracy field
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScoreValue {
    Number(f64),
    Text(String),
}

impl ScoreValue {
    fn as_clamped_score(&self) -> Option<u8> {
        let value = match self {
            ScoreValue::Number(n) => *n,
            ScoreValue::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        if value.is_nan() {
            return None;
        }
        Some(value.clamp(0.0, 100.0).round() as u8)
    }
}

/// Accepts both `{severity, message}` objects and bare strings for issues
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawIssue {
    Entry {
        severity: Option<String>,
        message: String,
    },
    Text(String),
}

impl RawIssue {
    fn into_issue(self) -> Issue {
        match self {
            RawIssue::Entry { severity, message } => {
                let severity = severity
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(Severity::Warning);
                Issue::new(severity, message)
            }
            // A bare string carries no severity; treat it as a quality concern
            RawIssue::Text(message) => Issue::new(Severity::Warning, message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Well-formed responses ====================

    #[test]
    fn test_parse_full_assessment() {
        let raw = r#"{
            "isValid": false,
            "accuracy": 55,
            "difficultyMatch": false,
            "difficultyComment": "Too easy for the stated level",
            "issues": [
                {"severity": "error", "message": "The answer key is wrong"},
                {"severity": "suggestion", "message": "Add a diagram"}
            ],
            "suggestions": ["Rework the answer", "Add a diagram"],
            "correctedAnswer": "42",
            "correctedExplanation": "Multiply before adding."
        }"#;

        let result = parse_provider_response(raw, ProviderId::Claude);

        assert!(!result.failed);
        assert!(!result.is_valid);
        assert_eq!(result.accuracy, 55);
        assert!(!result.difficulty_match);
        assert_eq!(
            result.difficulty_comment.as_deref(),
            Some("Too easy for the stated level")
        );
        assert_eq!(result.issues.len(), 2);
        assert_eq!(result.issues[0].severity, Severity::Error);
        assert_eq!(result.suggestions.len(), 2);
        assert_eq!(result.corrected_answer.as_deref(), Some("42"));
    }

    #[test]
    fn test_parse_snake_case_fields() {
        let raw = r#"{"is_valid": true, "accuracy": 90, "difficulty_match": true}"#;
        let result = parse_provider_response(raw, ProviderId::Gpt);

        assert!(!result.failed);
        assert!(result.is_valid);
        assert_eq!(result.accuracy, 90);
    }

    #[test]
    fn test_accuracy_clamped_into_range() {
        let result = parse_provider_response(r#"{"accuracy": 180}"#, ProviderId::Claude);
        assert_eq!(result.accuracy, 100);

        let result = parse_provider_response(r#"{"accuracy": -20}"#, ProviderId::Claude);
        assert_eq!(result.accuracy, 0);
    }

    #[test]
    fn test_accuracy_as_numeric_string() {
        let result = parse_provider_response(r#"{"accuracy": "87"}"#, ProviderId::Gemini);
        assert_eq!(result.accuracy, 87);
        assert!(result.is_valid); // 87 >= 80
    }

    // ==================== Defaulting rules ====================

    #[test]
    fn test_missing_is_valid_derived_from_accuracy() {
        let high = parse_provider_response(r#"{"accuracy": 85}"#, ProviderId::Claude);
        assert!(high.is_valid);

        let low = parse_provider_response(r#"{"accuracy": 79}"#, ProviderId::Claude);
        assert!(!low.is_valid);
    }

    #[test]
    fn test_missing_fields_default() {
        let result = parse_provider_response(r#"{"accuracy": 95}"#, ProviderId::Gpt);

        assert!(result.difficulty_match);
        assert!(result.issues.is_empty());
        assert!(result.suggestions.is_empty());
        assert!(result.corrected_answer.is_none());
    }

    #[test]
    fn test_issue_severity_fallbacks() {
        let raw = r#"{
            "accuracy": 70,
            "issues": [
                {"severity": "catastrophic", "message": "unknown severity"},
                {"message": "no severity at all"},
                "bare string issue"
            ]
        }"#;
        let result = parse_provider_response(raw, ProviderId::Gemini);

        assert_eq!(result.issues.len(), 3);
        assert!(result.issues.iter().all(|i| i.severity == Severity::Warning));
        assert_eq!(result.issues[2].message, "bare string issue");
    }

    // ==================== Wrapping artifacts ====================

    #[test]
    fn test_markdown_fenced_response() {
        let raw = "Here is my assessment:\n```json\n{\"isValid\": true, \"accuracy\": 91}\n```\nLet me know if you need more.";
        let result = parse_provider_response(raw, ProviderId::Claude);

        assert!(!result.failed);
        assert_eq!(result.accuracy, 91);
    }

    #[test]
    fn test_prose_wrapped_response() {
        let raw = "Sure! After careful review: {\"accuracy\": 66, \"isValid\": false} — happy to elaborate.";
        let result = parse_provider_response(raw, ProviderId::Gpt);

        assert!(!result.failed);
        assert_eq!(result.accuracy, 66);
        assert!(!result.is_valid);
    }

    // ==================== Malformed responses ====================

    #[test]
    fn test_empty_response_is_sentinel() {
        let result = parse_provider_response("", ProviderId::Claude);
        assert!(result.failed);
        assert_eq!(result.accuracy, 0);
        assert!(!result.is_valid);
        assert_eq!(result.failure_reason.as_deref(), Some(PARSE_FAILURE_REASON));
    }

    #[test]
    fn test_prose_without_braces_is_sentinel() {
        let result =
            parse_provider_response("The question looks fine to me overall.", ProviderId::Gemini);
        assert!(result.failed);
    }

    #[test]
    fn test_truncated_json_is_sentinel() {
        let result = parse_provider_response(
            r#"{"isValid": true, "accuracy": 9"#,
            ProviderId::Gpt,
        );
        assert!(result.failed);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_json_array_is_sentinel() {
        // An array has no brace span and decodes to no object
        let result = parse_provider_response(r#"[1, 2, 3]"#, ProviderId::Claude);
        assert!(result.failed);
    }

    // ==================== Strategy helpers ====================

    #[test]
    fn test_strip_code_fences() {
        let stripped = strip_code_fences("```json\n{\"a\": 1}\n```").unwrap();
        assert_eq!(stripped, "{\"a\": 1}");

        let stripped = strip_code_fences("```\n{}\n```").unwrap();
        assert_eq!(stripped, "{}");

        assert!(strip_code_fences("no fences here").is_none());
    }

    #[test]
    fn test_extract_brace_span() {
        assert_eq!(extract_brace_span("abc {x} def"), Some("{x}"));
        assert_eq!(extract_brace_span("{a} and {b}"), Some("{a} and {b}"));
        assert!(extract_brace_span("} reversed {").is_none());
        assert!(extract_brace_span("nothing").is_none());
    }
}
