//! Per-provider assessment results

use super::issue::Issue;
use crate::core::provider::ProviderId;
use serde::{Deserialize, Serialize};

/// Structured assessment from a single validator (Value Object)
///
/// A `ProviderResult` is never partially filled: a provider either returns
/// a fully-formed assessment, or a sentinel with `failed = true`,
/// `accuracy = 0` and `is_valid = false`. The sentinel form is what lets
/// the orchestrator treat provider failure as data instead of an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderResult {
    /// The validator that produced this assessment
    pub provider: ProviderId,
    /// Whether the provider considers the content valid
    pub is_valid: bool,
    /// Quality score, always within 0..=100
    pub accuracy: u8,
    /// Whether the stated difficulty matches the provider's judgment
    pub difficulty_match: bool,
    /// Free-text commentary on difficulty, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty_comment: Option<String>,
    /// Issues found in the content
    #[serde(default)]
    pub issues: Vec<Issue>,
    /// Improvement suggestions
    #[serde(default)]
    pub suggestions: Vec<String>,
    /// Provider-proposed replacement answer, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corrected_answer: Option<String>,
    /// Provider-proposed replacement explanation, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corrected_explanation: Option<String>,
    /// Wall-clock duration of the provider call in milliseconds
    pub review_time_ms: u64,
    /// Whether the provider failed (transport or parse)
    pub failed: bool,
    /// Short human-readable cause when `failed` is true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

impl ProviderResult {
    /// Create a minimal successful assessment
    ///
    /// Useful for tests and for synthetic results; the accuracy is clamped
    /// into 0..=100 (a no-op for `u8`, kept as the single construction
    /// point for the range invariant).
    pub fn assessment(provider: ProviderId, accuracy: u8, is_valid: bool) -> Self {
        Self {
            provider,
            is_valid,
            accuracy: accuracy.min(100),
            difficulty_match: true,
            difficulty_comment: None,
            issues: Vec::new(),
            suggestions: Vec::new(),
            corrected_answer: None,
            corrected_explanation: None,
            review_time_ms: 0,
            failed: false,
            failure_reason: None,
        }
    }

    /// Create the sentinel result for a failed provider call
    pub fn failure(provider: ProviderId, reason: impl Into<String>) -> Self {
        Self {
            provider,
            is_valid: false,
            accuracy: 0,
            difficulty_match: false,
            difficulty_comment: None,
            issues: Vec::new(),
            suggestions: Vec::new(),
            corrected_answer: None,
            corrected_explanation: None,
            review_time_ms: 0,
            failed: true,
            failure_reason: Some(reason.into()),
        }
    }

    /// Stamp the measured call duration
    pub fn with_review_time(mut self, ms: u64) -> Self {
        self.review_time_ms = ms;
        self
    }

    /// Add an issue (builder form, for tests and synthetic results)
    pub fn with_issue(mut self, issue: Issue) -> Self {
        self.issues.push(issue);
        self
    }

    /// Add a suggestion (builder form, for tests and synthetic results)
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::issue::Severity;

    #[test]
    fn test_failure_sentinel_shape() {
        let result = ProviderResult::failure(ProviderId::Gemini, "request timed out");

        assert!(result.failed);
        assert!(!result.is_valid);
        assert_eq!(result.accuracy, 0);
        assert!(result.issues.is_empty());
        assert!(result.suggestions.is_empty());
        assert_eq!(result.failure_reason.as_deref(), Some("request timed out"));
    }

    #[test]
    fn test_assessment_clamps_accuracy() {
        let result = ProviderResult::assessment(ProviderId::Claude, 250, true);
        assert_eq!(result.accuracy, 100);
        assert!(!result.failed);
    }

    #[test]
    fn test_builders() {
        let result = ProviderResult::assessment(ProviderId::Gpt, 70, false)
            .with_issue(Issue::new(Severity::Warning, "explanation skips a step"))
            .with_suggestion("show the intermediate calculation")
            .with_review_time(820);

        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.suggestions.len(), 1);
        assert_eq!(result.review_time_ms, 820);
    }
}
