//! Deterministic mock validator
//!
//! A configuration-selected fake, not a separate code path: the
//! orchestrator and consensus engine run exactly as they do against real
//! vendors, which is what makes them testable end to end.

use async_trait::async_trait;
use quizgate_application::{Validator, ValidatorError};
use quizgate_domain::ProviderId;

/// Validator that returns a fixed, well-formed assessment
pub struct MockValidator {
    provider: ProviderId,
    accuracy: u8,
    suggestions: Vec<String>,
}

impl MockValidator {
    pub fn new(provider: ProviderId) -> Self {
        Self {
            provider,
            accuracy: 88,
            suggestions: Vec::new(),
        }
    }

    /// Set the reported accuracy (clamped to 100)
    pub fn with_accuracy(mut self, accuracy: u8) -> Self {
        self.accuracy = accuracy.min(100);
        self
    }

    /// Add a canned suggestion to every response
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}

#[async_trait]
impl Validator for MockValidator {
    fn provider(&self) -> ProviderId {
        self.provider
    }

    async fn assess(&self, _prompt: &str) -> Result<String, ValidatorError> {
        let assessment = serde_json::json!({
            "isValid": self.accuracy >= 80,
            "accuracy": self.accuracy,
            "difficultyMatch": true,
            "issues": [],
            "suggestions": self.suggestions,
        });
        Ok(assessment.to_string())
    }
}
