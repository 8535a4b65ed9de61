//! Single-provider validation run
//!
//! [`ValidatorRunner`] is the failure-isolation boundary: whatever happens
//! to one provider call - transport error, timeout, garbage response - the
//! runner produces exactly one well-formed `ProviderResult` and never
//! raises. The orchestrator above it only ever sees data.

use crate::config::BehaviorConfig;
use crate::ports::validator::Validator;
use quizgate_domain::{
    ContentItem, ProviderResult, ReviewPromptTemplate, ValidationCriteria,
    parse_provider_response,
};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Runs one validator against one content item
#[derive(Debug, Clone, Copy)]
pub struct ValidatorRunner {
    timeout: Duration,
}

impl ValidatorRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// The configured per-provider timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Invoke one validator and convert whatever happens into a result.
    ///
    /// Builds the deterministic review prompt, enforces the per-provider
    /// timeout, measures wall-clock duration, and parses the raw response.
    /// Infallible by design.
    pub async fn run(
        &self,
        validator: &dyn Validator,
        content: &ContentItem,
        criteria: &ValidationCriteria,
    ) -> ProviderResult {
        let provider = validator.provider();
        let prompt = ReviewPromptTemplate::review_prompt(content, criteria);

        debug!(%provider, item = %content.id, "dispatching validator");
        let start = Instant::now();

        let result = match tokio::time::timeout(self.timeout, validator.assess(&prompt)).await {
            Ok(Ok(raw)) => parse_provider_response(&raw, provider),
            Ok(Err(e)) => {
                warn!(%provider, item = %content.id, "validator failed: {}", e);
                ProviderResult::failure(provider, e.to_string())
            }
            Err(_) => {
                warn!(%provider, item = %content.id, "validator timed out");
                ProviderResult::failure(
                    provider,
                    format!("timed out after {}s", self.timeout.as_secs()),
                )
            }
        };

        result.with_review_time(start.elapsed().as_millis() as u64)
    }
}

impl Default for ValidatorRunner {
    fn default() -> Self {
        Self::new(BehaviorConfig::default().provider_timeout())
    }
}
