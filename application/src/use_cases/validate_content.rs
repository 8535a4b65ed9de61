//! Validate Content use case
//!
//! Orchestrates one content item's review: fans a single request out to
//! every requested provider concurrently, waits for all of them to settle,
//! and hands the results to the consensus engine. There is no early
//! termination and no cross-provider cancellation - a slow provider only
//! costs its own timeout.

use crate::config::BehaviorConfig;
use crate::ports::progress::{NoProgress, ReviewProgress};
use crate::ports::validator::Validator;
use crate::use_cases::run_validator::ValidatorRunner;
use quizgate_domain::{
    AggregatedResult, ConsensusEngine, ContentItem, ProviderId, ProviderResult,
    ValidationCriteria,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Errors raised synchronously to the caller
///
/// These indicate programmer error in how the engine was invoked; ordinary
/// provider flakiness never surfaces here.
#[derive(Error, Debug)]
pub enum ValidateError {
    #[error("no providers specified")]
    NoProviders,

    #[error("no validator configured for provider: {0}")]
    ValidatorNotConfigured(ProviderId),
}

/// Input for the ValidateContent use case
#[derive(Debug, Clone)]
pub struct ValidateContentInput {
    /// The artifact under review
    pub content: ContentItem,
    /// Which providers to dispatch to (duplicates are removed)
    pub providers: Vec<ProviderId>,
    /// Evaluation dimensions to emphasize
    pub criteria: ValidationCriteria,
}

impl ValidateContentInput {
    pub fn new(content: ContentItem, providers: Vec<ProviderId>) -> Self {
        Self {
            content,
            providers,
            criteria: ValidationCriteria::default(),
        }
    }

    pub fn with_criteria(mut self, criteria: ValidationCriteria) -> Self {
        self.criteria = criteria;
        self
    }
}

/// Use case for validating one content item across providers
///
/// Validator implementations are injected at construction - no global
/// client singletons - so tests can supply deterministic fakes and
/// credentials have an explicit lifecycle.
pub struct ValidateContentUseCase {
    validators: HashMap<ProviderId, Arc<dyn Validator>>,
    runner: ValidatorRunner,
}

impl ValidateContentUseCase {
    pub fn new(validators: Vec<Arc<dyn Validator>>) -> Self {
        let validators = validators
            .into_iter()
            .map(|v| (v.provider(), v))
            .collect();
        Self {
            validators,
            runner: ValidatorRunner::default(),
        }
    }

    /// Override the per-provider timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.runner = ValidatorRunner::new(timeout);
        self
    }

    /// Apply behavior configuration
    pub fn with_config(self, config: &BehaviorConfig) -> Self {
        self.with_timeout(config.provider_timeout())
    }

    /// De-duplicate the requested provider set (preserving first
    /// occurrence) and check every entry has an injected implementation.
    pub(crate) fn resolve_providers(
        &self,
        requested: &[ProviderId],
    ) -> Result<Vec<ProviderId>, ValidateError> {
        let mut providers: Vec<ProviderId> = Vec::with_capacity(requested.len());
        for provider in requested {
            if !providers.contains(provider) {
                providers.push(*provider);
            }
        }
        if providers.is_empty() {
            return Err(ValidateError::NoProviders);
        }
        for provider in &providers {
            if !self.validators.contains_key(provider) {
                return Err(ValidateError::ValidatorNotConfigured(*provider));
            }
        }
        Ok(providers)
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: ValidateContentInput,
    ) -> Result<AggregatedResult, ValidateError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: ValidateContentInput,
        progress: &dyn ReviewProgress,
    ) -> Result<AggregatedResult, ValidateError> {
        let providers = self.resolve_providers(&input.providers)?;

        info!(
            item = %input.content.id,
            "validating with {} providers",
            providers.len()
        );
        progress.on_validation_start(&input.content.id, providers.len());

        let content = Arc::new(input.content);
        let criteria = Arc::new(input.criteria);
        let start = Instant::now();

        let mut join_set = JoinSet::new();
        for (index, provider) in providers.iter().enumerate() {
            let validator = Arc::clone(&self.validators[provider]);
            let content = Arc::clone(&content);
            let criteria = Arc::clone(&criteria);
            let runner = self.runner;

            join_set.spawn(async move {
                let result = runner.run(validator.as_ref(), &content, &criteria).await;
                (index, result)
            });
        }

        // Collect in completion order, reassemble in dispatch order
        let mut slots: Vec<Option<ProviderResult>> = (0..providers.len()).map(|_| None).collect();
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, result)) => {
                    progress.on_provider_complete(&content.id, result.provider, !result.failed);
                    slots[index] = Some(result);
                }
                Err(e) => {
                    warn!("validator task join error: {}", e);
                }
            }
        }

        // A slot left empty means the task panicked or was aborted; keep
        // the one-result-per-provider invariant with a sentinel
        let results: Vec<ProviderResult> = slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.unwrap_or_else(|| {
                    ProviderResult::failure(providers[index], "validator task aborted")
                })
            })
            .collect();

        let total_time_ms = start.elapsed().as_millis() as u64;
        progress.on_validation_complete(&content.id);

        Ok(ConsensusEngine::aggregate(results).with_total_time(total_time_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::validator::ValidatorError;
    use async_trait::async_trait;
    use quizgate_domain::Recommendation;

    enum Script {
        Reply(String),
        Fail(String),
    }

    struct ScriptedValidator {
        provider: ProviderId,
        script: Script,
        delay: Duration,
    }

    impl ScriptedValidator {
        fn replying(provider: ProviderId, response: &str) -> Arc<dyn Validator> {
            Arc::new(Self {
                provider,
                script: Script::Reply(response.to_string()),
                delay: Duration::ZERO,
            })
        }

        fn replying_after(
            provider: ProviderId,
            response: &str,
            delay: Duration,
        ) -> Arc<dyn Validator> {
            Arc::new(Self {
                provider,
                script: Script::Reply(response.to_string()),
                delay,
            })
        }

        fn failing(provider: ProviderId, cause: &str) -> Arc<dyn Validator> {
            Arc::new(Self {
                provider,
                script: Script::Fail(cause.to_string()),
                delay: Duration::ZERO,
            })
        }
    }

    #[async_trait]
    impl Validator for ScriptedValidator {
        fn provider(&self) -> ProviderId {
            self.provider
        }

        async fn assess(&self, _prompt: &str) -> Result<String, ValidatorError> {
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            match &self.script {
                Script::Reply(text) => Ok(text.clone()),
                Script::Fail(cause) => Err(ValidatorError::Connection(cause.clone())),
            }
        }
    }

    fn item() -> ContentItem {
        ContentItem::new("q-1", "What is 2 + 2?", "4", "Add the operands.")
    }

    fn all_three() -> Vec<ProviderId> {
        vec![ProviderId::Claude, ProviderId::Gemini, ProviderId::Gpt]
    }

    #[tokio::test]
    async fn test_empty_provider_set_is_an_error() {
        let use_case = ValidateContentUseCase::new(vec![ScriptedValidator::replying(
            ProviderId::Claude,
            "{}",
        )]);

        let outcome = use_case
            .execute(ValidateContentInput::new(item(), vec![]))
            .await;

        assert!(matches!(outcome, Err(ValidateError::NoProviders)));
    }

    #[tokio::test]
    async fn test_unconfigured_provider_is_an_error() {
        let use_case = ValidateContentUseCase::new(vec![ScriptedValidator::replying(
            ProviderId::Claude,
            "{}",
        )]);

        let outcome = use_case
            .execute(ValidateContentInput::new(
                item(),
                vec![ProviderId::Claude, ProviderId::Gemini],
            ))
            .await;

        assert!(matches!(
            outcome,
            Err(ValidateError::ValidatorNotConfigured(ProviderId::Gemini))
        ));
    }

    #[tokio::test]
    async fn test_duplicate_providers_dispatch_once() {
        let use_case = ValidateContentUseCase::new(vec![ScriptedValidator::replying(
            ProviderId::Claude,
            r#"{"accuracy": 90, "isValid": true}"#,
        )]);

        let aggregated = use_case
            .execute(ValidateContentInput::new(
                item(),
                vec![ProviderId::Claude, ProviderId::Claude, ProviderId::Claude],
            ))
            .await
            .unwrap();

        assert_eq!(aggregated.results.len(), 1);
    }

    #[tokio::test]
    async fn test_results_preserve_dispatch_order() {
        // Claude is the slowest; its result must still come first
        let use_case = ValidateContentUseCase::new(vec![
            ScriptedValidator::replying_after(
                ProviderId::Claude,
                r#"{"accuracy": 90}"#,
                Duration::from_millis(80),
            ),
            ScriptedValidator::replying_after(
                ProviderId::Gemini,
                r#"{"accuracy": 85}"#,
                Duration::from_millis(40),
            ),
            ScriptedValidator::replying(ProviderId::Gpt, r#"{"accuracy": 80}"#),
        ]);

        let aggregated = use_case
            .execute(ValidateContentInput::new(item(), all_three()))
            .await
            .unwrap();

        let order: Vec<ProviderId> = aggregated.results.iter().map(|r| r.provider).collect();
        assert_eq!(order, all_three());
    }

    #[tokio::test]
    async fn test_one_failure_does_not_poison_the_rest() {
        let use_case = ValidateContentUseCase::new(vec![
            ScriptedValidator::replying(
                ProviderId::Claude,
                r#"{"accuracy": 95, "isValid": true}"#,
            ),
            ScriptedValidator::failing(ProviderId::Gemini, "connection refused"),
            ScriptedValidator::replying(ProviderId::Gpt, r#"{"accuracy": 85, "isValid": true}"#),
        ]);

        let aggregated = use_case
            .execute(ValidateContentInput::new(item(), all_three()))
            .await
            .unwrap();

        // The concrete scenario: 95 and 85 average to 90, the failure is
        // excluded, and both usable verdicts agree
        assert_eq!(aggregated.average_score, 90);
        assert!(aggregated.consensus_valid);
        assert_eq!(aggregated.recommendation, Recommendation::Approve);
        assert!(aggregated.results[1].failed);
    }

    #[tokio::test]
    async fn test_slow_provider_times_out_without_cancelling_siblings() {
        let use_case = ValidateContentUseCase::new(vec![
            ScriptedValidator::replying(
                ProviderId::Claude,
                r#"{"accuracy": 95, "isValid": true}"#,
            ),
            ScriptedValidator::replying_after(
                ProviderId::Gemini,
                r#"{"accuracy": 99}"#,
                Duration::from_millis(500),
            ),
            ScriptedValidator::replying(ProviderId::Gpt, r#"{"accuracy": 85, "isValid": true}"#),
        ])
        .with_timeout(Duration::from_millis(50));

        let aggregated = use_case
            .execute(ValidateContentInput::new(item(), all_three()))
            .await
            .unwrap();

        assert!(aggregated.results[1].failed);
        assert_eq!(aggregated.average_score, 90);
        assert!(aggregated.consensus_valid);
    }

    #[tokio::test]
    async fn test_all_failed_is_a_degenerate_verdict_not_an_error() {
        let use_case = ValidateContentUseCase::new(vec![
            ScriptedValidator::failing(ProviderId::Claude, "auth"),
            ScriptedValidator::failing(ProviderId::Gpt, "rate limit"),
        ]);

        let aggregated = use_case
            .execute(ValidateContentInput::new(
                item(),
                vec![ProviderId::Claude, ProviderId::Gpt],
            ))
            .await
            .unwrap();

        assert!(aggregated.is_degenerate());
        assert_eq!(aggregated.average_score, 0);
        assert!(!aggregated.consensus_valid);
        assert_eq!(aggregated.recommendation, Recommendation::Reject);
    }

    #[tokio::test]
    async fn test_total_time_reflects_fan_out_not_sum() {
        let use_case = ValidateContentUseCase::new(vec![
            ScriptedValidator::replying_after(
                ProviderId::Claude,
                r#"{"accuracy": 90}"#,
                Duration::from_millis(100),
            ),
            ScriptedValidator::replying_after(
                ProviderId::Gpt,
                r#"{"accuracy": 90}"#,
                Duration::from_millis(100),
            ),
        ]);

        let aggregated = use_case
            .execute(ValidateContentInput::new(
                item(),
                vec![ProviderId::Claude, ProviderId::Gpt],
            ))
            .await
            .unwrap();

        // Both providers ran concurrently: the span is bounded by the
        // slowest provider, not the sum of both
        assert!(aggregated.total_time_ms >= 100);
        assert!(aggregated.total_time_ms < 200);
    }
}
