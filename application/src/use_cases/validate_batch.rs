//! Validate Batch use case
//!
//! Runs the content orchestrator over a collection of items concurrently
//! (a fan-out of fan-outs) and compiles per-provider and overall
//! statistics. One item's total failure never aborts the batch.

use crate::ports::review_logger::{NoReviewLogger, ReviewEvent, ReviewLogger};
use crate::use_cases::validate_content::{
    ValidateContentInput, ValidateContentUseCase, ValidateError,
};
use quizgate_domain::{
    AggregatedResult, BatchResult, ConsensusEngine, ContentItem, ProviderId, ValidationCriteria,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Input for the ValidateBatch use case
#[derive(Debug, Clone)]
pub struct ValidateBatchInput {
    /// The items to validate
    pub items: Vec<ContentItem>,
    /// Which providers to dispatch to, for every item
    pub providers: Vec<ProviderId>,
    /// Evaluation dimensions to emphasize
    pub criteria: ValidationCriteria,
}

impl ValidateBatchInput {
    pub fn new(items: Vec<ContentItem>, providers: Vec<ProviderId>) -> Self {
        Self {
            items,
            providers,
            criteria: ValidationCriteria::default(),
        }
    }

    pub fn with_criteria(mut self, criteria: ValidationCriteria) -> Self {
        self.criteria = criteria;
        self
    }
}

/// Use case for validating many content items concurrently
pub struct ValidateBatchUseCase {
    orchestrator: Arc<ValidateContentUseCase>,
    logger: Arc<dyn ReviewLogger>,
}

impl ValidateBatchUseCase {
    pub fn new(orchestrator: Arc<ValidateContentUseCase>) -> Self {
        Self {
            orchestrator,
            logger: Arc::new(NoReviewLogger),
        }
    }

    /// Attach a review audit logger
    pub fn with_logger(mut self, logger: Arc<dyn ReviewLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Validate every item, returning one entry per input item.
    ///
    /// The provider set is validated once, up front: configuration errors
    /// surface before any work is dispatched. After that point nothing
    /// aborts the batch - items whose providers all fail settle as
    /// degenerate verdicts.
    pub async fn execute(&self, input: ValidateBatchInput) -> Result<BatchResult, ValidateError> {
        let providers = self.orchestrator.resolve_providers(&input.providers)?;

        info!(
            items = input.items.len(),
            providers = providers.len(),
            "starting batch validation"
        );

        let criteria = input.criteria;
        let mut join_set = JoinSet::new();
        for item in input.items {
            let orchestrator = Arc::clone(&self.orchestrator);
            let providers = providers.clone();
            let criteria = criteria.clone();

            join_set.spawn(async move {
                let item_id = item.id.clone();
                let outcome = orchestrator
                    .execute(
                        ValidateContentInput::new(item, providers).with_criteria(criteria),
                    )
                    .await;
                (item_id, outcome)
            });
        }

        let mut results: HashMap<String, AggregatedResult> = HashMap::new();
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((item_id, Ok(aggregated))) => {
                    self.logger.log(ReviewEvent::new(
                        "item_validated",
                        serde_json::json!({
                            "item_id": item_id,
                            "consensus_valid": aggregated.consensus_valid,
                            "average_score": aggregated.average_score,
                            "recommendation": aggregated.recommendation,
                            "total_time_ms": aggregated.total_time_ms,
                        }),
                    ));
                    results.insert(item_id, aggregated);
                }
                Ok((item_id, Err(e))) => {
                    // The provider set was validated up front, so this is
                    // unreachable in practice; keep the one-entry-per-item
                    // guarantee regardless
                    warn!(item = %item_id, "validation returned an error: {}", e);
                    results.insert(item_id, ConsensusEngine::aggregate(vec![]));
                }
                Err(e) => {
                    warn!("batch task join error: {}", e);
                }
            }
        }

        let batch = BatchResult::new(results);
        self.logger.log(ReviewEvent::new(
            "batch_complete",
            serde_json::json!({
                "total": batch.summary.total,
                "passed": batch.summary.passed_count,
                "failed": batch.summary.failed_count,
                "average_score": batch.summary.average_score,
            }),
        ));

        Ok(batch)
    }
}
