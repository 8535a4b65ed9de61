//! Batch result types and summary statistics

use super::engine::AggregatedResult;
use crate::core::provider::ProviderId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Summary statistics over a whole validation batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Number of content items validated
    pub total: usize,
    /// Items whose consensus verdict was valid
    pub passed_count: usize,
    /// Items whose consensus verdict was not valid
    pub failed_count: usize,
    /// Rounded mean of the per-item average scores
    pub average_score: u8,
    /// Mean accuracy per provider over its non-failed results; 0 for a
    /// provider with no non-failed result in the whole batch
    pub per_provider_average_score: HashMap<ProviderId, u8>,
}

impl BatchSummary {
    /// Compute summary statistics from the per-item results
    pub fn from_results(results: &HashMap<String, AggregatedResult>) -> Self {
        let total = results.len();
        let passed_count = results.values().filter(|r| r.consensus_valid).count();

        let average_score = if total == 0 {
            0
        } else {
            let sum: u32 = results.values().map(|r| u32::from(r.average_score)).sum();
            (f64::from(sum) / total as f64).round() as u8
        };

        // Per-provider tallies over every dispatched call in the batch.
        // Attempted-but-always-failed providers stay in the map at 0.
        let mut tallies: HashMap<ProviderId, (u32, u32)> = HashMap::new();
        for aggregated in results.values() {
            for provider_result in &aggregated.results {
                let entry = tallies.entry(provider_result.provider).or_insert((0, 0));
                if !provider_result.failed {
                    entry.0 += u32::from(provider_result.accuracy);
                    entry.1 += 1;
                }
            }
        }
        let per_provider_average_score = tallies
            .into_iter()
            .map(|(provider, (sum, count))| {
                let score = if count == 0 {
                    0
                } else {
                    (f64::from(sum) / f64::from(count)).round() as u8
                };
                (provider, score)
            })
            .collect();

        Self {
            total,
            passed_count,
            failed_count: total - passed_count,
            average_score,
            per_provider_average_score,
        }
    }
}

/// Result of validating a collection of content items
///
/// Keyed by item id; callers needing an ordered listing should re-sort by
/// their original item order, not by map iteration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResult {
    /// Per-item consensus verdicts, keyed by content item id
    pub results: HashMap<String, AggregatedResult>,
    /// Batch-wide statistics
    pub summary: BatchSummary,
}

impl BatchResult {
    /// Build a batch result, computing the summary
    pub fn new(results: HashMap<String, AggregatedResult>) -> Self {
        let summary = BatchSummary::from_results(&results);
        Self { results, summary }
    }

    /// Look up one item's verdict
    pub fn get(&self, item_id: &str) -> Option<&AggregatedResult> {
        self.results.get(item_id)
    }

    /// Number of items in the batch
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True when the batch contained no items
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
