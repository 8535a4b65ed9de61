//! Consensus aggregation across provider results
//!
//! Reconciles the per-provider assessments of one content item into a
//! single verdict: an averaged score, the majority validity decision, the
//! cross-provider agreed issue/suggestion lists, and a recommendation.

use super::recommendation::Recommendation;
use crate::review::issue::Severity;
use crate::review::result::ProviderResult;
use serde::{Deserialize, Serialize};

/// Scores below this always reject
pub const REJECT_BELOW: u8 = 60;

/// Scores below this (but at least [`REJECT_BELOW`]) ask for revision
pub const REVISE_BELOW: u8 = 80;

/// The reconciled verdict for one content item
///
/// Derived purely from the `ProviderResult` list; stateless and
/// recomputable. `total_time_ms` is the wall-clock span of the whole
/// fan-out (not the sum of the concurrent provider times) and is stamped
/// by the orchestrator via [`AggregatedResult::with_total_time`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatedResult {
    /// All per-provider results, in dispatch order
    pub results: Vec<ProviderResult>,
    /// Whether a majority of non-failed providers judged the content valid
    pub consensus_valid: bool,
    /// Rounded mean accuracy over non-failed providers (0 if none)
    pub average_score: u8,
    /// Suggestions that met the agreement threshold (normalized, deduplicated)
    pub agreed_suggestions: Vec<String>,
    /// Issue messages that met the agreement threshold (normalized, deduplicated)
    pub agreed_issues: Vec<String>,
    /// What the caller should do with the content
    pub recommendation: Recommendation,
    /// Wall-clock span of the validation fan-out in milliseconds
    pub total_time_ms: u64,
}

impl AggregatedResult {
    /// Stamp the fan-out wall-clock duration
    pub fn with_total_time(mut self, ms: u64) -> Self {
        self.total_time_ms = ms;
        self
    }

    /// Iterate over the non-failed provider results
    pub fn valid_results(&self) -> impl Iterator<Item = &ProviderResult> {
        self.results.iter().filter(|r| !r.failed)
    }

    /// Iterate over the failed provider results
    pub fn failed_results(&self) -> impl Iterator<Item = &ProviderResult> {
        self.results.iter().filter(|r| r.failed)
    }

    /// True when every dispatched provider failed
    ///
    /// Callers should distinguish this from a genuine rejection: it means
    /// the validation infrastructure was unavailable, not that the content
    /// is bad.
    pub fn is_degenerate(&self) -> bool {
        !self.results.is_empty() && self.results.iter().all(|r| r.failed)
    }
}

/// Aggregation of provider results into a consensus verdict
pub struct ConsensusEngine;

impl ConsensusEngine {
    /// Reconcile the per-provider results of one validation call.
    ///
    /// Defined for any input, including the empty list (score 0, not
    /// valid, reject) and the all-failed degenerate case.
    pub fn aggregate(results: Vec<ProviderResult>) -> AggregatedResult {
        let dispatched = results.len();
        let valid: Vec<&ProviderResult> = results.iter().filter(|r| !r.failed).collect();

        let average_score = if valid.is_empty() {
            0
        } else {
            let sum: u32 = valid.iter().map(|r| u32::from(r.accuracy)).sum();
            (f64::from(sum) / valid.len() as f64).round() as u8
        };

        // Majority rule over non-failed results: strictly more than half
        let approvals = valid.iter().filter(|r| r.is_valid).count();
        let consensus_valid = !valid.is_empty() && approvals * 2 > valid.len();

        // Failed providers still contribute text to clustering — a surfaced
        // error message is informative even when the assessment is not.
        let threshold = agreement_threshold(dispatched);
        let agreed_suggestions = cluster(
            results.iter().flat_map(|r| r.suggestions.iter().map(String::as_str)),
            threshold,
        );
        let agreed_issues = cluster(
            results
                .iter()
                .flat_map(|r| r.issues.iter().map(|i| i.message.as_str())),
            threshold,
        );

        let recommendation =
            derive_recommendation(average_score, &results, &agreed_issues);

        AggregatedResult {
            results,
            consensus_valid,
            average_score,
            agreed_suggestions,
            agreed_issues,
            recommendation,
            total_time_ms: 0,
        }
    }
}

/// Minimum occurrence count for a normalized item to count as "agreed".
///
/// A single configured provider agrees with itself; with several
/// providers, cross-provider corroboration is required.
fn agreement_threshold(dispatched: usize) -> usize {
    if dispatched == 1 { 1 } else { 2 }
}

/// Normalize free text for near-duplicate clustering
fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Count normalized occurrences, keeping items that reach the threshold.
///
/// Output preserves first-seen order and contains each surviving item once.
fn cluster<'a>(items: impl Iterator<Item = &'a str>, threshold: usize) -> Vec<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for item in items {
        let normalized = normalize(item);
        if normalized.is_empty() {
            continue;
        }
        match counts.iter_mut().find(|(text, _)| *text == normalized) {
            Some(entry) => entry.1 += 1,
            None => counts.push((normalized, 1)),
        }
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count >= threshold)
        .map(|(text, _)| text)
        .collect()
}

/// True when any agreed issue carries the given severity
fn agreed_issue_has_severity(
    results: &[ProviderResult],
    agreed_issues: &[String],
    severity: Severity,
) -> bool {
    results
        .iter()
        .flat_map(|r| r.issues.iter())
        .filter(|issue| issue.severity == severity)
        .any(|issue| agreed_issues.contains(&normalize(&issue.message)))
}

/// Derive the recommendation, rules evaluated in order
fn derive_recommendation(
    average_score: u8,
    results: &[ProviderResult],
    agreed_issues: &[String],
) -> Recommendation {
    if average_score < REJECT_BELOW
        || agreed_issue_has_severity(results, agreed_issues, Severity::Error)
    {
        Recommendation::Reject
    } else if average_score < REVISE_BELOW
        || agreed_issue_has_severity(results, agreed_issues, Severity::Warning)
    {
        Recommendation::Revise
    } else {
        Recommendation::Approve
    }
}
