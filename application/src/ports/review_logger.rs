//! Port for structured review audit logging.
//!
//! Defines the [`ReviewLogger`] trait for recording validation outcomes
//! (per-item verdicts, batch summaries) to a machine-readable log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures an audit trail of
//! what was reviewed and what the verdict was.

use serde_json::Value;

/// A structured review event for logging.
pub struct ReviewEvent {
    /// Event type identifier (e.g., "item_validated", "batch_complete").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ReviewEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging review events to a structured log.
///
/// The `log` method is intentionally synchronous and non-fallible: audit
/// logging must never disrupt the validation flow, so failures are
/// silently dropped by implementations.
pub trait ReviewLogger: Send + Sync {
    fn log(&self, event: ReviewEvent);
}

/// No-op implementation for tests and when audit logging is disabled.
pub struct NoReviewLogger;

impl ReviewLogger for NoReviewLogger {
    fn log(&self, _event: ReviewEvent) {}
}
