//! Progress notification port
//!
//! Defines the interface for reporting progress during validation runs.

use quizgate_domain::ProviderId;

/// Callback for progress updates during a validation fan-out
///
/// Implementations live outside this crate and can display progress in
/// whatever way suits the caller (console, web UI, job status table).
pub trait ReviewProgress: Send + Sync {
    /// Called when validation of one content item starts
    fn on_validation_start(&self, item_id: &str, total_providers: usize);

    /// Called when one provider settles (successfully or not)
    fn on_provider_complete(&self, item_id: &str, provider: ProviderId, success: bool);

    /// Called when all providers for one content item have settled
    fn on_validation_complete(&self, item_id: &str);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ReviewProgress for NoProgress {
    fn on_validation_start(&self, _item_id: &str, _total_providers: usize) {}
    fn on_provider_complete(&self, _item_id: &str, _provider: ProviderId, _success: bool) {}
    fn on_validation_complete(&self, _item_id: &str) {}
}
