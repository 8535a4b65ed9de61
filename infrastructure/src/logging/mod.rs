//! Logging infrastructure
//!
//! Two concerns, kept separate: `tracing` for human-readable diagnostics,
//! and [`JsonlReviewLogger`] for the machine-readable review audit trail
//! (implements the [`ReviewLogger`](quizgate_application::ReviewLogger)
//! port).

mod jsonl_logger;

pub use jsonl_logger::JsonlReviewLogger;

use tracing_subscriber::EnvFilter;

/// Initialize tracing diagnostics for the given verbosity level.
///
/// Call once at process startup; panics if a global subscriber is already
/// installed.
pub fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
