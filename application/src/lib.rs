//! Application layer for quizgate
//!
//! This crate contains the validation use cases and the port definitions
//! their collaborators implement. It depends only on the domain layer.
//!
//! The layering mirrors the failure-handling policy: the
//! [`ValidatorRunner`](use_cases::run_validator::ValidatorRunner) absorbs
//! every per-provider failure into sentinel data, the orchestrator fans
//! out and reassembles, and only caller misuse (an empty or unconfigured
//! provider set) is ever returned as an error.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    progress::{NoProgress, ReviewProgress},
    review_logger::{NoReviewLogger, ReviewEvent, ReviewLogger},
    validator::{Validator, ValidatorError},
};
pub use use_cases::run_validator::ValidatorRunner;
pub use use_cases::validate_batch::{ValidateBatchInput, ValidateBatchUseCase};
pub use use_cases::validate_content::{
    ValidateContentInput, ValidateContentUseCase, ValidateError,
};
