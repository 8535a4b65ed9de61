//! Infrastructure layer for quizgate
//!
//! This crate contains the external adapters: one HTTP validator per
//! vendor, the deterministic mock validator, configuration loading, and
//! logging. Everything here implements a port defined by the application
//! layer; nothing above this crate knows a vendor SDK exists.

pub mod config;
pub mod logging;
pub mod validators;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, ProviderSettings};
pub use logging::{JsonlReviewLogger, init_tracing};
pub use validators::{
    AnthropicValidator, GeminiValidator, MockValidator, OpenAiValidator, build_validators,
};
