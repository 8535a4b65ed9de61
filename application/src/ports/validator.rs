//! Validator port
//!
//! Defines the interface every validator provider must implement. The
//! engine depends only on this trait; vendor adapters live in the
//! infrastructure layer and are injected into the use cases.

use async_trait::async_trait;
use quizgate_domain::ProviderId;
use thiserror::Error;

/// Errors a validator implementation can surface
///
/// These never cross the engine boundary: the runner converts every one
/// of them into a sentinel `ProviderResult` whose `failure_reason` is the
/// error's display form.
#[derive(Error, Debug)]
pub enum ValidatorError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("rate limited")]
    RateLimited,

    #[error("request timed out")]
    Timeout,

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("{0}")]
    Other(String),
}

/// An opaque external capability that judges content
///
/// Implementations must be stateless with respect to calls: `assess` may
/// be invoked concurrently without external synchronization. If a vendor
/// client needs rate limiting, it is handled inside the implementation
/// and is invisible to the orchestrator.
#[async_trait]
pub trait Validator: Send + Sync {
    /// Which provider this implementation represents
    fn provider(&self) -> ProviderId;

    /// Judge the content described by the prompt, returning the raw
    /// (possibly unstructured) response text
    async fn assess(&self, prompt: &str) -> Result<String, ValidatorError>;
}
