//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// These represent caller misuse (empty provider sets, unknown identifiers)
/// and are raised synchronously. Per-provider runtime failures are never
/// errors at this level: they are absorbed into sentinel
/// [`ProviderResult`](crate::review::ProviderResult)s.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("No providers specified for validation")]
    NoProviders,

    #[error("Unknown provider: {0}")]
    UnknownProvider(String),
}
