//! Review domain - per-provider assessment types and response parsing
//!
//! A validation run asks several providers to assess one content item.
//! Each provider call ends in exactly one [`ProviderResult`]: either a
//! fully-formed assessment or a failure sentinel. [`parsing`] converts
//! raw validator output into that shape.

pub mod criteria;
pub mod issue;
pub mod parsing;
pub mod result;

pub use criteria::{DEFAULT_DIMENSIONS, ValidationCriteria};
pub use issue::{Issue, Severity};
pub use parsing::parse_provider_response;
pub use result::ProviderResult;
