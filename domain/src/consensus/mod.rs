//! Consensus domain - reconciling independent provider assessments
//!
//! The engine turns N per-provider results into one verdict. The rules:
//!
//! - score: rounded mean over non-failed results
//! - validity: strict majority of non-failed results
//! - agreed text: normalized near-duplicate clustering with a
//!   cross-provider agreement threshold
//! - recommendation: score bands gated by the severity of agreed issues

pub mod batch;
pub mod engine;
pub mod recommendation;

pub use batch::{BatchResult, BatchSummary};
pub use engine::{AggregatedResult, ConsensusEngine, REJECT_BELOW, REVISE_BELOW};
pub use recommendation::Recommendation;
