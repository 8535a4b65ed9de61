//! Recommendation derived from a consensus verdict

use serde::{Deserialize, Serialize};

/// What the caller should do with the reviewed content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    /// The content is good as-is
    Approve,
    /// The content is usable after addressing the agreed suggestions
    Revise,
    /// The content should not be used
    Reject,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Approve => "approve",
            Recommendation::Revise => "revise",
            Recommendation::Reject => "reject",
        }
    }

    pub fn is_approve(&self) -> bool {
        matches!(self, Recommendation::Approve)
    }

    pub fn is_reject(&self) -> bool {
        matches!(self, Recommendation::Reject)
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Recommendation::Approve.to_string(), "approve");
        assert_eq!(Recommendation::Revise.to_string(), "revise");
        assert_eq!(Recommendation::Reject.to_string(), "reject");
    }

    #[test]
    fn test_predicates() {
        assert!(Recommendation::Approve.is_approve());
        assert!(Recommendation::Reject.is_reject());
        assert!(!Recommendation::Revise.is_approve());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Recommendation::Revise).unwrap(),
            "\"revise\""
        );
    }
}
