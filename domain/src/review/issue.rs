//! Issue types reported by validators

use serde::{Deserialize, Serialize};

/// Severity of an issue found in a content item
///
/// - `Error`: a defect the provider believes invalidates the content
/// - `Warning`: a quality concern
/// - `Suggestion`: an optional improvement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Suggestion,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Suggestion => "suggestion",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" | "critical" => Ok(Severity::Error),
            "warning" | "warn" => Ok(Severity::Warning),
            "suggestion" | "info" => Ok(Severity::Suggestion),
            other => Err(format!("Unknown severity: {}", other)),
        }
    }
}

/// A single issue reported by one validator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub message: String,
}

impl Issue {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    /// Create an error-severity issue
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning-severity issue
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Create a suggestion-severity issue
    pub fn suggestion(message: impl Into<String>) -> Self {
        Self::new(Severity::Suggestion, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_parse() {
        assert_eq!("error".parse::<Severity>().ok(), Some(Severity::Error));
        assert_eq!("WARN".parse::<Severity>().ok(), Some(Severity::Warning));
        assert_eq!("info".parse::<Severity>().ok(), Some(Severity::Suggestion));
        assert!("fatal".parse::<Severity>().is_err());
    }

    #[test]
    fn test_issue_constructors() {
        let issue = Issue::error("answer does not solve the question");
        assert_eq!(issue.severity, Severity::Error);

        let issue = Issue::suggestion("add a worked example");
        assert_eq!(issue.severity, Severity::Suggestion);
    }

    #[test]
    fn test_severity_serde_lowercase() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }
}
