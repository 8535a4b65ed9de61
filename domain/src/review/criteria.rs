//! Validation criteria - the evaluation dimensions validators are asked to emphasize

use serde::{Deserialize, Serialize};

/// Built-in evaluation dimensions used when the caller provides none
pub const DEFAULT_DIMENSIONS: [&str; 4] = [
    "answer correctness",
    "explanation soundness",
    "difficulty fit",
    "completeness",
];

/// The evaluation dimensions for a validation run (Value Object)
///
/// Callers may supply their own free-text dimensions; an empty list falls
/// back to the built-in defaults so validators always receive concrete
/// review instructions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationCriteria {
    dimensions: Vec<String>,
}

impl ValidationCriteria {
    /// Create criteria from the given dimensions; falls back to the
    /// defaults when the list is empty
    pub fn new(dimensions: Vec<String>) -> Self {
        if dimensions.is_empty() {
            Self::default()
        } else {
            Self { dimensions }
        }
    }

    /// The evaluation dimensions, in order
    pub fn dimensions(&self) -> &[String] {
        &self.dimensions
    }
}

impl Default for ValidationCriteria {
    fn default() -> Self {
        Self {
            dimensions: DEFAULT_DIMENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let criteria = ValidationCriteria::default();
        assert_eq!(criteria.dimensions().len(), 4);
        assert_eq!(criteria.dimensions()[0], "answer correctness");
    }

    #[test]
    fn test_empty_falls_back_to_defaults() {
        let criteria = ValidationCriteria::new(vec![]);
        assert_eq!(criteria, ValidationCriteria::default());
    }

    #[test]
    fn test_custom_dimensions() {
        let criteria = ValidationCriteria::new(vec!["notation consistency".to_string()]);
        assert_eq!(criteria.dimensions(), ["notation consistency"]);
    }
}
