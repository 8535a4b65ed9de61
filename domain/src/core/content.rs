//! Content value objects - the artifact under review

use serde::{Deserialize, Serialize};

/// Difficulty label for a content item (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "low" | "basic" => Ok(Difficulty::Easy),
            "medium" | "normal" | "intermediate" => Ok(Difficulty::Medium),
            "hard" | "high" | "advanced" => Ok(Difficulty::Hard),
            other => Err(format!("Unknown difficulty: {}", other)),
        }
    }
}

/// A generated exam question with its answer and explanation (Entity)
///
/// Immutable once constructed; owned by the caller and read-only to the
/// engine. The optional subject/unit/grade metadata is only used to enrich
/// the prompt sent to validators.
///
/// # Example
///
/// ```
/// use quizgate_domain::core::content::{ContentItem, Difficulty};
///
/// let item = ContentItem::new("q-101", "What is 2 + 2?", "4", "Add the operands.")
///     .with_difficulty(Difficulty::Easy)
///     .with_options(vec!["3".into(), "4".into(), "5".into()])
///     .with_subject("arithmetic");
/// assert_eq!(item.id, "q-101");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Stable identifier for this item
    pub id: String,
    /// The question text
    pub question: String,
    /// The proposed answer
    pub answer: String,
    /// The proposed explanation / solution steps
    pub explanation: String,
    /// Multiple-choice options, if any
    #[serde(default)]
    pub options: Vec<String>,
    /// Difficulty label
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Subject metadata (prompt enrichment only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Curriculum unit metadata (prompt enrichment only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Grade level metadata (prompt enrichment only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
}

impl ContentItem {
    /// Create a new content item
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
            explanation: explanation.into(),
            options: Vec::new(),
            difficulty: Difficulty::default(),
            subject: None,
            unit: None,
            grade: None,
        }
    }

    /// Set the multiple-choice option list
    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }

    /// Set the difficulty label
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the subject metadata
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the curriculum unit metadata
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Set the grade level metadata
    pub fn with_grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = Some(grade.into());
        self
    }

    /// Check if this item has a multiple-choice option list
    pub fn is_multiple_choice(&self) -> bool {
        !self.options.is_empty()
    }
}
