//! Prompt templates for content review

use crate::core::content::ContentItem;
use crate::review::criteria::ValidationCriteria;

/// Templates for building the review prompt sent to validators
///
/// Deterministic string construction: the same item and criteria always
/// produce the same prompt, so provider responses are comparable across
/// runs.
pub struct ReviewPromptTemplate;

impl ReviewPromptTemplate {
    /// System prompt establishing the reviewer persona and output contract
    pub fn system() -> &'static str {
        r#"You are a meticulous reviewer of exam content for an academy.
You will receive one generated question with its proposed answer and explanation.
Judge it strictly and independently. Do not assume other reviewers exist.

Respond with a single JSON object and nothing else. Use exactly these keys:
{
  "isValid": boolean,
  "accuracy": number (0-100),
  "difficultyMatch": boolean,
  "difficultyComment": string (optional),
  "issues": [{"severity": "error" | "warning" | "suggestion", "message": string}],
  "suggestions": [string],
  "correctedAnswer": string (optional),
  "correctedExplanation": string (optional)
}

Report an "error" issue only for defects that invalidate the content."#
    }

    /// User prompt embedding the content item and evaluation criteria
    pub fn review_prompt(content: &ContentItem, criteria: &ValidationCriteria) -> String {
        let mut prompt = format!(
            r#"Review the following exam content.

Question:
{}

Proposed answer:
{}

Proposed explanation:
{}
"#,
            content.question, content.answer, content.explanation
        );

        if !content.options.is_empty() {
            prompt.push_str("\nOptions:\n");
            for (i, option) in content.options.iter().enumerate() {
                prompt.push_str(&format!("{}. {}\n", i + 1, option));
            }
        }

        prompt.push_str(&format!("\nStated difficulty: {}\n", content.difficulty));

        if let Some(subject) = &content.subject {
            prompt.push_str(&format!("Subject: {}\n", subject));
        }
        if let Some(unit) = &content.unit {
            prompt.push_str(&format!("Unit: {}\n", unit));
        }
        if let Some(grade) = &content.grade {
            prompt.push_str(&format!("Grade: {}\n", grade));
        }

        prompt.push_str("\nEvaluate against these criteria:\n");
        for dimension in criteria.dimensions() {
            prompt.push_str(&format!("- {}\n", dimension));
        }

        prompt.push_str("\nRespond with the JSON object only.");
        prompt
    }
}
