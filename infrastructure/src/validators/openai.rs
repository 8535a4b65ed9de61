//! OpenAI GPT validator adapter

use super::{error_for_status, transport_error};
use crate::config::ProviderSettings;
use async_trait::async_trait;
use quizgate_application::{Validator, ValidatorError};
use quizgate_domain::{ProviderId, ReviewPromptTemplate};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Validator backed by the OpenAI Chat Completions API
pub struct OpenAiValidator {
    client: Client,
    api_key: String,
    model: String,
}

impl OpenAiValidator {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    pub fn from_settings(settings: &ProviderSettings) -> Self {
        let api_key = std::env::var(&settings.api_key_env).unwrap_or_default();
        Self::new(api_key, settings.model.clone())
    }
}

#[derive(Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    messages: Vec<OpenAiMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct OpenAiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct OpenAiResponse {
    #[serde(default)]
    choices: Vec<OpenAiChoice>,
}

#[derive(Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
}

#[derive(Deserialize)]
struct OpenAiResponseMessage {
    #[serde(default)]
    content: String,
}

#[async_trait]
impl Validator for OpenAiValidator {
    fn provider(&self) -> ProviderId {
        ProviderId::Gpt
    }

    async fn assess(&self, prompt: &str) -> Result<String, ValidatorError> {
        if self.api_key.is_empty() {
            return Err(ValidatorError::Auth("no API key configured".to_string()));
        }

        let request = OpenAiRequest {
            model: &self.model,
            messages: vec![
                OpenAiMessage {
                    role: "system",
                    content: ReviewPromptTemplate::system(),
                },
                OpenAiMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: 0.0,
        };

        debug!(model = %self.model, "calling OpenAI chat completions API");
        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, &body));
        }

        let api_response: OpenAiResponse = response
            .json()
            .await
            .map_err(|e| ValidatorError::InvalidResponse(e.to_string()))?;

        api_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| {
                ValidatorError::InvalidResponse("response contained no choices".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_identity() {
        let validator = OpenAiValidator::new("key", "gpt-4o-mini");
        assert_eq!(validator.provider(), ProviderId::Gpt);
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_any_request() {
        let validator = OpenAiValidator::new("", "gpt-4o-mini");
        let outcome = validator.assess("prompt").await;
        assert!(matches!(outcome, Err(ValidatorError::Auth(_))));
    }

    #[test]
    fn test_request_includes_system_and_user_roles() {
        let request = OpenAiRequest {
            model: "gpt-4o-mini",
            messages: vec![
                OpenAiMessage {
                    role: "system",
                    content: "sys",
                },
                OpenAiMessage {
                    role: "user",
                    content: "prompt",
                },
            ],
            temperature: 0.0,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
    }
}
