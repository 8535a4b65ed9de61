//! Anthropic Claude validator adapter

use super::{error_for_status, transport_error};
use crate::config::ProviderSettings;
use async_trait::async_trait;
use quizgate_application::{Validator, ValidatorError};
use quizgate_domain::{ProviderId, ReviewPromptTemplate};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 2048;

/// Validator backed by the Claude Messages API
pub struct AnthropicValidator {
    client: Client,
    api_key: String,
    model: String,
}

impl AnthropicValidator {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Build from config, resolving the API key from the named
    /// environment variable (empty if unset; checked at call time)
    pub fn from_settings(settings: &ProviderSettings) -> Self {
        let api_key = std::env::var(&settings.api_key_env).unwrap_or_default();
        Self::new(api_key, settings.model.clone())
    }
}

#[derive(Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct AnthropicResponse {
    content: Vec<AnthropicContent>,
}

#[derive(Deserialize)]
struct AnthropicContent {
    #[serde(default)]
    text: String,
}

#[async_trait]
impl Validator for AnthropicValidator {
    fn provider(&self) -> ProviderId {
        ProviderId::Claude
    }

    async fn assess(&self, prompt: &str) -> Result<String, ValidatorError> {
        if self.api_key.is_empty() {
            return Err(ValidatorError::Auth("no API key configured".to_string()));
        }

        let request = AnthropicRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            system: ReviewPromptTemplate::system(),
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
            temperature: 0.0,
        };

        debug!(model = %self.model, "calling Anthropic messages API");
        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, &body));
        }

        let api_response: AnthropicResponse = response
            .json()
            .await
            .map_err(|e| ValidatorError::InvalidResponse(e.to_string()))?;

        Ok(api_response
            .content
            .into_iter()
            .map(|c| c.text)
            .collect::<Vec<_>>()
            .join(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_identity() {
        let validator = AnthropicValidator::new("key", "claude-sonnet-4-5");
        assert_eq!(validator.provider(), ProviderId::Claude);
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_any_request() {
        let validator = AnthropicValidator::new("", "claude-sonnet-4-5");
        let outcome = validator.assess("prompt").await;
        assert!(matches!(outcome, Err(ValidatorError::Auth(_))));
    }

    #[test]
    fn test_request_serialization() {
        let request = AnthropicRequest {
            model: "claude-sonnet-4-5",
            max_tokens: MAX_TOKENS,
            system: "sys",
            messages: vec![AnthropicMessage {
                role: "user",
                content: "hello",
            }],
            temperature: 0.0,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "claude-sonnet-4-5");
        assert_eq!(json["messages"][0]["role"], "user");
    }
}
