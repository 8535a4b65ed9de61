//! Google Gemini validator adapter

use super::{error_for_status, transport_error};
use crate::config::ProviderSettings;
use async_trait::async_trait;
use quizgate_application::{Validator, ValidatorError};
use quizgate_domain::{ProviderId, ReviewPromptTemplate};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Validator backed by the Gemini generateContent API
pub struct GeminiValidator {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiValidator {
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

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", GEMINI_API_BASE, self.model)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    system_instruction: GeminiContent<'a>,
    contents: Vec<GeminiContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiResponseContent,
}

#[derive(Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Deserialize)]
struct GeminiResponsePart {
    #[serde(default)]
    text: String,
}

#[async_trait]
impl Validator for GeminiValidator {
    fn provider(&self) -> ProviderId {
        ProviderId::Gemini
    }

    async fn assess(&self, prompt: &str) -> Result<String, ValidatorError> {
        if self.api_key.is_empty() {
            return Err(ValidatorError::Auth("no API key configured".to_string()));
        }

        let request = GeminiRequest {
            system_instruction: GeminiContent {
                parts: vec![GeminiPart {
                    text: ReviewPromptTemplate::system(),
                }],
            },
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
            generation_config: GenerationConfig { temperature: 0.0 },
        };

        debug!(model = %self.model, "calling Gemini generateContent API");
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, &body));
        }

        let api_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| ValidatorError::InvalidResponse(e.to_string()))?;

        let text = api_response
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(ValidatorError::InvalidResponse(
                "response contained no candidates".to_string(),
            ));
        }
        Ok(text)
    }
}
