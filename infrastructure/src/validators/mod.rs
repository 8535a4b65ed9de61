//! Validator adapters - one per vendor, plus the deterministic mock
//!
//! Each adapter is a thin prompt-in/text-out HTTP client implementing the
//! `Validator` port. The consensus engine never sees vendor specifics;
//! swapping or faking a provider is a construction-time decision.

mod anthropic;
mod gemini;
mod mock;
mod openai;

pub use anthropic::AnthropicValidator;
pub use gemini::GeminiValidator;
pub use mock::MockValidator;
pub use openai::OpenAiValidator;

use crate::config::FileConfig;
use quizgate_application::{Validator, ValidatorError};
use quizgate_domain::ProviderId;
use reqwest::StatusCode;
use std::sync::Arc;

/// Map a reqwest transport failure onto the validator error taxonomy
pub(crate) fn transport_error(e: reqwest::Error) -> ValidatorError {
    if e.is_timeout() {
        ValidatorError::Timeout
    } else {
        ValidatorError::Connection(e.to_string())
    }
}

/// Map an HTTP error status onto the validator error taxonomy
pub(crate) fn error_for_status(status: StatusCode, body: &str) -> ValidatorError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            ValidatorError::Auth(format!("HTTP {}", status.as_u16()))
        }
        StatusCode::TOO_MANY_REQUESTS => ValidatorError::RateLimited,
        _ => {
            let detail = truncate(body, 200);
            ValidatorError::Api(format!("HTTP {}: {}", status.as_u16(), detail))
        }
    }
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Build the validator set described by the configuration.
///
/// With `providers.mock` set, every provider resolves to a
/// [`MockValidator`]; otherwise each vendor adapter is constructed from
/// its settings, resolving API keys from the named environment variables.
pub fn build_validators(config: &FileConfig) -> Vec<Arc<dyn Validator>> {
    if config.providers.mock {
        return ProviderId::all()
            .into_iter()
            .map(|provider| Arc::new(MockValidator::new(provider)) as Arc<dyn Validator>)
            .collect();
    }

    vec![
        Arc::new(AnthropicValidator::from_settings(&config.providers.claude))
            as Arc<dyn Validator>,
        Arc::new(GeminiValidator::from_settings(&config.providers.gemini)),
        Arc::new(OpenAiValidator::from_settings(&config.providers.openai)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_for_status_taxonomy() {
        assert!(matches!(
            error_for_status(StatusCode::UNAUTHORIZED, ""),
            ValidatorError::Auth(_)
        ));
        assert!(matches!(
            error_for_status(StatusCode::FORBIDDEN, ""),
            ValidatorError::Auth(_)
        ));
        assert!(matches!(
            error_for_status(StatusCode::TOO_MANY_REQUESTS, ""),
            ValidatorError::RateLimited
        ));
        assert!(matches!(
            error_for_status(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            ValidatorError::Api(_)
        ));
    }

    #[test]
    fn test_api_error_truncates_body() {
        let body = "x".repeat(500);
        let error = error_for_status(StatusCode::BAD_REQUEST, &body);
        let message = error.to_string();
        assert!(message.len() < 300);
    }

    #[test]
    fn test_build_validators_covers_all_providers() {
        let config = FileConfig::default();
        let validators = build_validators(&config);

        let mut providers: Vec<ProviderId> = validators.iter().map(|v| v.provider()).collect();
        providers.sort_by_key(|p| p.as_str());
        let mut expected: Vec<ProviderId> = ProviderId::all().to_vec();
        expected.sort_by_key(|p| p.as_str());
        assert_eq!(providers, expected);
    }

    #[test]
    fn test_mock_mode_builds_mocks() {
        let mut config = FileConfig::default();
        config.providers.mock = true;
        let validators = build_validators(&config);
        assert_eq!(validators.len(), 3);
    }
}
