//! File-based configuration schema

use quizgate_application::BehaviorConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Per-provider connection settings
///
/// API keys are never stored in config files; the config names the
/// environment variable that holds the key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Model identifier sent to the vendor API
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
}

/// `[providers]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersSection {
    /// When set, every provider resolves to the deterministic mock
    /// validator; the orchestrator and consensus engine run unchanged
    pub mock: bool,
    pub claude: ProviderSettings,
    pub gemini: ProviderSettings,
    pub openai: ProviderSettings,
}

impl Default for ProvidersSection {
    fn default() -> Self {
        Self {
            mock: false,
            claude: ProviderSettings {
                model: "claude-sonnet-4-5".to_string(),
                api_key_env: "ANTHROPIC_API_KEY".to_string(),
            },
            gemini: ProviderSettings {
                model: "gemini-2.5-flash".to_string(),
                api_key_env: "GEMINI_API_KEY".to_string(),
            },
            openai: ProviderSettings {
                model: "gpt-4o-mini".to_string(),
                api_key_env: "OPENAI_API_KEY".to_string(),
            },
        }
    }
}

/// `[behavior]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorSection {
    /// Per-provider timeout in seconds
    pub timeout_secs: u64,
    /// Optional path for the JSONL review audit log
    pub review_log: Option<PathBuf>,
}

impl Default for BehaviorSection {
    fn default() -> Self {
        Self {
            timeout_secs: BehaviorConfig::default().provider_timeout_secs,
            review_log: None,
        }
    }
}

impl BehaviorSection {
    /// The use-case configuration this section describes
    pub fn to_config(&self) -> BehaviorConfig {
        BehaviorConfig {
            provider_timeout_secs: self.timeout_secs,
        }
    }
}

/// Complete file configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub behavior: BehaviorSection,
    pub providers: ProvidersSection,
}
