//! Provider value object identifying a validator service

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available validator providers (Value Object)
///
/// This is a closed set: every provider the engine can dispatch to has a
/// variant here, and an adapter implementing the `Validator` port. An
/// unrecognized identifier is a configuration error, not a runtime
/// condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    Claude,
    Gemini,
    Gpt,
}

impl ProviderId {
    /// Get the string identifier for this provider
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Claude => "claude",
            ProviderId::Gemini => "gemini",
            ProviderId::Gpt => "gpt",
        }
    }

    /// All known providers, in the default dispatch order
    pub fn all() -> [ProviderId; 3] {
        [ProviderId::Claude, ProviderId::Gemini, ProviderId::Gpt]
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProviderId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "claude" | "anthropic" => Ok(ProviderId::Claude),
            "gemini" | "google" => Ok(ProviderId::Gemini),
            "gpt" | "openai" => Ok(ProviderId::Gpt),
            other => Err(DomainError::UnknownProvider(other.to_string())),
        }
    }
}

impl Serialize for ProviderId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProviderId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
