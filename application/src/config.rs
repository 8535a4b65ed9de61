//! Application behavior configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default per-provider timeout in seconds
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 20;

/// Tunable behavior for the validation use cases
///
/// File and environment wiring lives in the infrastructure layer; this is
/// the plain value consumed by the use cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Per-provider timeout in seconds; a provider exceeding it settles
    /// as a sentinel failure without affecting its siblings
    pub provider_timeout_secs: u64,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            provider_timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
        }
    }
}

impl BehaviorConfig {
    /// The per-provider timeout as a `Duration`
    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout() {
        let config = BehaviorConfig::default();
        assert_eq!(config.provider_timeout(), Duration::from_secs(20));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: BehaviorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, BehaviorConfig::default());
    }
}
