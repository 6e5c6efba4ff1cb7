//! Environment-driven configuration for the insight boundary.

use std::env;

const API_KEY_VAR: &str = "GEMINI_API_KEY";
const MODEL_VAR: &str = "FLEET_INSIGHT_MODEL";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Credentials and model selection for the hosted text-generation service.
///
/// A missing key is not an error at configuration time; the insight service
/// degrades to a placeholder message when asked to generate without one.
#[derive(Debug, Clone)]
pub struct InsightConfig {
    pub api_key: Option<String>,
    pub model: String,
}

impl InsightConfig {
    /// Reads `GEMINI_API_KEY` and `FLEET_INSIGHT_MODEL` from the environment.
    pub fn from_env() -> Self {
        Self {
            api_key: env::var(API_KEY_VAR).ok().filter(|key| !key.is_empty()),
            model: env::var(MODEL_VAR)
                .ok()
                .filter(|model| !model.is_empty())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }

    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_flash_model_without_key() {
        let config = InsightConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, "gemini-2.5-flash");
    }

    #[test]
    fn with_api_key_keeps_default_model() {
        let config = InsightConfig::with_api_key("test-key");
        assert_eq!(config.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.model, "gemini-2.5-flash");
    }
}
