//! AI provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// AI provider configuration
///
/// OpenAI serves the standard, lightweight and router models. DeepSeek serves
/// the cost-optimized tier when its key is set.
#[derive(Clone, Deserialize)]
pub struct AiConfig {
    /// OpenAI API key
    pub openai_api_key: Option<String>,

    /// DeepSeek API key
    pub deepseek_api_key: Option<String>,

    #[serde(default = "default_openai_base_url")]
    pub openai_base_url: String,

    #[serde(default = "default_deepseek_base_url")]
    pub deepseek_base_url: String,

    /// Model for the standard tier
    #[serde(default = "default_openai_model")]
    pub standard_model: String,

    /// Model for the lightweight tier, extraction fallbacks and summaries
    #[serde(default = "default_openai_model")]
    pub lightweight_model: String,

    /// Model for domain classification
    #[serde(default = "default_openai_model")]
    pub router_model: String,

    /// Model for the cost-optimized tier
    #[serde(default = "default_cost_optimized_model")]
    pub cost_optimized_model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiConfig")
            .field("openai_api_key", &self.has_openai().then_some("[REDACTED]"))
            .field("deepseek_api_key", &self.has_deepseek().then_some("[REDACTED]"))
            .field("openai_base_url", &self.openai_base_url)
            .field("deepseek_base_url", &self.deepseek_base_url)
            .field("standard_model", &self.standard_model)
            .field("lightweight_model", &self.lightweight_model)
            .field("router_model", &self.router_model)
            .field("cost_optimized_model", &self.cost_optimized_model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if OpenAI is configured
    pub fn has_openai(&self) -> bool {
        self.openai_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Check if DeepSeek is configured
    pub fn has_deepseek(&self) -> bool {
        self.deepseek_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_openai() {
            return Err(ValidationError::MissingRequired("OPENAI_API_KEY"));
        }
        for (name, url) in [
            ("openai", &self.openai_base_url),
            ("deepseek", &self.deepseek_base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidBaseUrl(name));
            }
        }
        for (name, model) in [
            ("standard", &self.standard_model),
            ("lightweight", &self.lightweight_model),
            ("router", &self.router_model),
            ("cost_optimized", &self.cost_optimized_model),
        ] {
            if model.trim().is_empty() {
                return Err(ValidationError::EmptyModel(name));
            }
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            deepseek_api_key: None,
            openai_base_url: default_openai_base_url(),
            deepseek_base_url: default_deepseek_base_url(),
            standard_model: default_openai_model(),
            lightweight_model: default_openai_model(),
            router_model: default_openai_model(),
            cost_optimized_model: default_cost_optimized_model(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_deepseek_base_url() -> String {
    "https://api.deepseek.com/v1".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_cost_optimized_model() -> String {
    "deepseek-chat".to_string()
}

fn default_timeout() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_openai() -> AiConfig {
        AiConfig {
            openai_api_key: Some("sk-xxx".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.standard_model, "gpt-4o-mini");
        assert_eq!(config.cost_optimized_model, "deepseek-chat");
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_validation_requires_openai_key() {
        assert!(AiConfig::default().validate().is_err());
        assert!(with_openai().validate().is_ok());
    }

    #[test]
    fn test_deepseek_is_optional() {
        let config = with_openai();
        assert!(!config.has_deepseek());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_base_url() {
        let config = AiConfig {
            deepseek_base_url: "api.deepseek.com".to_string(),
            ..with_openai()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidBaseUrl("deepseek"))
        ));
    }

    #[test]
    fn test_validation_rejects_empty_model() {
        let config = AiConfig {
            router_model: " ".to_string(),
            ..with_openai()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_keys() {
        let output = format!("{:?}", with_openai());
        assert!(!output.contains("sk-xxx"));
        assert!(output.contains("[REDACTED]"));
    }
}
