//! AI provider configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::ai::{DEFAULT_MISTRAL_BASE_URL, DEFAULT_MISTRAL_MODEL};

/// AI provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Mistral API key; without it the service runs on the keyword fallback
    pub mistral_api_key: Option<SecretString>,

    /// Chat model
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Sampling temperature for quiz analysis
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens for quiz analysis
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Retries on transient failure
    #[serde(default)]
    pub max_retries: u32,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if a non-blank Mistral key is configured
    pub fn has_mistral(&self) -> bool {
        self.mistral_api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    /// Validate AI configuration
    ///
    /// A missing key is not an error.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=1.5).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature(self.temperature));
        }
        if self.max_tokens == 0 {
            return Err(ValidationError::InvalidMaxTokens);
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            mistral_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout(),
            max_retries: 0,
        }
    }
}

fn default_model() -> String {
    DEFAULT_MISTRAL_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_MISTRAL_BASE_URL.to_string()
}

fn default_temperature() -> f32 {
    0.9
}

fn default_max_tokens() -> u32 {
    1500
}

fn default_timeout() -> u64 {
    120
}
