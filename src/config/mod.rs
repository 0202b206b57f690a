//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `VIBE_QUIZ_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use vibe_quiz::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod ai;
mod error;
mod quiz;
mod server;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use quiz::QuizConfig;
pub use server::{Environment, ServerConfig};

use secrecy::SecretString;
use serde::Deserialize;

use crate::application::handlers::analysis::AnalysisSettings;

/// Unprefixed variable consulted when `VIBE_QUIZ__AI__MISTRAL_API_KEY` is unset.
pub const MISTRAL_API_KEY_VAR: &str = "MISTRAL_API_KEY";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// service in keyword-fallback mode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// AI provider configuration (Mistral)
    #[serde(default)]
    pub ai: AiConfig,

    /// Quiz behaviour (timer)
    #[serde(default)]
    pub quiz: QuizConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `VIBE_QUIZ` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Falls back to `MISTRAL_API_KEY` for the API key
    ///
    /// # Environment Variable Format
    ///
    /// - `VIBE_QUIZ__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `VIBE_QUIZ__AI__MISTRAL_API_KEY=...` -> `ai.mistral_api_key = ...`
    /// - `VIBE_QUIZ__QUIZ__TIMER_SECS=45` -> `quiz.timer_secs = 45`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut config: AppConfig = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("VIBE_QUIZ")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        if config.ai.mistral_api_key.is_none() {
            config.ai.mistral_api_key = std::env::var(MISTRAL_API_KEY_VAR)
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::new);
        }

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.quiz.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }

    /// Settings for the analyzer.
    ///
    /// The provider deadline is capped at four fifths of the request
    /// timeout so the keyword fallback is still served within the request.
    pub fn analysis_settings(&self) -> AnalysisSettings {
        let budget = self.server.request_timeout() * 4 / 5;
        AnalysisSettings {
            temperature: self.ai.temperature,
            max_tokens: self.ai.max_tokens,
            deadline: budget.min(self.ai.timeout()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "VIBE_QUIZ__SERVER__PORT",
        "VIBE_QUIZ__SERVER__ENVIRONMENT",
        "VIBE_QUIZ__AI__MISTRAL_API_KEY",
        "VIBE_QUIZ__AI__TEMPERATURE",
        "VIBE_QUIZ__QUIZ__TIMER_SECS",
        MISTRAL_API_KEY_VAR,
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn load_with(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        clear_env();
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        clear_env();
        result
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[]).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.quiz.timer_secs, 30);
        assert!(!config.ai.has_mistral());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_nested_values_override_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[
            ("VIBE_QUIZ__SERVER__PORT", "3000"),
            ("VIBE_QUIZ__SERVER__ENVIRONMENT", "production"),
            ("VIBE_QUIZ__AI__TEMPERATURE", "0.5"),
            ("VIBE_QUIZ__QUIZ__TIMER_SECS", "45"),
        ])
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert!(config.is_production());
        assert!((config.ai.temperature - 0.5).abs() < f32::EPSILON);
        assert_eq!(config.quiz.timer_secs, 45);
    }

    #[test]
    fn test_plain_api_key_is_used_as_fallback() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[(MISTRAL_API_KEY_VAR, "plain-key")]).unwrap();

        assert!(config.ai.has_mistral());
        let key = config.ai.mistral_api_key.unwrap();
        assert_eq!(key.expose_secret(), "plain-key");
    }

    #[test]
    fn test_prefixed_api_key_wins() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[
            (MISTRAL_API_KEY_VAR, "plain-key"),
            ("VIBE_QUIZ__AI__MISTRAL_API_KEY", "prefixed-key"),
        ])
        .unwrap();

        let key = config.ai.mistral_api_key.unwrap();
        assert_eq!(key.expose_secret(), "prefixed-key");
    }

    #[test]
    fn test_validate_rejects_bad_timer() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("VIBE_QUIZ__QUIZ__TIMER_SECS", "0")]).unwrap();

        assert_eq!(config.validate(), Err(ValidationError::InvalidTimer));
    }

    #[test]
    fn default_analysis_settings_fit_request_timeout() {
        let config = AppConfig::default();

        let settings = config.analysis_settings();

        assert_eq!(settings, AnalysisSettings::default());
        assert!(settings.deadline < config.server.request_timeout());
    }

    #[test]
    fn analysis_deadline_follows_shorter_timeout() {
        let mut config = AppConfig::default();
        config.server.request_timeout_secs = 1;
        assert_eq!(
            config.analysis_settings().deadline,
            std::time::Duration::from_millis(800)
        );

        config.server.request_timeout_secs = 300;
        config.ai.timeout_secs = 10;
        assert_eq!(
            config.analysis_settings().deadline,
            std::time::Duration::from_secs(10)
        );
    }
}
