//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("AI temperature must be between 0.0 and 1.5, got {0}")]
    InvalidTemperature(f32),

    #[error("AI max_tokens must be greater than zero")]
    InvalidMaxTokens,

    #[error("AI base URL must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("Quiz timer must be greater than zero")]
    InvalidTimer,
}
