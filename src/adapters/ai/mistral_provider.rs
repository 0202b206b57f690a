//! Mistral Provider - Implementation of AIProvider for Mistral's chat API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = MistralConfig::new(api_key)
//!     .with_model("mistral-medium")
//!     .with_timeout(Duration::from_secs(120));
//!
//! let provider = MistralProvider::new(config)?;
//! ```
//!
//! A completion is a single `POST {base_url}/chat/completions`. Retries are
//! off by default; `with_max_retries` enables exponential backoff for
//! retryable errors.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, MessageRole,
    ProviderInfo, TokenUsage,
};

pub const DEFAULT_MISTRAL_MODEL: &str = "mistral-medium";
pub const DEFAULT_MISTRAL_BASE_URL: &str = "https://api.mistral.ai/v1";

/// Configuration for the Mistral provider.
#[derive(Debug, Clone)]
pub struct MistralConfig {
    api_key: Secret<String>,
    /// Model to use (e.g., "mistral-medium").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Retries on transient failures; 0 means a single attempt.
    pub max_retries: u32,
}

impl MistralConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_secret(Secret::new(api_key.into()))
    }

    /// Creates a configuration from an already wrapped API key.
    pub fn from_secret(api_key: Secret<String>) -> Self {
        Self {
            api_key,
            model: DEFAULT_MISTRAL_MODEL.to_string(),
            base_url: DEFAULT_MISTRAL_BASE_URL.to_string(),
            timeout: Duration::from_secs(120),
            max_retries: 0,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Mistral API provider implementation.
pub struct MistralProvider {
    config: MistralConfig,
    client: Client,
}

impl MistralProvider {
    /// Creates a new Mistral provider with the given configuration.
    pub fn new(config: MistralConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Converts our request to Mistral's format.
    fn to_mistral_request(&self, request: &CompletionRequest) -> MistralRequest {
        let mut messages = Vec::new();

        if let Some(ref prompt) = request.system_prompt {
            messages.push(MistralMessage {
                role: "system".to_string(),
                content: prompt.clone(),
            });
        }

        for msg in &request.messages {
            messages.push(MistralMessage {
                role: match msg.role {
                    MessageRole::System => "system",
                    MessageRole::User => "user",
                    MessageRole::Assistant => "assistant",
                }
                .to_string(),
                content: msg.content.clone(),
            });
        }

        MistralRequest {
            model: self.config.model.clone(),
            messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }

    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, AIError> {
        let body = self.to_mistral_request(request);

        self.client
            .post(self.completions_url())
            .bearer_auth(self.config.api_key())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AIError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    AIError::network(format!("Connection failed: {}", e))
                } else {
                    AIError::network(e.to_string())
                }
            })
    }

    async fn handle_response_status(response: Response) -> Result<Response, AIError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        Err(Self::status_error(status.as_u16(), error_body))
    }

    /// Maps a non-success HTTP status to an `AIError`.
    fn status_error(status: u16, error_body: String) -> AIError {
        match status {
            401 => AIError::AuthenticationFailed,
            429 => AIError::rate_limited(30),
            400 => AIError::InvalidRequest(error_body),
            500..=599 => AIError::unavailable(format!("Server error {}: {}", status, error_body)),
            _ => AIError::network(format!("Unexpected status {}: {}", status, error_body)),
        }
    }

    async fn parse_response(&self, response: Response) -> Result<CompletionResponse, AIError> {
        let response = Self::handle_response_status(response).await?;

        let body: MistralResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

        Self::into_completion(body, &self.config.model)
    }

    /// Takes the first choice; a `null` content becomes an empty string.
    fn into_completion(
        body: MistralResponse,
        requested_model: &str,
    ) -> Result<CompletionResponse, AIError> {
        let choice = body
            .choices
            .into_iter()
            .next()
            .ok_or(AIError::EmptyResponse)?;

        let usage = body
            .usage
            .map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens))
            .unwrap_or_default();

        Ok(CompletionResponse {
            content: choice.message.content.unwrap_or_default(),
            usage,
            model: body.model.unwrap_or_else(|| requested_model.to_string()),
            finish_reason: FinishReason::from_provider(choice.finish_reason.as_deref()),
        })
    }

    async fn attempt(&self, request: &CompletionRequest) -> Result<CompletionResponse, AIError> {
        let response = self.send_request(request).await?;
        self.parse_response(response).await
    }
}

#[async_trait]
impl AIProvider for MistralProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let mut retry_count = 0;

        loop {
            match self.attempt(&request).await {
                Ok(completion) => {
                    tracing::debug!(
                        model = %completion.model,
                        prompt_tokens = completion.usage.prompt_tokens,
                        completion_tokens = completion.usage.completion_tokens,
                        trace_id = %request.metadata.trace_id,
                        "Mistral completion received"
                    );
                    return Ok(completion);
                }
                Err(err) if err.is_retryable() && retry_count < self.config.max_retries => {
                    tracing::warn!(
                        error = %err,
                        attempt = retry_count + 1,
                        trace_id = %request.metadata.trace_id,
                        "Retrying Mistral completion"
                    );
                }
                Err(err) => return Err(err),
            }

            // Exponential backoff: 1s, 2s, 4s, ...
            sleep(Duration::from_secs(1 << retry_count.min(6))).await;
            retry_count += 1;
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mistral", &self.config.model)
    }
}

// ----- Mistral API Types -----

#[derive(Debug, Serialize)]
struct MistralRequest {
    model: String,
    messages: Vec<MistralMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct MistralMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MistralResponse {
    model: Option<String>,
    #[serde(default)]
    choices: Vec<MistralChoice>,
    usage: Option<MistralUsage>,
}

#[derive(Debug, Deserialize)]
struct MistralChoice {
    message: MistralResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MistralResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MistralUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::RequestMetadata;

    fn provider() -> MistralProvider {
        MistralProvider::new(MistralConfig::new("test-key")).unwrap()
    }

    fn parse_body(json: &str) -> Result<CompletionResponse, AIError> {
        let body: MistralResponse = serde_json::from_str(json).unwrap();
        MistralProvider::into_completion(body, DEFAULT_MISTRAL_MODEL)
    }

    #[test]
    fn config_defaults_match_service_settings() {
        let config = MistralConfig::new("test-key");
        assert_eq!(config.model, "mistral-medium");
        assert_eq!(config.base_url, "https://api.mistral.ai/v1");
        assert_eq!(config.max_retries, 0);
        assert_eq!(config.api_key(), "test-key");
    }

    #[test]
    fn config_builder_works() {
        let config = MistralConfig::new("k")
            .with_model("mistral-small")
            .with_base_url("http://localhost:9000/v1/")
            .with_timeout(Duration::from_secs(5))
            .with_max_retries(2);

        assert_eq!(config.model, "mistral-small");
        assert_eq!(config.base_url, "http://localhost:9000/v1");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.max_retries, 2);
    }

    #[test]
    fn debug_output_hides_api_key() {
        let config = MistralConfig::new("super-secret");
        assert!(!format!("{:?}", config).contains("super-secret"));
    }

    #[test]
    fn request_puts_system_prompt_first() {
        let request = CompletionRequest::new(RequestMetadata::default())
            .with_system_prompt("You are an analyst.")
            .with_message(MessageRole::User, "Answers")
            .with_temperature(0.9)
            .with_max_tokens(1500);

        let body = serde_json::to_value(provider().to_mistral_request(&request)).unwrap();

        assert_eq!(body["model"], "mistral-medium");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "You are an analyst.");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["max_tokens"], 1500);
        assert!((body["temperature"].as_f64().unwrap() - 0.9).abs() < 1e-6);
    }

    #[test]
    fn first_choice_content_is_returned() {
        let completion = parse_body(
            r#"{"model":"mistral-medium","choices":[
                {"message":{"content":"TITLE: One"},"finish_reason":"stop"},
                {"message":{"content":"TITLE: Two"},"finish_reason":"stop"}],
                "usage":{"prompt_tokens":12,"completion_tokens":8}}"#,
        )
        .unwrap();

        assert_eq!(completion.content, "TITLE: One");
        assert_eq!(completion.usage.total_tokens, 20);
        assert_eq!(completion.finish_reason, FinishReason::Stop);
    }

    #[test]
    fn null_content_becomes_empty_string() {
        let completion =
            parse_body(r#"{"choices":[{"message":{"content":null},"finish_reason":"length"}]}"#)
                .unwrap();

        assert_eq!(completion.content, "");
        assert_eq!(completion.model, DEFAULT_MISTRAL_MODEL);
        assert_eq!(completion.finish_reason, FinishReason::Length);
    }

    #[test]
    fn missing_choices_is_empty_response() {
        assert_eq!(parse_body(r#"{"choices":[]}"#).unwrap_err(), AIError::EmptyResponse);
        assert_eq!(parse_body(r#"{}"#).unwrap_err(), AIError::EmptyResponse);
    }

    #[test]
    fn status_codes_map_to_errors() {
        assert_eq!(
            MistralProvider::status_error(401, String::new()),
            AIError::AuthenticationFailed
        );
        assert!(matches!(
            MistralProvider::status_error(429, String::new()),
            AIError::RateLimited { .. }
        ));
        assert!(matches!(
            MistralProvider::status_error(400, "bad model".into()),
            AIError::InvalidRequest(body) if body == "bad model"
        ));
        assert!(matches!(
            MistralProvider::status_error(503, String::new()),
            AIError::Unavailable { .. }
        ));
        assert!(matches!(
            MistralProvider::status_error(404, String::new()),
            AIError::Network(_)
        ));
    }

    #[test]
    fn provider_info_reports_model() {
        let info = provider().provider_info();
        assert_eq!(info.name, "mistral");
        assert_eq!(info.model, "mistral-medium");
    }
}
