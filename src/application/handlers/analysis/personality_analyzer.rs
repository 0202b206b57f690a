//! PersonalityAnalyzer - requests a personality analysis from the AI provider.
//!
//! `request_analysis` reports exactly why an analysis did or did not
//! succeed. `analyze` is the entry point for the quiz: it never fails and
//! substitutes the keyword fallback for every unsuccessful outcome.
//!
//! Every provider call is bounded by `AnalysisSettings::deadline`, so a
//! slow provider degrades to the fallback instead of outliving the request.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::personality::{
    AnalysisPrompt, KeywordScorer, PersonalityResult, ResponseParser, RAW_SYSTEM_INSTRUCTION,
    SYSTEM_INSTRUCTION,
};
use crate::domain::quiz::{AnswerMap, QuestionBank};
use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, MessageRole, RequestMetadata,
};

/// Returned by `raw_analysis` when no analysis could be produced.
pub const RAW_ANALYSIS_FALLBACK: &str = "Unable to generate analysis at this time.";

const RAW_ANALYSIS_TEMPERATURE: f32 = 0.7;
const RAW_ANALYSIS_MAX_TOKENS: u32 = 500;

/// Sampling settings and time budget for analysis calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisSettings {
    pub temperature: f32,
    pub max_tokens: u32,
    /// Upper bound on one provider call, retries included.
    pub deadline: Duration,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            temperature: 0.9,
            max_tokens: 1500,
            deadline: Duration::from_secs(24),
        }
    }
}

/// Why an analysis request did or did not produce a result.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    /// The reply was parsed into a result.
    Success(PersonalityResult),
    /// No provider credential was configured.
    CredentialMissing,
    /// The provider call itself failed.
    RequestFailed(AIError),
    /// The provider answered without any content.
    EmptyResponse,
}

impl AnalysisOutcome {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisOutcome::Success(_) => "success",
            AnalysisOutcome::CredentialMissing => "credential_missing",
            AnalysisOutcome::RequestFailed(_) => "request_failed",
            AnalysisOutcome::EmptyResponse => "empty_response",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisOutcome::Success(_))
    }
}

/// Turns quiz answers into a `PersonalityResult` via the AI provider.
pub struct PersonalityAnalyzer {
    provider: Option<Arc<dyn AIProvider>>,
    settings: AnalysisSettings,
}

impl PersonalityAnalyzer {
    /// `provider` is `None` when no API key was configured.
    pub fn new(provider: Option<Arc<dyn AIProvider>>, settings: AnalysisSettings) -> Self {
        Self { provider, settings }
    }

    /// Analyzer that always uses the keyword fallback.
    pub fn fallback_only() -> Self {
        Self::new(None, AnalysisSettings::default())
    }

    async fn complete_within_deadline(
        &self,
        provider: &dyn AIProvider,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, AIError> {
        let deadline = self.settings.deadline;
        match tokio::time::timeout(deadline, provider.complete(request)).await {
            Ok(result) => result,
            Err(_) => Err(AIError::Timeout {
                timeout_secs: u32::try_from(deadline.as_secs()).unwrap_or(u32::MAX),
            }),
        }
    }

    /// Sends one analysis request and classifies the result.
    pub async fn request_analysis(
        &self,
        answers: &AnswerMap,
        bank: &QuestionBank,
        metadata: RequestMetadata,
    ) -> AnalysisOutcome {
        let Some(provider) = &self.provider else {
            return AnalysisOutcome::CredentialMissing;
        };

        let request = CompletionRequest::new(metadata)
            .with_system_prompt(SYSTEM_INSTRUCTION)
            .with_message(MessageRole::User, AnalysisPrompt::build(answers, bank))
            .with_temperature(self.settings.temperature)
            .with_max_tokens(self.settings.max_tokens);

        let response = match self.complete_within_deadline(provider.as_ref(), request).await {
            Ok(response) => response,
            Err(AIError::EmptyResponse) => return AnalysisOutcome::EmptyResponse,
            Err(err) => return AnalysisOutcome::RequestFailed(err),
        };

        if response.content.trim().is_empty() {
            return AnalysisOutcome::EmptyResponse;
        }

        AnalysisOutcome::Success(ResponseParser::parse(&response.content))
    }

    /// Analyzes the answers, falling back to keyword scoring on any failure.
    pub async fn analyze(
        &self,
        answers: &AnswerMap,
        bank: &QuestionBank,
        metadata: RequestMetadata,
    ) -> PersonalityResult {
        let trace_id = metadata.trace_id.clone();

        match self.request_analysis(answers, bank, metadata).await {
            AnalysisOutcome::Success(result) => {
                tracing::info!(
                    trace_id = %trace_id,
                    personality_type = %result.personality_type,
                    "Personality analysis succeeded"
                );
                result
            }
            outcome => {
                match &outcome {
                    AnalysisOutcome::RequestFailed(err) => tracing::warn!(
                        trace_id = %trace_id,
                        outcome = outcome.kind(),
                        error = %err,
                        "Analysis request failed, using keyword fallback"
                    ),
                    _ => tracing::warn!(
                        trace_id = %trace_id,
                        outcome = outcome.kind(),
                        "Analysis unavailable, using keyword fallback"
                    ),
                }
                KeywordScorer::fallback_result(answers)
            }
        }
    }

    /// Free-text analysis of arbitrary text.
    ///
    /// Returns the provider's reply verbatim, or `RAW_ANALYSIS_FALLBACK`.
    pub async fn raw_analysis(&self, text: &str, metadata: RequestMetadata) -> String {
        let Some(provider) = &self.provider else {
            tracing::warn!("Raw analysis requested without an API key");
            return RAW_ANALYSIS_FALLBACK.to_string();
        };

        let request = CompletionRequest::new(metadata)
            .with_system_prompt(RAW_SYSTEM_INSTRUCTION)
            .with_message(MessageRole::User, text)
            .with_temperature(RAW_ANALYSIS_TEMPERATURE)
            .with_max_tokens(RAW_ANALYSIS_MAX_TOKENS);

        match self.complete_within_deadline(provider.as_ref(), request).await {
            Ok(response) if !response.content.trim().is_empty() => response.content,
            Ok(_) => {
                tracing::warn!("Raw analysis returned no content");
                RAW_ANALYSIS_FALLBACK.to_string()
            }
            Err(err) => {
                tracing::warn!(error = %err, "Raw analysis request failed");
                RAW_ANALYSIS_FALLBACK.to_string()
            }
        }
    }
}
