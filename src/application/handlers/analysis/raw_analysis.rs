//! RawAnalysisHandler - free-text personality analysis.

use std::sync::Arc;

use uuid::Uuid;

use super::personality_analyzer::PersonalityAnalyzer;
use crate::domain::foundation::ValidationError;
use crate::ports::RequestMetadata;

/// Command to analyse arbitrary text.
#[derive(Debug, Clone)]
pub struct RawAnalysisCommand {
    pub text: String,
}

/// Handler for free-text analysis.
pub struct RawAnalysisHandler {
    analyzer: Arc<PersonalityAnalyzer>,
}

impl RawAnalysisHandler {
    pub fn new(analyzer: Arc<PersonalityAnalyzer>) -> Self {
        Self { analyzer }
    }

    /// Rejects blank text; otherwise always yields an analysis string.
    pub async fn handle(&self, cmd: RawAnalysisCommand) -> Result<String, ValidationError> {
        if cmd.text.trim().is_empty() {
            return Err(ValidationError::empty_field("text"));
        }

        let metadata = RequestMetadata::new(None, format!("raw-analysis-{}", Uuid::new_v4()));
        Ok(self.analyzer.raw_analysis(&cmd.text, metadata).await)
    }
}
