//! GetResultHandler - Query handler for the personality result.
//!
//! The analysis runs at most once per completed quiz: the first request
//! computes and stores the result, later requests read it back.

use std::sync::Arc;

use super::load_state;
use crate::application::handlers::analysis::PersonalityAnalyzer;
use crate::domain::foundation::QuizSessionId;
use crate::domain::personality::PersonalityResult;
use crate::domain::quiz::{QuestionBank, QuizError, QuizState};
use crate::ports::{QuizSessionStore, RequestMetadata};

/// Query for the result of a completed quiz run.
#[derive(Debug, Clone)]
pub struct GetResultQuery {
    pub session_id: QuizSessionId,
}

/// Handler producing the personality result.
pub struct GetResultHandler {
    store: Arc<dyn QuizSessionStore>,
    bank: Arc<QuestionBank>,
    analyzer: Arc<PersonalityAnalyzer>,
}

impl GetResultHandler {
    pub fn new(
        store: Arc<dyn QuizSessionStore>,
        bank: Arc<QuestionBank>,
        analyzer: Arc<PersonalityAnalyzer>,
    ) -> Self {
        Self {
            store,
            bank,
            analyzer,
        }
    }

    pub async fn handle(&self, query: GetResultQuery) -> Result<PersonalityResult, QuizError> {
        let id = query.session_id;
        let state = load_state(self.store.as_ref(), &id).await?;

        if !state.is_complete() {
            return Err(QuizError::NotComplete {
                answered: state.answers().len(),
                total: self.bank.len(),
            });
        }

        if let Some(result) = state.result() {
            return Ok(result.clone());
        }

        let result = self
            .analyzer
            .analyze(state.answers(), &self.bank, RequestMetadata::for_session(id))
            .await;

        // The quiz may have been reset while the analysis was running.
        let bank = self.bank.clone();
        let revision = state.revision();
        let to_store = result.clone();
        let latest = self
            .store
            .update(
                &id,
                Box::new(move |latest: &mut QuizState| {
                    if latest.revision() == revision && latest.result().is_none() {
                        latest.record_result(&bank, to_store)?;
                    }
                    Ok(())
                }),
            )
            .await?;
        if latest.revision() != revision {
            tracing::debug!(quiz_session_id = %id, "Quiz changed during analysis, result not stored");
            return Ok(result);
        }

        // A concurrent request may have stored its result first.
        Ok(latest.result().cloned().unwrap_or(result))
    }
}
