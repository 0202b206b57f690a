//! StartQuizHandler - Command handler for starting a quiz run.

use std::sync::Arc;

use super::view::QuizView;
use crate::domain::foundation::Timestamp;
use crate::domain::quiz::{QuestionBank, QuizError, QuizState};
use crate::ports::QuizSessionStore;

/// Handler for starting quiz runs.
pub struct StartQuizHandler {
    store: Arc<dyn QuizSessionStore>,
    bank: Arc<QuestionBank>,
    timer_secs: u64,
}

impl StartQuizHandler {
    pub fn new(store: Arc<dyn QuizSessionStore>, bank: Arc<QuestionBank>, timer_secs: u64) -> Self {
        Self {
            store,
            bank,
            timer_secs,
        }
    }

    pub async fn handle(&self) -> Result<QuizView, QuizError> {
        let state = QuizState::new();
        let id = self.store.create(state.clone()).await?;

        tracing::info!(quiz_session_id = %id, "Quiz started");

        Ok(QuizView::from_state(
            id,
            &state,
            &self.bank,
            self.timer_secs,
            Timestamp::now(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::quiz_store::InMemoryQuizSessionStore;
    use crate::domain::foundation::{DomainError, ErrorCode, QuizSessionId};
    use crate::domain::quiz::QuizPhase;
    use crate::ports::QuizStateUpdate;
    use async_trait::async_trait;

    struct FailingStore;

    #[async_trait]
    impl QuizSessionStore for FailingStore {
        async fn create(&self, _state: QuizState) -> Result<QuizSessionId, DomainError> {
            Err(DomainError::new(ErrorCode::StorageError, "Simulated create failure"))
        }

        async fn load(&self, _id: &QuizSessionId) -> Result<Option<QuizState>, DomainError> {
            Ok(None)
        }

        async fn update(
            &self,
            id: &QuizSessionId,
            _apply: QuizStateUpdate,
        ) -> Result<QuizState, QuizError> {
            Err(QuizError::NotFound(*id))
        }
    }

    #[tokio::test]
    async fn starts_at_first_question_with_full_timer() {
        let store = Arc::new(InMemoryQuizSessionStore::new());
        let handler = StartQuizHandler::new(store.clone(), Arc::new(QuestionBank::standard()), 30);

        let view = handler.handle().await.unwrap();

        assert_eq!(view.phase, QuizPhase::Answering);
        assert_eq!(view.current_index, 0);
        assert_eq!(view.total_questions, 10);
        assert_eq!(view.remaining_secs, 30);
        assert_eq!(
            view.current_question.unwrap().text(),
            "Your friend just spilled a huge secret. You..."
        );
        assert!(store.load(&view.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn storage_failure_is_infrastructure_error() {
        let handler =
            StartQuizHandler::new(Arc::new(FailingStore), Arc::new(QuestionBank::standard()), 30);

        let err = handler.handle().await.unwrap_err();

        assert!(matches!(err, QuizError::Infrastructure(msg) if msg.contains("Simulated")));
    }
}
