//! ResetQuizHandler - Command handler for restarting a quiz run.

use std::sync::Arc;

use super::view::QuizView;
use crate::domain::foundation::{QuizSessionId, Timestamp};
use crate::domain::quiz::{QuestionBank, QuizError, QuizFlow, QuizState};
use crate::ports::QuizSessionStore;

/// Command to reset a quiz run to its first question.
#[derive(Debug, Clone)]
pub struct ResetQuizCommand {
    pub session_id: QuizSessionId,
}

/// Handler for resetting quiz runs.
pub struct ResetQuizHandler {
    store: Arc<dyn QuizSessionStore>,
    bank: Arc<QuestionBank>,
    timer_secs: u64,
}

impl ResetQuizHandler {
    pub fn new(store: Arc<dyn QuizSessionStore>, bank: Arc<QuestionBank>, timer_secs: u64) -> Self {
        Self {
            store,
            bank,
            timer_secs,
        }
    }

    pub async fn handle(&self, cmd: ResetQuizCommand) -> Result<QuizView, QuizError> {
        let state = self
            .store
            .update(
                &cmd.session_id,
                Box::new(|state: &mut QuizState| {
                    QuizFlow::reset(state);
                    Ok(())
                }),
            )
            .await?;

        tracing::info!(quiz_session_id = %cmd.session_id, "Quiz reset");

        Ok(QuizView::from_state(
            cmd.session_id,
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
    use crate::domain::quiz::QuizPhase;

    #[tokio::test]
    async fn reset_clears_completed_quiz() {
        let store = Arc::new(InMemoryQuizSessionStore::new());
        let bank = Arc::new(QuestionBank::standard());
        let mut state = QuizState::new();
        for _ in 0..bank.len() {
            QuizFlow::select_option_index(&mut state, &bank, 0, Timestamp::now()).unwrap();
        }
        let id = store.create(state).await.unwrap();
        let handler = ResetQuizHandler::new(store.clone(), bank, 30);

        let view = handler.handle(ResetQuizCommand { session_id: id }).await.unwrap();

        assert_eq!(view.phase, QuizPhase::Answering);
        assert_eq!(view.current_index, 0);
        assert!(view.answers.is_empty());
        assert_eq!(view.remaining_secs, 30);
        let stored = store.load(&id).await.unwrap().unwrap();
        assert!(stored.answers().is_empty());
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let handler = ResetQuizHandler::new(
            Arc::new(InMemoryQuizSessionStore::new()),
            Arc::new(QuestionBank::standard()),
            30,
        );
        let id = QuizSessionId::new();

        let err = handler
            .handle(ResetQuizCommand { session_id: id })
            .await
            .unwrap_err();

        assert_eq!(err, QuizError::NotFound(id));
    }
}
