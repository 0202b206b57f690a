//! GetQuizHandler - Query handler for the current quiz screen.

use std::sync::Arc;

use super::load_state;
use super::view::QuizView;
use crate::domain::foundation::{QuizSessionId, Timestamp};
use crate::domain::quiz::{QuestionBank, QuizError};
use crate::ports::QuizSessionStore;

/// Query to get a quiz run by ID.
#[derive(Debug, Clone)]
pub struct GetQuizQuery {
    pub session_id: QuizSessionId,
}

/// Handler for retrieving quiz runs.
pub struct GetQuizHandler {
    store: Arc<dyn QuizSessionStore>,
    bank: Arc<QuestionBank>,
    timer_secs: u64,
}

impl GetQuizHandler {
    pub fn new(store: Arc<dyn QuizSessionStore>, bank: Arc<QuestionBank>, timer_secs: u64) -> Self {
        Self {
            store,
            bank,
            timer_secs,
        }
    }

    pub async fn handle(&self, query: GetQuizQuery) -> Result<QuizView, QuizError> {
        let state = load_state(self.store.as_ref(), &query.session_id).await?;

        Ok(QuizView::from_state(
            query.session_id,
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
    use crate::domain::quiz::{QuizFlow, QuizState};

    #[tokio::test]
    async fn returns_view_of_stored_state() {
        let store = Arc::new(InMemoryQuizSessionStore::new());
        let bank = Arc::new(QuestionBank::standard());
        let mut state = QuizState::new();
        QuizFlow::select_option_index(&mut state, &bank, 2, Timestamp::now()).unwrap();
        let id = store.create(state).await.unwrap();
        let handler = GetQuizHandler::new(store, bank, 30);

        let view = handler.handle(GetQuizQuery { session_id: id }).await.unwrap();

        assert_eq!(view.id, id);
        assert_eq!(view.current_index, 1);
        assert_eq!(
            view.answers.get(0),
            Some("Tell only if someone really needs to know")
        );
        assert!(view.remaining_secs <= 30);
        assert!((view.progress - 0.1).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let handler = GetQuizHandler::new(
            Arc::new(InMemoryQuizSessionStore::new()),
            Arc::new(QuestionBank::standard()),
            30,
        );
        let id = QuizSessionId::new();

        let err = handler.handle(GetQuizQuery { session_id: id }).await.unwrap_err();

        assert_eq!(err, QuizError::NotFound(id));
    }
}
