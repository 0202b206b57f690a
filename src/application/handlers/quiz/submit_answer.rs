//! SubmitAnswerHandler - Command handler for answering the current question.

use std::sync::Arc;

use super::view::QuizView;
use crate::domain::foundation::{QuizSessionId, Timestamp};
use crate::domain::quiz::{QuestionBank, QuizError, QuizFlow, QuizPhase, QuizState};
use crate::ports::QuizSessionStore;

/// Command to answer the current question with one of its options.
#[derive(Debug, Clone)]
pub struct SubmitAnswerCommand {
    pub session_id: QuizSessionId,
    pub option_index: usize,
}

/// Handler for submitting answers.
pub struct SubmitAnswerHandler {
    store: Arc<dyn QuizSessionStore>,
    bank: Arc<QuestionBank>,
    timer_secs: u64,
}

impl SubmitAnswerHandler {
    pub fn new(store: Arc<dyn QuizSessionStore>, bank: Arc<QuestionBank>, timer_secs: u64) -> Self {
        Self {
            store,
            bank,
            timer_secs,
        }
    }

    pub async fn handle(&self, cmd: SubmitAnswerCommand) -> Result<QuizView, QuizError> {
        let now = Timestamp::now();
        let bank = self.bank.clone();
        let option_index = cmd.option_index;

        let state = self
            .store
            .update(
                &cmd.session_id,
                Box::new(move |state: &mut QuizState| {
                    QuizFlow::select_option_index(state, &bank, option_index, now).map(|_| ())
                }),
            )
            .await?;

        if state.phase() == QuizPhase::Complete {
            tracing::info!(quiz_session_id = %cmd.session_id, "Quiz completed");
        } else {
            tracing::debug!(
                quiz_session_id = %cmd.session_id,
                question_index = state.current_index(),
                "Answer recorded"
            );
        }

        Ok(QuizView::from_state(
            cmd.session_id,
            &state,
            &self.bank,
            self.timer_secs,
            now,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::quiz_store::InMemoryQuizSessionStore;

    async fn setup() -> (SubmitAnswerHandler, Arc<InMemoryQuizSessionStore>, QuizSessionId) {
        let store = Arc::new(InMemoryQuizSessionStore::new());
        let id = store.create(QuizState::new()).await.unwrap();
        let handler =
            SubmitAnswerHandler::new(store.clone(), Arc::new(QuestionBank::standard()), 30);
        (handler, store, id)
    }

    #[tokio::test]
    async fn answer_is_recorded_and_saved() {
        let (handler, store, id) = setup().await;

        let view = handler
            .handle(SubmitAnswerCommand {
                session_id: id,
                option_index: 1,
            })
            .await
            .unwrap();

        assert_eq!(view.current_index, 1);
        assert_eq!(view.remaining_secs, 30);
        let stored = store.load(&id).await.unwrap().unwrap();
        assert_eq!(stored.answers().get(0), Some("Take it to the grave"));
    }

    #[tokio::test]
    async fn last_answer_completes_quiz() {
        let (handler, _store, id) = setup().await;

        let mut view = None;
        for _ in 0..10 {
            view = Some(
                handler
                    .handle(SubmitAnswerCommand {
                        session_id: id,
                        option_index: 0,
                    })
                    .await
                    .unwrap(),
            );
        }

        let view = view.unwrap();
        assert_eq!(view.phase, QuizPhase::Complete);
        assert_eq!(view.answers.len(), 10);
        assert!(view.current_question.is_none());
    }

    #[tokio::test]
    async fn answer_after_completion_is_rejected() {
        let (handler, _store, id) = setup().await;
        for _ in 0..10 {
            handler
                .handle(SubmitAnswerCommand {
                    session_id: id,
                    option_index: 3,
                })
                .await
                .unwrap();
        }

        let err = handler
            .handle(SubmitAnswerCommand {
                session_id: id,
                option_index: 0,
            })
            .await
            .unwrap_err();

        assert_eq!(err, QuizError::AlreadyComplete);
    }

    #[tokio::test]
    async fn out_of_range_option_leaves_state_untouched() {
        let (handler, store, id) = setup().await;

        let err = handler
            .handle(SubmitAnswerCommand {
                session_id: id,
                option_index: 9,
            })
            .await
            .unwrap_err();

        assert_eq!(err, QuizError::OptionOutOfRange { option_index: 9 });
        assert_eq!(store.load(&id).await.unwrap(), Some(QuizState::new()));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_answers_each_advance_one_question() {
        let (handler, store, id) = setup().await;
        let handler = Arc::new(handler);

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let handler = handler.clone();
                tokio::spawn(async move {
                    handler
                        .handle(SubmitAnswerCommand {
                            session_id: id,
                            option_index: 0,
                        })
                        .await
                })
            })
            .collect();
        let mut indices = Vec::new();
        for task in tasks {
            indices.push(task.await.unwrap().unwrap().current_index);
        }

        indices.sort_unstable();
        assert_eq!(indices, (1..=8).collect::<Vec<_>>());
        let stored = store.load(&id).await.unwrap().unwrap();
        assert_eq!(stored.current_index(), 8);
        assert_eq!(stored.answers().len(), 8);
    }
}
