//! QuizView - read model of one quiz run.

use crate::domain::foundation::{QuizSessionId, Timestamp};
use crate::domain::quiz::{AnswerMap, Question, QuestionBank, QuizPhase, QuizState};

/// Everything a client needs to render the current quiz screen.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizView {
    pub id: QuizSessionId,
    pub phase: QuizPhase,
    pub current_index: usize,
    pub total_questions: usize,
    /// `None` once the quiz is complete.
    pub current_question: Option<Question>,
    pub progress: f32,
    pub remaining_secs: u64,
    pub answers: AnswerMap,
    pub has_result: bool,
}

impl QuizView {
    pub fn from_state(
        id: QuizSessionId,
        state: &QuizState,
        bank: &QuestionBank,
        timer_secs: u64,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            phase: state.phase(),
            current_index: state.current_index(),
            total_questions: bank.len(),
            current_question: state.current_question(bank).cloned(),
            progress: state.progress(bank),
            remaining_secs: state.remaining_secs(timer_secs, now),
            answers: state.answers().clone(),
            has_result: state.result().is_some(),
        }
    }
}
