//! QuizState - the externally owned state of one quiz run.

use serde::{Deserialize, Serialize};

use super::answers::AnswerMap;
use super::errors::QuizError;
use super::question::{Question, QuestionBank};
use crate::domain::foundation::Timestamp;
use crate::domain::personality::PersonalityResult;

/// Where a quiz run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuizPhase {
    /// Some questions are still unanswered.
    #[default]
    Answering,
    /// Every question has an answer.
    Complete,
}

/// State of a single quiz run.
///
/// Owned by the caller and mutated only through `QuizFlow`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizState {
    pub(super) current_index: usize,
    pub(super) answers: AnswerMap,
    pub(super) complete: bool,
    pub(super) question_started_at: Option<Timestamp>,
    pub(super) result: Option<PersonalityResult>,
    pub(super) revision: u64,
}

impl QuizState {
    /// Fresh state at the first question.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> QuizPhase {
        if self.complete {
            QuizPhase::Complete
        } else {
            QuizPhase::Answering
        }
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn result(&self) -> Option<&PersonalityResult> {
        self.result.as_ref()
    }

    /// Incremented by every transition; used to detect concurrent changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn question_started_at(&self) -> Option<Timestamp> {
        self.question_started_at
    }

    /// The question awaiting an answer, or `None` once complete.
    pub fn current_question<'a>(&self, bank: &'a QuestionBank) -> Option<&'a Question> {
        if self.complete {
            None
        } else {
            bank.get(self.current_index)
        }
    }

    /// Fraction of questions answered, in `[0, 1]`.
    pub fn progress(&self, bank: &QuestionBank) -> f32 {
        if bank.is_empty() {
            return 0.0;
        }
        (self.current_index as f32 / bank.len() as f32).min(1.0)
    }

    /// Seconds left on the per-question timer.
    ///
    /// The timer reference is set by each answer; before the first answer
    /// the full duration is reported.
    pub fn remaining_secs(&self, timer_secs: u64, now: Timestamp) -> u64 {
        match self.question_started_at {
            None => timer_secs,
            Some(started) => {
                let elapsed = now.duration_since(&started).num_seconds().max(0) as u64;
                timer_secs.saturating_sub(elapsed)
            }
        }
    }

    /// Stores the analysis result of a completed quiz.
    pub fn record_result(
        &mut self,
        bank: &QuestionBank,
        result: PersonalityResult,
    ) -> Result<(), QuizError> {
        if !self.complete {
            return Err(QuizError::NotComplete {
                answered: self.answers.len(),
                total: bank.len(),
            });
        }
        self.result = Some(result);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_answering_at_zero() {
        let state = QuizState::new();
        assert_eq!(state.phase(), QuizPhase::Answering);
        assert_eq!(state.current_index(), 0);
        assert!(state.answers().is_empty());
        assert!(state.result().is_none());
    }

    #[test]
    fn remaining_secs_is_full_before_first_answer() {
        let state = QuizState::new();
        assert_eq!(state.remaining_secs(30, Timestamp::now()), 30);
    }

    #[test]
    fn remaining_secs_counts_down_and_saturates() {
        let started = Timestamp::from_unix_secs(1_000);
        let state = QuizState {
            question_started_at: Some(started),
            ..QuizState::new()
        };

        assert_eq!(state.remaining_secs(30, started.plus_secs(12)), 18);
        assert_eq!(state.remaining_secs(30, started.plus_secs(45)), 0);
    }

    #[test]
    fn remaining_secs_ignores_clock_going_backwards() {
        let started = Timestamp::from_unix_secs(1_000);
        let state = QuizState {
            question_started_at: Some(started),
            ..QuizState::new()
        };
        assert_eq!(state.remaining_secs(30, Timestamp::from_unix_secs(990)), 30);
    }

    #[test]
    fn progress_is_fraction_of_bank() {
        let bank = QuestionBank::standard();
        let state = QuizState {
            current_index: 4,
            ..QuizState::new()
        };
        assert!((state.progress(&bank) - 0.4).abs() < f32::EPSILON);
    }

    #[test]
    fn current_question_follows_index() {
        let bank = QuestionBank::standard();
        let state = QuizState {
            current_index: 2,
            ..QuizState::new()
        };
        assert_eq!(
            state.current_question(&bank).unwrap().text(),
            "Your brain at 3 AM usually..."
        );
    }

    #[test]
    fn phase_serializes_snake_case() {
        let json = serde_json::to_string(&QuizPhase::Complete).unwrap();
        assert_eq!(json, "\"complete\"");
    }
}
