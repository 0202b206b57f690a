//! Quiz Flow Controller - transitions over an externally owned `QuizState`.
//!
//! Valid transitions:
//! - Answering -> Answering (answer recorded, more questions left)
//! - Answering -> Complete (last question answered)
//! - any -> Answering at index 0 (reset)
//!
//! There is no transition back to a previous question.

use super::errors::QuizError;
use super::question::QuestionBank;
use super::state::{QuizPhase, QuizState};
use crate::domain::foundation::Timestamp;

/// Stateless transition functions for a quiz run.
pub struct QuizFlow;

impl QuizFlow {
    /// Records `option` as the answer to the current question and advances.
    ///
    /// Restarts the per-question timer at `now`. On error the state is
    /// left untouched.
    pub fn select_option(
        state: &mut QuizState,
        bank: &QuestionBank,
        option: &str,
        now: Timestamp,
    ) -> Result<QuizPhase, QuizError> {
        if state.complete {
            return Err(QuizError::AlreadyComplete);
        }

        let index = state.current_index;
        let question = bank.get(index).ok_or(QuizError::AlreadyComplete)?;
        if !question.has_option(option) {
            return Err(QuizError::UnknownOption {
                question_index: index,
                option: option.to_string(),
            });
        }

        state.answers.record(index, option);
        state.current_index += 1;
        state.question_started_at = Some(now);
        state.revision += 1;

        if state.current_index >= bank.len() {
            state.complete = true;
        }

        Ok(state.phase())
    }

    /// Same as [`QuizFlow::select_option`], addressing the option by position.
    pub fn select_option_index(
        state: &mut QuizState,
        bank: &QuestionBank,
        option_index: usize,
        now: Timestamp,
    ) -> Result<QuizPhase, QuizError> {
        if state.complete {
            return Err(QuizError::AlreadyComplete);
        }

        let question = bank
            .get(state.current_index)
            .ok_or(QuizError::AlreadyComplete)?;
        let option = question
            .option(option_index)
            .ok_or(QuizError::OptionOutOfRange { option_index })?
            .to_string();

        Self::select_option(state, bank, &option, now)
    }

    /// Clears answers, index, completion flag, timer and result.
    pub fn reset(state: &mut QuizState) {
        let revision = state.revision + 1;
        *state = QuizState {
            revision,
            ..QuizState::new()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::personality::KeywordScorer;
    use crate::domain::quiz::{Question, OPTIONS_PER_QUESTION};

    fn small_bank() -> QuestionBank {
        let q = |text: &str| {
            let options: [String; OPTIONS_PER_QUESTION] =
                ["alpha", "beta", "gamma", "delta"].map(|o| format!("{} {}", text, o));
            Question::new(text, options).unwrap()
        };
        QuestionBank::new(vec![q("one"), q("two"), q("three")]).unwrap()
    }

    fn t(secs: u64) -> Timestamp {
        Timestamp::from_unix_secs(secs)
    }

    #[test]
    fn selecting_an_option_records_and_advances() {
        let bank = small_bank();
        let mut state = QuizState::new();

        let phase = QuizFlow::select_option(&mut state, &bank, "one beta", t(100)).unwrap();

        assert_eq!(phase, QuizPhase::Answering);
        assert_eq!(state.current_index(), 1);
        assert_eq!(state.answers().get(0), Some("one beta"));
        assert_eq!(state.question_started_at(), Some(t(100)));
    }

    #[test]
    fn answer_count_tracks_index_until_complete() {
        let bank = small_bank();
        let mut state = QuizState::new();

        for (i, option) in ["one alpha", "two gamma"].iter().enumerate() {
            QuizFlow::select_option(&mut state, &bank, option, t(100)).unwrap();
            assert_eq!(state.answers().len(), i + 1);
            assert_eq!(state.answers().len(), state.current_index());
        }
    }

    #[test]
    fn answering_every_question_completes_the_quiz() {
        let bank = QuestionBank::standard();
        let mut state = QuizState::new();

        for _ in 0..bank.len() {
            QuizFlow::select_option_index(&mut state, &bank, 0, t(5)).unwrap();
        }

        assert_eq!(state.phase(), QuizPhase::Complete);
        assert_eq!(state.answers().len(), bank.len());
        assert!(state.current_question(&bank).is_none());
        assert!((state.progress(&bank) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn reset_after_completion_returns_to_start() {
        let bank = small_bank();
        let mut state = QuizState::new();
        for _ in 0..bank.len() {
            QuizFlow::select_option_index(&mut state, &bank, 1, t(5)).unwrap();
        }
        state
            .record_result(&bank, KeywordScorer::fallback_result(state.answers()))
            .unwrap();

        QuizFlow::reset(&mut state);

        assert_eq!(state.phase(), QuizPhase::Answering);
        assert_eq!(state.current_index(), 0);
        assert!(state.answers().is_empty());
        assert!(state.result().is_none());
        assert!(state.question_started_at().is_none());
    }

    #[test]
    fn reset_mid_quiz_is_unconditional() {
        let bank = small_bank();
        let mut state = QuizState::new();
        QuizFlow::select_option_index(&mut state, &bank, 2, t(5)).unwrap();

        QuizFlow::reset(&mut state);

        assert_eq!(state.current_index(), 0);
        assert!(state.answers().is_empty());
    }

    #[test]
    fn every_transition_bumps_revision() {
        let bank = small_bank();
        let mut state = QuizState::new();
        let start = state.revision();

        QuizFlow::select_option_index(&mut state, &bank, 0, t(5)).unwrap();
        assert_eq!(state.revision(), start + 1);

        QuizFlow::reset(&mut state);
        assert_eq!(state.revision(), start + 2);
    }

    #[test]
    fn selecting_after_completion_fails_without_change() {
        let bank = small_bank();
        let mut state = QuizState::new();
        for _ in 0..bank.len() {
            QuizFlow::select_option_index(&mut state, &bank, 0, t(5)).unwrap();
        }
        let before = state.clone();

        let err = QuizFlow::select_option_index(&mut state, &bank, 0, t(6)).unwrap_err();

        assert_eq!(err, QuizError::AlreadyComplete);
        assert_eq!(state, before);
    }

    #[test]
    fn unknown_option_is_rejected_without_change() {
        let bank = small_bank();
        let mut state = QuizState::new();

        let err = QuizFlow::select_option(&mut state, &bank, "two alpha", t(5)).unwrap_err();

        assert!(matches!(err, QuizError::UnknownOption { question_index: 0, .. }));
        assert_eq!(state, QuizState::new());
    }

    #[test]
    fn option_index_out_of_range_is_rejected() {
        let bank = small_bank();
        let mut state = QuizState::new();

        let err = QuizFlow::select_option_index(&mut state, &bank, 4, t(5)).unwrap_err();

        assert_eq!(err, QuizError::OptionOutOfRange { option_index: 4 });
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn result_cannot_be_recorded_while_answering() {
        let bank = small_bank();
        let mut state = QuizState::new();
        let result = KeywordScorer::fallback_result(state.answers());

        let err = state.record_result(&bank, result).unwrap_err();

        assert_eq!(err, QuizError::NotComplete { answered: 0, total: 3 });
    }
}
