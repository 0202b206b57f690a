//! Quiz-specific error types.

use thiserror::Error;

use super::question::OPTIONS_PER_QUESTION;
use crate::domain::foundation::{DomainError, ErrorCode, QuizSessionId};

/// Errors raised by quiz transitions and quiz handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// No quiz session with this id.
    #[error("Quiz session not found: {0}")]
    NotFound(QuizSessionId),

    /// Every question has already been answered.
    #[error("Quiz is already complete")]
    AlreadyComplete,

    /// A result was requested before the last answer.
    #[error("Quiz is not complete: {answered} of {total} questions answered")]
    NotComplete { answered: usize, total: usize },

    /// The submitted text is not an option of the current question.
    #[error("'{option}' is not an option of question {question_index}")]
    UnknownOption {
        question_index: usize,
        option: String,
    },

    /// The submitted option position does not exist.
    #[error("Option index {option_index} is out of range (expected 0..{})", OPTIONS_PER_QUESTION)]
    OptionOutOfRange { option_index: usize },

    /// Storage or other infrastructure failure.
    #[error("Error: {0}")]
    Infrastructure(String),
}

impl QuizError {
    pub fn not_found(id: QuizSessionId) -> Self {
        QuizError::NotFound(id)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        QuizError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            QuizError::NotFound(_) => ErrorCode::QuizSessionNotFound,
            QuizError::AlreadyComplete => ErrorCode::QuizAlreadyComplete,
            QuizError::NotComplete { .. } => ErrorCode::QuizNotComplete,
            QuizError::UnknownOption { .. } => ErrorCode::ValidationFailed,
            QuizError::OptionOutOfRange { .. } => ErrorCode::OutOfRange,
            QuizError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
}

impl From<DomainError> for QuizError {
    fn from(err: DomainError) -> Self {
        QuizError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_categories() {
        assert_eq!(QuizError::AlreadyComplete.code(), ErrorCode::QuizAlreadyComplete);
        assert_eq!(
            QuizError::NotComplete { answered: 3, total: 10 }.code(),
            ErrorCode::QuizNotComplete
        );
        assert_eq!(
            QuizError::OptionOutOfRange { option_index: 9 }.code(),
            ErrorCode::OutOfRange
        );
        assert_eq!(
            QuizError::not_found(QuizSessionId::new()).code(),
            ErrorCode::QuizSessionNotFound
        );
    }

    #[test]
    fn messages_are_readable() {
        assert_eq!(
            QuizError::NotComplete { answered: 3, total: 10 }.to_string(),
            "Quiz is not complete: 3 of 10 questions answered"
        );
        assert_eq!(
            QuizError::OptionOutOfRange { option_index: 7 }.to_string(),
            "Option index 7 is out of range (expected 0..4)"
        );
    }

    #[test]
    fn domain_errors_become_infrastructure_errors() {
        let err: QuizError = DomainError::new(ErrorCode::StorageError, "disk full").into();
        assert!(matches!(err, QuizError::Infrastructure(msg) if msg.contains("disk full")));
    }
}
