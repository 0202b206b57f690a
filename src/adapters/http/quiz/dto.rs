//! Data Transfer Objects for quiz HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::quiz::QuizView;
use crate::domain::foundation::ErrorCode;
use crate::domain::personality::PersonalityResult;
use crate::domain::quiz::{AnswerMap, Question, QuestionBank, QuizPhase};

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// Request to answer the current question.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAnswerRequest {
    /// Position of the chosen option (0-3).
    pub option_index: usize,
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

/// A question with its options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub index: usize,
    pub text: String,
    pub options: Vec<String>,
}

impl QuestionResponse {
    pub fn new(index: usize, question: &Question) -> Self {
        Self {
            index,
            text: question.text().to_string(),
            options: question.options().to_vec(),
        }
    }
}

/// Every question of the bank plus the timer length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionListResponse {
    pub questions: Vec<QuestionResponse>,
    pub timer_secs: u64,
}

impl QuestionListResponse {
    pub fn new(bank: &QuestionBank, timer_secs: u64) -> Self {
        Self {
            questions: bank
                .iter()
                .enumerate()
                .map(|(index, q)| QuestionResponse::new(index, q))
                .collect(),
            timer_secs,
        }
    }
}

/// Current state of a quiz run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizViewResponse {
    pub id: String,
    pub phase: QuizPhase,
    pub current_index: usize,
    pub total_questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_question: Option<QuestionResponse>,
    pub progress: f32,
    pub remaining_secs: u64,
    pub answers: AnswerMap,
    pub has_result: bool,
}

impl From<QuizView> for QuizViewResponse {
    fn from(view: QuizView) -> Self {
        let current_question = view
            .current_question
            .as_ref()
            .map(|q| QuestionResponse::new(view.current_index, q));

        Self {
            id: view.id.to_string(),
            phase: view.phase,
            current_index: view.current_index,
            total_questions: view.total_questions,
            current_question,
            progress: view.progress,
            remaining_secs: view.remaining_secs,
            answers: view.answers,
            has_result: view.has_result,
        }
    }
}

/// The personality profile of a completed quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalityResultResponse {
    pub title: String,
    #[serde(rename = "type")]
    pub personality_type: String,
    pub emoji: String,
    pub description: String,
    pub traits: Vec<String>,
    pub strengths: Vec<String>,
    pub growth_areas: Vec<String>,
}

impl From<PersonalityResult> for PersonalityResultResponse {
    fn from(result: PersonalityResult) -> Self {
        Self {
            title: result.title,
            personality_type: result.personality_type,
            emoji: result.emoji,
            description: result.description,
            traits: result.traits,
            strengths: result.strengths,
            growth_areas: result.growth_areas,
        }
    }
}

/// Error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
