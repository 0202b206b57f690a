//! HTTP adapter for quiz endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ErrorResponse, PersonalityResultResponse, QuestionListResponse, QuestionResponse,
    QuizViewResponse, SubmitAnswerRequest,
};
pub use handlers::QuizHandlers;
pub use routes::quiz_routes;
