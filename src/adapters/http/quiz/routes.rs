//! HTTP routes for quiz endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    get_quiz, get_result, list_questions, reset_quiz, start_quiz, submit_answer, QuizHandlers,
};

/// Creates the quiz router with all endpoints.
pub fn quiz_routes(handlers: QuizHandlers) -> Router {
    Router::new()
        .route("/questions", get(list_questions))
        .route("/sessions", post(start_quiz))
        .route("/sessions/:id", get(get_quiz))
        .route("/sessions/:id/answers", post(submit_answer))
        .route("/sessions/:id/reset", post(reset_quiz))
        .route("/sessions/:id/result", get(get_result))
        .with_state(handlers)
}
