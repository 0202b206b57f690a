//! HTTP handlers for quiz endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::quiz::{
    GetQuizHandler, GetQuizQuery, GetResultHandler, GetResultQuery, ResetQuizCommand,
    ResetQuizHandler, StartQuizHandler, SubmitAnswerCommand, SubmitAnswerHandler,
};
use crate::domain::foundation::QuizSessionId;
use crate::domain::quiz::{QuestionBank, QuizError};

use super::dto::{
    ErrorResponse, PersonalityResultResponse, QuestionListResponse, QuizViewResponse,
    SubmitAnswerRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct QuizHandlers {
    bank: Arc<QuestionBank>,
    timer_secs: u64,
    start_handler: Arc<StartQuizHandler>,
    get_handler: Arc<GetQuizHandler>,
    submit_handler: Arc<SubmitAnswerHandler>,
    reset_handler: Arc<ResetQuizHandler>,
    result_handler: Arc<GetResultHandler>,
}

impl QuizHandlers {
    pub fn new(
        bank: Arc<QuestionBank>,
        timer_secs: u64,
        start_handler: Arc<StartQuizHandler>,
        get_handler: Arc<GetQuizHandler>,
        submit_handler: Arc<SubmitAnswerHandler>,
        reset_handler: Arc<ResetQuizHandler>,
        result_handler: Arc<GetResultHandler>,
    ) -> Self {
        Self {
            bank,
            timer_secs,
            start_handler,
            get_handler,
            submit_handler,
            reset_handler,
            result_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/quiz/questions - List every question
pub async fn list_questions(State(handlers): State<QuizHandlers>) -> Response {
    let response = QuestionListResponse::new(&handlers.bank, handlers.timer_secs);
    (StatusCode::OK, Json(response)).into_response()
}

/// POST /api/quiz/sessions - Start a new quiz run
pub async fn start_quiz(State(handlers): State<QuizHandlers>) -> Response {
    match handlers.start_handler.handle().await {
        Ok(view) => {
            let response: QuizViewResponse = view.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_quiz_error(e),
    }
}

/// GET /api/quiz/sessions/:id - Current question, timer and progress
pub async fn get_quiz(
    State(handlers): State<QuizHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetQuizQuery { session_id }).await {
        Ok(view) => {
            let response: QuizViewResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_quiz_error(e),
    }
}

/// POST /api/quiz/sessions/:id/answers - Answer the current question
pub async fn submit_answer(
    State(handlers): State<QuizHandlers>,
    Path(session_id): Path<String>,
    Json(req): Json<SubmitAnswerRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = SubmitAnswerCommand {
        session_id,
        option_index: req.option_index,
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(view) => {
            let response: QuizViewResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_quiz_error(e),
    }
}

/// POST /api/quiz/sessions/:id/reset - Start over
pub async fn reset_quiz(
    State(handlers): State<QuizHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .reset_handler
        .handle(ResetQuizCommand { session_id })
        .await
    {
        Ok(view) => {
            let response: QuizViewResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_quiz_error(e),
    }
}

/// GET /api/quiz/sessions/:id/result - Personality result of a completed quiz
pub async fn get_result(
    State(handlers): State<QuizHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .result_handler
        .handle(GetResultQuery { session_id })
        .await
    {
        Ok(result) => {
            let response: PersonalityResultResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_quiz_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn parse_session_id(raw: &str) -> Result<QuizSessionId, Response> {
    raw.parse::<QuizSessionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid quiz session ID")),
        )
            .into_response()
    })
}

fn handle_quiz_error(error: QuizError) -> Response {
    let status = match &error {
        QuizError::NotFound(_) => StatusCode::NOT_FOUND,
        QuizError::AlreadyComplete | QuizError::NotComplete { .. } => StatusCode::CONFLICT,
        QuizError::UnknownOption { .. } | QuizError::OptionOutOfRange { .. } => {
            StatusCode::BAD_REQUEST
        }
        QuizError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Quiz request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let mut body = ErrorResponse::new(error.code(), error.to_string());
    if let QuizError::NotComplete { answered, total } = &error {
        body = body.with_details(serde_json::json!({ "answered": answered, "total": total }));
    }

    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_error_not_found_maps_to_404() {
        let response = handle_quiz_error(QuizError::NotFound(QuizSessionId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn state_conflicts_map_to_409() {
        assert_eq!(
            handle_quiz_error(QuizError::AlreadyComplete).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            handle_quiz_error(QuizError::NotComplete { answered: 2, total: 10 }).status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn bad_options_map_to_400() {
        let response = handle_quiz_error(QuizError::OptionOutOfRange { option_index: 7 });
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn infrastructure_maps_to_500() {
        let response = handle_quiz_error(QuizError::infrastructure("disk full"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn malformed_session_id_is_bad_request() {
        let response = parse_session_id("not-a-uuid").unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
