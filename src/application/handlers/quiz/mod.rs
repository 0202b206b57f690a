//! Quiz command and query handlers.

mod get_quiz;
mod get_result;
mod reset_quiz;
mod start_quiz;
mod submit_answer;
mod view;

pub use get_quiz::{GetQuizHandler, GetQuizQuery};
pub use get_result::{GetResultHandler, GetResultQuery};
pub use reset_quiz::{ResetQuizCommand, ResetQuizHandler};
pub use start_quiz::StartQuizHandler;
pub use submit_answer::{SubmitAnswerCommand, SubmitAnswerHandler};
pub use view::QuizView;

use crate::domain::foundation::QuizSessionId;
use crate::domain::quiz::{QuizError, QuizState};
use crate::ports::QuizSessionStore;

async fn load_state(
    store: &dyn QuizSessionStore,
    id: &QuizSessionId,
) -> Result<QuizState, QuizError> {
    store
        .load(id)
        .await?
        .ok_or_else(|| QuizError::not_found(*id))
}
