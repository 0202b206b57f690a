//! Quiz module - questions, answers and the quiz flow state machine.

mod answers;
mod errors;
mod flow;
mod question;
mod state;

pub use answers::AnswerMap;
pub use errors::QuizError;
pub use flow::QuizFlow;
pub use question::{Question, QuestionBank, OPTIONS_PER_QUESTION};
pub use state::{QuizPhase, QuizState};
