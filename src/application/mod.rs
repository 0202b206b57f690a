//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    // Analysis
    AnalysisOutcome, AnalysisSettings, PersonalityAnalyzer, RawAnalysisCommand,
    RawAnalysisHandler,
    // Quiz handlers
    GetQuizHandler, GetQuizQuery, GetResultHandler, GetResultQuery, QuizView, ResetQuizCommand,
    ResetQuizHandler, StartQuizHandler, SubmitAnswerCommand, SubmitAnswerHandler,
};
