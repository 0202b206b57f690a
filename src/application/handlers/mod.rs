//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod analysis;
pub mod quiz;

pub use analysis::{
    AnalysisOutcome, AnalysisSettings, PersonalityAnalyzer, RawAnalysisCommand,
    RawAnalysisHandler, RAW_ANALYSIS_FALLBACK,
};
pub use quiz::{
    GetQuizHandler, GetQuizQuery, GetResultHandler, GetResultQuery, QuizView, ResetQuizCommand,
    ResetQuizHandler, StartQuizHandler, SubmitAnswerCommand, SubmitAnswerHandler,
};
