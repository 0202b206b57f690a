//! Personality module - result model, fallback scoring, reply parsing.
//!
//! # Components
//!
//! - `PersonalityResult` - the profile shown to the quiz taker
//! - `KeywordScorer` - keyword-count fallback producing a 4-letter code
//! - `ResponseParser` - labelled-text reply to `PersonalityResult`
//! - `AnalysisPrompt` - prompt text sent to the language model
//!
//! Everything here is pure; the network call lives in the application layer.

mod keyword_scorer;
mod prompt;
mod response_parser;
mod result;

pub use keyword_scorer::{
    AxisScores, KeywordScorer, TraitLetter, FALLBACK_DESCRIPTION, FALLBACK_GROWTH_AREAS,
    FALLBACK_STRENGTHS, FALLBACK_TRAITS,
};
pub use prompt::{AnalysisPrompt, RAW_SYSTEM_INSTRUCTION, SYSTEM_INSTRUCTION};
pub use response_parser::ResponseParser;
pub use result::{
    PersonalityResult, DEFAULT_DESCRIPTION, DEFAULT_EMOJI, DEFAULT_GROWTH_AREAS,
    DEFAULT_STRENGTHS, DEFAULT_TITLE, DEFAULT_TRAITS, DEFAULT_TYPE,
};
