//! Analysis handlers.
//!
//! Language-model personality analysis with keyword fallback.

mod personality_analyzer;
mod raw_analysis;

pub use personality_analyzer::{
    AnalysisOutcome, AnalysisSettings, PersonalityAnalyzer, RAW_ANALYSIS_FALLBACK,
};
pub use raw_analysis::{RawAnalysisCommand, RawAnalysisHandler};
