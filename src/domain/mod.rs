//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `quiz` - Questions, answers and the quiz flow controller
//! - `personality` - Personality results, keyword fallback and reply parsing

pub mod foundation;
pub mod personality;
pub mod quiz;
