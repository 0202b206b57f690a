//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for one quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizSessionId(Uuid);

impl QuizSessionId {
    /// Creates a new random QuizSessionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for QuizSessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QuizSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QuizSessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}
