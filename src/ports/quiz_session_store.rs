//! Quiz session store port.
//!
//! Holds the `QuizState` of every in-progress or completed quiz run,
//! keyed by `QuizSessionId`.

use crate::domain::foundation::{DomainError, QuizSessionId};
use crate::domain::quiz::{QuizError, QuizState};
use async_trait::async_trait;

/// A transition applied to one stored quiz state.
///
/// Returning an error leaves the stored state unchanged.
pub type QuizStateUpdate = Box<dyn FnOnce(&mut QuizState) -> Result<(), QuizError> + Send>;

/// Storage port for quiz run state.
///
/// Implementations must run `update` atomically per quiz run: two updates
/// of the same run never interleave and neither overwrites the other.
#[async_trait]
pub trait QuizSessionStore: Send + Sync {
    /// Store a new quiz state under a fresh id.
    async fn create(&self, state: QuizState) -> Result<QuizSessionId, DomainError>;

    /// Load the state of a quiz run.
    ///
    /// Returns `None` if not found.
    async fn load(&self, id: &QuizSessionId) -> Result<Option<QuizState>, DomainError>;

    /// Apply a transition to the current state of a quiz run and return the
    /// state it produced.
    ///
    /// # Errors
    ///
    /// - `QuizError::NotFound` if no run with this id exists
    /// - whatever error `apply` returns
    async fn update(
        &self,
        id: &QuizSessionId,
        apply: QuizStateUpdate,
    ) -> Result<QuizState, QuizError>;
}
