//! In-Memory Quiz Session Store
//!
//! Keeps quiz run state in process memory. State is lost on restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, QuizSessionId};
use crate::domain::quiz::{QuizError, QuizState};
use crate::ports::{QuizSessionStore, QuizStateUpdate};

/// In-memory storage for quiz runs
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuizSessionStore {
    sessions: Arc<RwLock<HashMap<QuizSessionId, QuizState>>>,
}

impl InMemoryQuizSessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuizSessionStore for InMemoryQuizSessionStore {
    async fn create(&self, state: QuizState) -> Result<QuizSessionId, DomainError> {
        let id = QuizSessionId::new();
        self.sessions.write().await.insert(id, state);
        Ok(id)
    }

    async fn load(&self, id: &QuizSessionId) -> Result<Option<QuizState>, DomainError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn update(
        &self,
        id: &QuizSessionId,
        apply: QuizStateUpdate,
    ) -> Result<QuizState, QuizError> {
        // Held across the transition so concurrent updates serialize.
        let mut sessions = self.sessions.write().await;
        let slot = sessions.get_mut(id).ok_or(QuizError::NotFound(*id))?;

        let mut next = slot.clone();
        apply(&mut next)?;
        *slot = next.clone();

        Ok(next)
    }
}
