//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - chat completion service used for personality analysis
//! - `QuizSessionStore` - storage of quiz run state

mod ai_provider;
mod quiz_session_store;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use quiz_session_store::{QuizSessionStore, QuizStateUpdate};
