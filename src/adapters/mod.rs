//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `ai` - Mistral chat completions and a scripted mock
//! - `http` - axum REST API
//! - `quiz_store` - In-memory quiz session storage

pub mod ai;
pub mod http;
pub mod quiz_store;

pub use quiz_store::InMemoryQuizSessionStore;
