//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port.
//!
//! ## Available Adapters
//!
//! - `MistralProvider` - Mistral chat completions API
//! - `MockAIProvider` - Configurable mock for testing

mod mistral_provider;
mod mock_provider;

pub use mistral_provider::{
    MistralConfig, MistralProvider, DEFAULT_MISTRAL_BASE_URL, DEFAULT_MISTRAL_MODEL,
};
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
