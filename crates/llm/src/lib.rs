//! Copyforge LLM
//!
//! Provides the remote text-generation capability consumed by the generation
//! orchestrator: a provider trait, an OpenAI-compatible implementation
//! (OpenRouter by default), wire types, and the HTTP client factory.

pub mod http_client;
pub mod openai;
pub mod provider;
pub mod types;

// Re-export main types
pub use http_client::build_http_client;
pub use openai::OpenAIProvider;
pub use provider::{extract_error_message, LlmProvider};
pub use types::*;
