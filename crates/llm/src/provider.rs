//! LLM Provider Trait
//!
//! Defines the common interface for chat-completion providers.

use async_trait::async_trait;

use super::types::{LlmError, LlmResponse, LlmResult, Message};

/// Trait that all chat-completion providers must implement.
///
/// The orchestrator only needs single, non-streaming completions, so that is
/// the whole contract. Implementations must be cheap to share behind an `Arc`.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Returns the provider name for identification.
    fn name(&self) -> &'static str;

    /// Returns the current model being used.
    fn model(&self) -> &str;

    /// Send a conversation and get a complete response.
    ///
    /// System instructions travel as the leading `MessageRole::System` message.
    async fn send_message(&self, messages: Vec<Message>) -> LlmResult<LlmResponse>;
}

/// Helper function to create an error for missing API key
pub fn missing_api_key_error(provider: &str) -> LlmError {
    LlmError::AuthenticationFailed {
        message: format!("API key not configured for {}", provider),
    }
}

/// Pull a human-readable message out of a non-2xx response body.
///
/// Looks for `{"error": {"message": ..}}`, then `{"message": ..}`, and
/// otherwise falls back to `API Error: <status>`.
pub fn extract_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(|m| m.as_str())
                .or_else(|| v.get("message").and_then(|m| m.as_str()))
                .map(str::to_string)
        })
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("API Error: {}", status))
}

/// Helper function to classify HTTP error status codes
pub fn parse_http_error(status: u16, body: &str, provider: &str) -> LlmError {
    let message = extract_error_message(status, body);
    match status {
        401 | 403 => LlmError::AuthenticationFailed {
            message: format!("{}: {}", provider, message),
        },
        429 => LlmError::RateLimited { message },
        400 | 404 | 422 => LlmError::InvalidRequest { message },
        500..=599 => LlmError::ServerError {
            message,
            status: Some(status),
        },
        _ => LlmError::Other { message },
    }
}
