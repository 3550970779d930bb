//! LLM Types
//!
//! Core types for chat-completion provider interactions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default chat-completion endpoint (OpenRouter, OpenAI-compatible).
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Default model routed through the endpoint.
pub const DEFAULT_MODEL: &str = "openai/gpt-3.5-turbo";

/// Configuration for a chat-completion provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Bearer credential. Never serialized.
    #[serde(skip_serializing, default)]
    pub api_key: Option<String>,
    /// Endpoint override (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Model name to use
    pub model: String,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Whole-request timeout enforced by the HTTP client
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Extra headers sent with every request (e.g. `X-Title`, `HTTP-Referer`)
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

fn default_max_tokens() -> u32 {
    1500
}

fn default_temperature() -> f32 {
    0.7
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            request_timeout_secs: default_timeout_secs(),
            headers: HashMap::new(),
        }
    }
}

impl ProviderConfig {
    /// The credential, if one is configured and not blank.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

/// Who a chat message speaks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
}

/// One chat message, serialized exactly as the wire expects it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    /// Instructions that frame the whole exchange
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: text.into(),
        }
    }
}

/// Completion returned by a provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmResponse {
    /// Text of the first choice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// `usage.total_tokens`, when the provider reported it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<u32>,
}

impl LlmResponse {
    /// Text content when present and not blank.
    pub fn text(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.trim().is_empty())
    }

    /// Provider-reported token total, ignoring a zero count.
    pub fn reported_tokens(&self) -> Option<u32> {
        self.total_tokens.filter(|t| *t > 0)
    }
}

/// Error types for LLM operations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LlmError {
    /// Authentication failed (invalid API key)
    AuthenticationFailed { message: String },
    /// Rate limit exceeded on the provider side
    RateLimited { message: String },
    /// Invalid request (bad parameters)
    InvalidRequest { message: String },
    /// Server error from the provider
    ServerError {
        message: String,
        status: Option<u16>,
    },
    /// Network/connection error (including timeouts)
    NetworkError { message: String },
    /// Response parsing error
    ParseError { message: String },
    /// Well-formed response that carried no text
    EmptyResponse,
    /// Other error
    Other { message: String },
}

impl LlmError {
    /// Whether the failure happened before a response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(self, LlmError::NetworkError { .. })
    }
}

impl std::fmt::Display for LlmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LlmError::AuthenticationFailed { message } => {
                write!(f, "Authentication failed: {}", message)
            }
            LlmError::RateLimited { message } => {
                write!(f, "Rate limited: {}", message)
            }
            LlmError::InvalidRequest { message } => {
                write!(f, "Invalid request: {}", message)
            }
            LlmError::ServerError { message, status } => {
                if let Some(s) = status {
                    write!(f, "Server error ({}): {}", s, message)
                } else {
                    write!(f, "Server error: {}", message)
                }
            }
            LlmError::NetworkError { message } => {
                write!(f, "Network error: {}", message)
            }
            LlmError::ParseError { message } => {
                write!(f, "Parse error: {}", message)
            }
            LlmError::EmptyResponse => write!(f, "No content generated from API"),
            LlmError::Other { message } => {
                write!(f, "Error: {}", message)
            }
        }
    }
}

impl std::error::Error for LlmError {}

/// Result type for LLM operations
pub type LlmResult<T> = Result<T, LlmError>;
