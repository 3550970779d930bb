//! Generation Results and Statistics
//!
//! Types produced by one generation attempt and the cumulative counters kept
//! across attempts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which path produced the text of a `GenerationResult`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationSource {
    /// The remote chat-completion service answered.
    Remote,
    /// No credential configured; local synthesis ran directly.
    FallbackNoKey,
    /// The remote attempt failed; local synthesis ran instead.
    FallbackError,
}

impl GenerationSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationSource::Remote => "remote",
            GenerationSource::FallbackNoKey => "fallback-no-key",
            GenerationSource::FallbackError => "fallback-error",
        }
    }

    /// Whether the caller should show a degraded-service notice.
    pub fn is_degraded(&self) -> bool {
        !matches!(self, GenerationSource::Remote)
    }
}

impl fmt::Display for GenerationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of one completed (possibly degraded) generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    /// Correlation id, also attached to the tracing span of the attempt.
    pub request_id: String,
    pub text: String,
    pub tokens_estimate: u64,
    pub elapsed_ms: u64,
    pub source: GenerationSource,
    /// Advisory message for degraded results (the remote failure, or mock mode).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notice: Option<String>,
}

/// Cumulative counters across all completed generation attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationStats {
    pub tokens_used: u64,
    pub last_elapsed_ms: u64,
    pub request_count: u64,
}

impl GenerationStats {
    /// Fold one completed attempt into the counters.
    pub fn record(&mut self, tokens: u64, elapsed_ms: u64) {
        self.request_count += 1;
        self.tokens_used = self.tokens_used.saturating_add(tokens);
        self.last_elapsed_ms = elapsed_ms;
    }
}

/// Rough token estimate used whenever a real usage count is unavailable:
/// one token per four characters, rounded down.
pub fn estimate_tokens(text: &str) -> u64 {
    (text.chars().count() / 4) as u64
}
