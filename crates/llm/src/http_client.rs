//! HTTP Client Factory
//!
//! Provides a factory function for building reqwest clients with a bounded
//! request timeout.

use std::time::Duration;

use crate::types::{LlmError, LlmResult, ProviderConfig};

/// Build a `reqwest::Client` for the given provider configuration.
///
/// A `request_timeout_secs` of 0 leaves the timeout to the transport.
pub fn build_http_client(config: &ProviderConfig) -> LlmResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if config.request_timeout_secs > 0 {
        builder = builder.timeout(Duration::from_secs(config.request_timeout_secs));
    }
    builder.build().map_err(|e| LlmError::Other {
        message: format!("failed to build HTTP client: {}", e),
    })
}
