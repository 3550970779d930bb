//! Generation Service
//!
//! The orchestrator that turns a template id and inputs into copy, plus the
//! cooldown gate it owns.

pub mod orchestrator;
pub mod rate_limit;

use thiserror::Error;

pub use orchestrator::{GenerationOrchestrator, FALLBACK_ERROR_NOTICE, FALLBACK_NO_KEY_NOTICE, SYSTEM_PERSONA};
pub use rate_limit::RateLimitState;

/// Failures that stop a generation from producing any output.
///
/// Remote failures never appear here; they degrade to local synthesis.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Please wait {seconds_remaining} seconds before generating again")]
    RateLimited { seconds_remaining: u64 },

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),
}

/// Result type for generation operations
pub type GenerationOutcome<T> = Result<T, GenerationError>;
