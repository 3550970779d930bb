//! Core Error Types
//!
//! Errors raised while building or reading domain values: inputs that fail
//! validation, text that names no template, or enum text that parses to
//! nothing. Only thiserror + std, so the core crate stays light.
//!
//! The application crate folds these into its own error type next to the
//! cooldown, busy and storage failures.

use thiserror::Error;

/// Core error type for the copyforge workspace.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Caller input malformed (missing required field)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Template id is not part of the compiled-in catalog
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// Enum value or input field name supplied as text that matches nothing
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type alias for core errors
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unknown_template(id: impl Into<String>) -> Self {
        Self::UnknownTemplate(id.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

impl From<CoreError> for String {
    fn from(err: CoreError) -> String {
        err.to_string()
    }
}
