//! Response Envelope
//!
//! Every command handler answers with a `CommandResponse`, so front ends
//! check one `success` flag whatever the command did.

use serde::{Deserialize, Serialize};

use crate::utils::error::AppError;

/// Outcome of one command: data on success, a display message otherwise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// Back to a plain `Result`, keeping the display message as the error.
    pub fn into_result(self) -> Result<T, String> {
        match self.data {
            Some(data) if self.success => Ok(data),
            _ => Err(self
                .error
                .unwrap_or_else(|| "command returned no data".to_string())),
        }
    }
}

impl<T, E> From<Result<T, E>> for CommandResponse<T>
where
    E: Into<AppError>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::err(e.into().to_string()),
        }
    }
}
