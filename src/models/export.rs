//! Export Models

use serde::{Deserialize, Serialize};

/// A plain-text document ready to be written to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub filename: String,
    pub body: String,
}
