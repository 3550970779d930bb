//! Ledger Commands
//!
//! Saving, listing and exporting saved outputs, plus analytics.

use std::path::PathBuf;

use copyforge_core::{GenerationInputs, GenerationResult, TemplateId};

use crate::models::ledger::{AnalyticsSnapshot, SavedOutput};
use crate::models::response::CommandResponse;
use crate::services::export::{export_saved, write_export};
use crate::state::AppState;

/// Save a generation result
pub async fn save_output(
    state: &AppState,
    result: &GenerationResult,
    template_id: TemplateId,
    inputs: &GenerationInputs,
) -> CommandResponse<SavedOutput> {
    CommandResponse::ok(state.save_output(result, template_id, inputs).await)
}

/// All saved outputs, most recent first
pub async fn list_saved(state: &AppState) -> CommandResponse<Vec<SavedOutput>> {
    CommandResponse::ok(state.saved_outputs().await)
}

/// One saved output
pub async fn get_saved(state: &AppState, id: u64) -> CommandResponse<SavedOutput> {
    state.get_saved(id).await.into()
}

/// Stats plus template usage distribution
pub async fn get_analytics(state: &AppState) -> CommandResponse<AnalyticsSnapshot> {
    CommandResponse::ok(state.analytics().await)
}

/// Write a saved output to the configured export directory
pub async fn export_saved_output(state: &AppState, id: u64) -> CommandResponse<PathBuf> {
    match state.get_saved(id).await {
        Ok(saved) => write_export(&state.config().export_dir, &export_saved(&saved)).into(),
        Err(e) => CommandResponse::err(e.to_string()),
    }
}
