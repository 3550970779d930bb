//! Generation Commands
//!
//! Commands that run the generation pipeline and export its output.

use std::path::PathBuf;

use chrono::{TimeZone, Utc};

use copyforge_core::{GenerationInputs, GenerationResult, GenerationStats, TemplateId};

use crate::models::response::CommandResponse;
use crate::services::export::{export_generation, write_export};
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

/// Generate copy for a template given by its wire name
pub async fn generate_copy(
    state: &AppState,
    template_id: &str,
    inputs: &GenerationInputs,
) -> CommandResponse<GenerationResult> {
    let id: TemplateId = match template_id.parse() {
        Ok(id) => id,
        Err(e) => return CommandResponse::err(AppError::from(e).to_string()),
    };
    state.generate(id, inputs).await.into()
}

/// Cumulative generation stats
pub async fn get_stats(state: &AppState) -> CommandResponse<GenerationStats> {
    CommandResponse::ok(state.stats().await)
}

/// Write generated content to the configured export directory
pub fn export_content(
    state: &AppState,
    template_id: TemplateId,
    content: &str,
) -> CommandResponse<PathBuf> {
    write_generation(state, template_id, content).into()
}

/// Export generated content, returning the written path
pub(crate) fn write_generation(state: &AppState, template_id: TemplateId, content: &str) -> AppResult<PathBuf> {
    let now_ms = state.clock().now_ms() as i64;
    let now = Utc
        .timestamp_millis_opt(now_ms)
        .single()
        .ok_or_else(|| AppError::internal("clock out of range"))?;
    let doc = export_generation(template_id, content, now);
    write_export(&state.config().export_dir, &doc)
}
