//! Template Commands
//!
//! Catalog listing and prompt rendering.

use serde::Serialize;

use copyforge_copywriting::{all_templates, get_template, placeholders, preview, render_template};
use copyforge_core::GenerationInputs;

use crate::models::response::CommandResponse;
use crate::utils::error::AppError;

/// Characters of body shown in listings
pub const PREVIEW_CHARS: usize = 150;

/// Catalog entry as shown to users
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    pub id: String,
    pub display_name: String,
    pub category: String,
    pub methodology: String,
    pub placeholders: Vec<String>,
    pub preview: String,
}

/// List every template in display order
pub fn list_templates() -> CommandResponse<Vec<TemplateSummary>> {
    let summaries = all_templates()
        .iter()
        .map(|t| TemplateSummary {
            id: t.id.to_string(),
            display_name: t.display_name.to_string(),
            category: t.category.to_string(),
            methodology: t.methodology.to_string(),
            placeholders: placeholders(t.body),
            preview: preview(t.id, PREVIEW_CHARS),
        })
        .collect();
    CommandResponse::ok(summaries)
}

/// Render the prompt a template would send for these inputs
pub fn render_prompt(template_id: &str, inputs: &GenerationInputs) -> CommandResponse<String> {
    match get_template(template_id) {
        Ok(template) => CommandResponse::ok(render_template(template.id, inputs)),
        Err(e) => CommandResponse::err(AppError::from(e).to_string()),
    }
}
