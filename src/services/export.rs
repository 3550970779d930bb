//! Export Service
//!
//! Plain-text export of generated and saved copy. The document is a single
//! header line, a blank line, then the content verbatim.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::info;

use copyforge_copywriting::template;
use copyforge_core::TemplateId;

use crate::models::export::ExportDocument;
use crate::models::ledger::SavedOutput;
use crate::utils::error::{AppError, AppResult};
use crate::utils::paths::ensure_dir;

const HEADER_MARKER: &str = " - Generated ";

fn header(template_id: TemplateId, at: &DateTime<Utc>) -> String {
    format!(
        "{}{}{}",
        template(template_id).display_name,
        HEADER_MARKER,
        at.format("%Y-%m-%d")
    )
}

/// Export a fresh generation as `marketing-copy-<id>-<unix ms>.txt`.
pub fn export_generation(template_id: TemplateId, content: &str, now: DateTime<Utc>) -> ExportDocument {
    ExportDocument {
        filename: format!(
            "marketing-copy-{}-{}.txt",
            template_id,
            now.timestamp_millis()
        ),
        body: format!("{}\n\n{}", header(template_id, &now), content),
    }
}

/// Export a ledger entry as `saved-output-<id>.txt`.
pub fn export_saved(saved: &SavedOutput) -> ExportDocument {
    ExportDocument {
        filename: format!("saved-output-{}.txt", saved.id),
        body: format!(
            "{}\n\n{}",
            header(saved.template_id, &saved.created_at),
            saved.content
        ),
    }
}

/// Recover the content from an exported document.
pub fn parse_export(body: &str) -> AppResult<&str> {
    let (header, content) = body
        .split_once("\n\n")
        .ok_or_else(|| AppError::validation("export is missing its header"))?;
    if !header.contains(HEADER_MARKER) {
        return Err(AppError::validation(format!(
            "unrecognized export header: {}",
            header
        )));
    }
    Ok(content)
}

/// Write a document into `dir`, creating the directory if needed.
pub fn write_export(dir: &Path, doc: &ExportDocument) -> AppResult<PathBuf> {
    ensure_dir(dir)?;
    let path = dir.join(&doc.filename);
    fs::write(&path, &doc.body)?;
    info!(path = %path.display(), bytes = doc.body.len(), "exported copy");
    Ok(path)
}
