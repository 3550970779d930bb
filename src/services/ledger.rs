//! Output Ledger
//!
//! In-memory, most-recent-first list of saved generations and the usage
//! analytics derived from it. Nothing here survives a restart.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use tracing::debug;

use copyforge_copywriting::all_templates;
use copyforge_core::{Clock, GenerationInputs, GenerationResult, GenerationStats, SystemClock, TemplateId};

use crate::models::ledger::{AnalyticsSnapshot, SavedOutput, TemplateUsage};

/// Append-only store of saved outputs.
pub struct OutputLedger {
    entries: Vec<SavedOutput>,
    clock: Arc<dyn Clock>,
    last_id: u64,
}

impl OutputLedger {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Vec::new(),
            clock,
            last_id: 0,
        }
    }

    /// Save a generation. Inputs and stats are copied, never aliased.
    pub fn save(
        &mut self,
        result: &GenerationResult,
        template_id: TemplateId,
        inputs: &GenerationInputs,
        stats: &GenerationStats,
    ) -> SavedOutput {
        let now_ms = self.clock.now_ms();
        let id = now_ms.max(self.last_id + 1);
        self.last_id = id;

        let created_at = Utc
            .timestamp_millis_opt(now_ms as i64)
            .single()
            .unwrap_or_else(Utc::now);

        let saved = SavedOutput {
            id,
            template_id,
            content: result.text.clone(),
            inputs_snapshot: inputs.clone(),
            created_at,
            stats_snapshot: *stats,
        };
        self.entries.insert(0, saved.clone());
        debug!(id, template = %template_id, total = self.entries.len(), "saved output");
        saved
    }

    /// All entries, most recent first.
    pub fn list(&self) -> &[SavedOutput] {
        &self.entries
    }

    pub fn get(&self, id: u64) -> Option<&SavedOutput> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn latest(&self) -> Option<&SavedOutput> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Percentage of saved outputs per template, 0 everywhere when empty.
    pub fn usage_distribution(&self) -> HashMap<TemplateId, f64> {
        self.template_usage()
            .into_iter()
            .map(|u| (u.template_id, u.percentage))
            .collect()
    }

    /// Per-template usage in catalog order.
    pub fn template_usage(&self) -> Vec<TemplateUsage> {
        let total = self.entries.len();
        all_templates()
            .iter()
            .map(|t| {
                let count = self.entries.iter().filter(|e| e.template_id == t.id).count();
                let percentage = if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64 * 100.0
                };
                TemplateUsage {
                    template_id: t.id,
                    display_name: t.display_name.to_string(),
                    count,
                    percentage,
                }
            })
            .collect()
    }

    /// Stats plus usage distribution in one view.
    pub fn analytics(&self, stats: &GenerationStats) -> AnalyticsSnapshot {
        AnalyticsSnapshot {
            request_count: stats.request_count,
            tokens_used: stats.tokens_used,
            last_elapsed_ms: stats.last_elapsed_ms,
            saved_count: self.entries.len(),
            distribution: self.template_usage(),
        }
    }
}

impl Default for OutputLedger {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}
