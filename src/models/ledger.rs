//! Ledger Models
//!
//! Saved generations and the analytics derived from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use copyforge_core::{estimate_tokens, GenerationInputs, GenerationStats, TemplateId};

/// A generation the user explicitly saved. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedOutput {
    /// Millisecond timestamp, strictly increasing within a ledger
    pub id: u64,
    pub template_id: TemplateId,
    pub content: String,
    pub inputs_snapshot: GenerationInputs,
    pub created_at: DateTime<Utc>,
    pub stats_snapshot: GenerationStats,
}

impl SavedOutput {
    /// Rough token count of the saved content
    pub fn token_estimate(&self) -> u64 {
        estimate_tokens(&self.content)
    }
}

/// Share of saved outputs using one template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateUsage {
    pub template_id: TemplateId,
    pub display_name: String,
    pub count: usize,
    /// 0..=100; 0 for every template when nothing is saved
    pub percentage: f64,
}

/// Point-in-time view of generation stats and ledger usage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub request_count: u64,
    pub tokens_used: u64,
    pub last_elapsed_ms: u64,
    pub saved_count: usize,
    pub distribution: Vec<TemplateUsage>,
}
