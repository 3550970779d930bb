//! Copyforge - Marketing Copy Generation
//!
//! Application library behind the `copyforge` binary. It includes:
//! - Command handlers for front ends
//! - The generation orchestrator and output ledger
//! - Config storage
//! - Data models and utilities

pub mod commands;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

pub use commands::{
    export_content, export_saved_output, generate_copy, get_analytics, get_saved, get_stats,
    list_saved, list_templates, render_prompt, save_output,
};
pub use models::response::*;
pub use models::settings::{AppConfig, SettingsUpdate};
pub use services::generation::{GenerationError, GenerationOrchestrator};
pub use services::ledger::OutputLedger;
pub use state::AppState;
