//! Settings Models
//!
//! Application configuration and settings data structures.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use copyforge_llm::{ProviderConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Application configuration stored in config.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote credential. Read from the file when present, never written back.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// Chat-completion endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Minimum gap between accepted generation attempts
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,
    /// Remote request timeout; 0 leaves it to the transport
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Sent as the `X-Title` header
    #[serde(default = "default_app_title")]
    pub app_title: String,
    /// Sent as the `HTTP-Referer` header when set
    #[serde(default)]
    pub referer: Option<String>,
    /// Where exported documents are written
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    1500
}

fn default_cooldown_ms() -> u64 {
    10_000
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_app_title() -> String {
    "AI Marketing Copy Generator".to_string()
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            cooldown_ms: default_cooldown_ms(),
            request_timeout_secs: default_request_timeout_secs(),
            app_title: default_app_title(),
            referer: None,
            export_dir: default_export_dir(),
        }
    }
}

/// Settings update request (partial update)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SettingsUpdate {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub cooldown_ms: Option<u64>,
    pub export_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Apply a partial update to the configuration
    pub fn apply_update(&mut self, update: SettingsUpdate) {
        if let Some(api_key) = update.api_key {
            self.api_key = Some(api_key);
        }
        if let Some(base_url) = update.base_url {
            self.base_url = base_url;
        }
        if let Some(model) = update.model {
            self.model = model;
        }
        if let Some(cooldown_ms) = update.cooldown_ms {
            self.cooldown_ms = cooldown_ms;
        }
        if let Some(export_dir) = update.export_dir {
            self.export_dir = export_dir;
        }
    }

    /// The credential, if one is configured. Blank means mock mode.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "Invalid temperature: {}. Must be between 0 and 2",
                self.temperature
            ));
        }

        if self.max_tokens == 0 {
            return Err("max_tokens must be at least 1".to_string());
        }

        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }

        if self.base_url.trim().is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        Ok(())
    }

    /// Provider configuration for the remote capability
    pub fn provider_config(&self) -> ProviderConfig {
        let mut headers = HashMap::new();
        headers.insert("X-Title".to_string(), self.app_title.clone());
        if let Some(referer) = self.referer.as_deref().filter(|r| !r.trim().is_empty()) {
            headers.insert("HTTP-Referer".to_string(), referer.to_string());
        }

        ProviderConfig {
            api_key: self.credential().map(str::to_string),
            base_url: Some(self.base_url.clone()),
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            request_timeout_secs: self.request_timeout_secs,
            headers,
        }
    }
}
