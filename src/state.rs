//! Application State
//!
//! One `AppState` holds everything a front end needs for a session: the
//! effective configuration, the generation orchestrator (cooldown and stats),
//! and the output ledger. State is in memory only.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use copyforge_core::{
    Clock, GenerationInputs, GenerationResult, GenerationStats, SystemClock, TemplateId,
};
use copyforge_llm::{LlmProvider, OpenAIProvider};

use crate::models::ledger::{AnalyticsSnapshot, SavedOutput};
use crate::models::settings::AppConfig;
use crate::services::generation::GenerationOrchestrator;
use crate::services::ledger::OutputLedger;
use crate::utils::error::{AppError, AppResult};

/// Application state shared by the command handlers
pub struct AppState {
    config: AppConfig,
    clock: Arc<dyn Clock>,
    orchestrator: GenerationOrchestrator,
    ledger: Arc<RwLock<OutputLedger>>,
    busy: AtomicBool,
}

/// Clears the busy flag when a generation ends, however it ends.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl AppState {
    /// Build state from configuration, wiring the remote provider when a
    /// credential is present.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        config.validate().map_err(AppError::validation)?;

        let provider: Option<Arc<dyn LlmProvider>> = if config.credential().is_some() {
            let provider = OpenAIProvider::new(config.provider_config())
                .map_err(|e| AppError::config(e.to_string()))?;
            info!(model = %config.model, "remote generation enabled");
            Some(Arc::new(provider))
        } else {
            warn!("no API key configured, running in mock mode");
            None
        };

        Ok(Self::with_parts(config, provider, Arc::new(SystemClock)))
    }

    /// Build state from explicit parts.
    pub fn with_parts(
        config: AppConfig,
        provider: Option<Arc<dyn LlmProvider>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let orchestrator = GenerationOrchestrator::new(provider, clock.clone())
            .with_cooldown_ms(config.cooldown_ms);
        let ledger = OutputLedger::new(clock.clone());
        Self {
            config,
            clock,
            orchestrator,
            ledger: Arc::new(RwLock::new(ledger)),
            busy: AtomicBool::new(false),
        }
    }

    /// Effective configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Whether results come from the remote capability when it works
    pub fn is_remote_enabled(&self) -> bool {
        self.orchestrator.has_remote()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Run one generation. A second call while one is in flight fails fast.
    pub async fn generate(
        &self,
        template_id: TemplateId,
        inputs: &GenerationInputs,
    ) -> AppResult<GenerationResult> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(AppError::busy("generation already in progress"));
        }
        let _guard = BusyGuard(&self.busy);

        Ok(self.orchestrator.generate(template_id, inputs).await?)
    }

    /// Cumulative generation stats
    pub async fn stats(&self) -> GenerationStats {
        self.orchestrator.stats().await
    }

    /// Save a result to the ledger with a snapshot of the current stats
    pub async fn save_output(
        &self,
        result: &GenerationResult,
        template_id: TemplateId,
        inputs: &GenerationInputs,
    ) -> SavedOutput {
        let stats = self.stats().await;
        let mut ledger = self.ledger.write().await;
        ledger.save(result, template_id, inputs, &stats)
    }

    /// Saved outputs, most recent first
    pub async fn saved_outputs(&self) -> Vec<SavedOutput> {
        self.ledger.read().await.list().to_vec()
    }

    /// One saved output by id
    pub async fn get_saved(&self, id: u64) -> AppResult<SavedOutput> {
        self.ledger
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("saved output {}", id)))
    }

    /// Most recently saved output
    pub async fn latest_saved(&self) -> AppResult<SavedOutput> {
        self.ledger
            .read()
            .await
            .latest()
            .cloned()
            .ok_or_else(|| AppError::not_found("no saved outputs"))
    }

    /// Stats and ledger usage in one view
    pub async fn analytics(&self) -> AnalyticsSnapshot {
        let stats = self.stats().await;
        self.ledger.read().await.analytics(&stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copyforge_core::{GenerationInputsBuilder, GenerationSource, ManualClock};

    fn mock_state() -> AppState {
        AppState::with_parts(AppConfig::default(), None, Arc::new(ManualClock::new(1_000)))
    }

    #[test]
    fn test_new_without_key_is_mock_mode() {
        let state = AppState::new(AppConfig::default()).unwrap();
        assert!(!state.is_remote_enabled());
    }

    #[test]
    fn test_new_with_key_enables_remote() {
        let mut config = AppConfig::default();
        config.api_key = Some("sk-test".to_string());
        let state = AppState::new(config).unwrap();
        assert!(state.is_remote_enabled());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = AppConfig::default();
        config.max_tokens = 0;
        assert!(AppState::new(config).is_err());
    }

    #[tokio::test]
    async fn test_generate_then_save() {
        let state = mock_state();
        let inputs = GenerationInputsBuilder::new("Acme").build().unwrap();

        let result = state
            .generate(TemplateId::EmailCampaign, &inputs)
            .await
            .unwrap();
        assert_eq!(result.source, GenerationSource::FallbackNoKey);
        assert!(!state.is_busy());

        let saved = state
            .save_output(&result, TemplateId::EmailCampaign, &inputs)
            .await;
        assert_eq!(saved.stats_snapshot.request_count, 1);
        assert_eq!(state.latest_saved().await.unwrap().id, saved.id);
        assert_eq!(state.get_saved(saved.id).await.unwrap().content, result.text);
    }

    #[tokio::test]
    async fn test_busy_flag_rejects_reentry() {
        let state = mock_state();
        state.busy.store(true, Ordering::SeqCst);
        let inputs = GenerationInputsBuilder::new("Acme").build().unwrap();

        let err = state
            .generate(TemplateId::SocialMedia, &inputs)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Busy(_)));
        assert_eq!(state.stats().await.request_count, 0);
    }

    #[tokio::test]
    async fn test_busy_flag_cleared_after_error() {
        let state = mock_state();
        let err = state
            .generate(TemplateId::SocialMedia, &GenerationInputs::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Generation(_)));
        assert!(!state.is_busy());
    }

    #[tokio::test]
    async fn test_get_saved_missing() {
        let state = mock_state();
        assert!(matches!(
            state.get_saved(9).await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }
}
