//! Generation Orchestrator
//!
//! Runs one generation attempt through the pipeline:
//!
//! `Validating -> RateCheck -> RemoteAttempt -> (Success | LocalFallback) -> StatsUpdate`
//!
//! Remote failures are never surfaced as errors. They degrade to local
//! synthesis and are reported through `GenerationResult::source` and the
//! attached notice. Only validation, cooldown and unknown-template failures
//! reach the caller.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn, Instrument};
use uuid::Uuid;

use copyforge_copywriting::{classify, render_template, synthesize};
use copyforge_core::{
    estimate_tokens, Clock, GenerationInputs, GenerationResult, GenerationSource,
    GenerationStats, TemplateId,
};
use copyforge_llm::{LlmError, LlmProvider, Message};

use super::rate_limit::RateLimitState;
use super::{GenerationError, GenerationOutcome};

/// Fixed persona sent as the system message on every remote call.
pub const SYSTEM_PERSONA: &str = "You are a skilled marketing copywriter specializing in high-converting content. Always provide actionable, specific, and engaging copy that drives results.";

/// Attached to results produced without a configured credential.
pub const FALLBACK_NO_KEY_NOTICE: &str =
    "No API key configured - showing sample content generated locally.";

/// Attached to results produced after a remote failure.
pub const FALLBACK_ERROR_NOTICE: &str =
    "API unavailable - showing sample content. Please check your API configuration.";

/// Default minimum gap between accepted attempts.
pub const DEFAULT_COOLDOWN_MS: u64 = 10_000;

/// Owns the cooldown clock and cumulative stats for one application state.
pub struct GenerationOrchestrator {
    provider: Option<Arc<dyn LlmProvider>>,
    clock: Arc<dyn Clock>,
    cooldown_ms: u64,
    rate_limit: Mutex<RateLimitState>,
    stats: Mutex<GenerationStats>,
}

impl GenerationOrchestrator {
    /// Create an orchestrator. `None` for the provider means mock mode.
    pub fn new(provider: Option<Arc<dyn LlmProvider>>, clock: Arc<dyn Clock>) -> Self {
        Self {
            provider,
            clock,
            cooldown_ms: DEFAULT_COOLDOWN_MS,
            rate_limit: Mutex::new(RateLimitState::default()),
            stats: Mutex::new(GenerationStats::default()),
        }
    }

    /// Override the cooldown window.
    pub fn with_cooldown_ms(mut self, cooldown_ms: u64) -> Self {
        self.cooldown_ms = cooldown_ms;
        self
    }

    pub fn cooldown_ms(&self) -> u64 {
        self.cooldown_ms
    }

    /// Whether a remote capability is configured.
    pub fn has_remote(&self) -> bool {
        self.provider.is_some()
    }

    /// Copy of the cumulative stats.
    pub async fn stats(&self) -> GenerationStats {
        *self.stats.lock().await
    }

    /// Copy of the cooldown state.
    pub async fn rate_limit_state(&self) -> RateLimitState {
        *self.rate_limit.lock().await
    }

    /// Generate copy for a template given by its wire name.
    pub async fn generate_named(
        &self,
        template_id: &str,
        inputs: &GenerationInputs,
    ) -> GenerationOutcome<GenerationResult> {
        let id: TemplateId = template_id
            .parse()
            .map_err(|_| GenerationError::UnknownTemplate(template_id.trim().to_string()))?;
        self.generate(id, inputs).await
    }

    /// Generate copy for one template.
    pub async fn generate(
        &self,
        template_id: TemplateId,
        inputs: &GenerationInputs,
    ) -> GenerationOutcome<GenerationResult> {
        let request_id = Uuid::new_v4().to_string();
        let span = tracing::info_span!("generate", request_id = %request_id, template = %template_id);
        self.run(request_id, template_id, inputs)
            .instrument(span)
            .await
    }

    async fn run(
        &self,
        request_id: String,
        template_id: TemplateId,
        inputs: &GenerationInputs,
    ) -> GenerationOutcome<GenerationResult> {
        inputs
            .validate()
            .map_err(|_| GenerationError::Validation("productName required".to_string()))?;

        let started_ms = self.clock.now_ms();
        {
            let mut gate = self.rate_limit.lock().await;
            if let Err(seconds_remaining) = gate.try_acquire(started_ms, self.cooldown_ms) {
                debug!(seconds_remaining, "rejected by cooldown");
                return Err(GenerationError::RateLimited { seconds_remaining });
            }
        }

        let (text, tokens, source, notice) = match &self.provider {
            Some(provider) => match self.attempt_remote(provider.as_ref(), template_id, inputs).await {
                Ok((text, tokens)) => (text, tokens, GenerationSource::Remote, None),
                Err(e) => {
                    warn!(error = %e, transport = e.is_transport(), "remote generation failed, using local synthesis");
                    let text = self.synthesize_locally(template_id, inputs);
                    let tokens = estimate_tokens(&text);
                    let notice = format!("{} (Generation failed: {})", FALLBACK_ERROR_NOTICE, e);
                    (text, tokens, GenerationSource::FallbackError, Some(notice))
                }
            },
            None => {
                warn!("no API key configured, generating sample content");
                let text = self.synthesize_locally(template_id, inputs);
                let tokens = estimate_tokens(&text);
                (
                    text,
                    tokens,
                    GenerationSource::FallbackNoKey,
                    Some(FALLBACK_NO_KEY_NOTICE.to_string()),
                )
            }
        };

        let elapsed_ms = self.clock.now_ms().saturating_sub(started_ms);
        let request_count = {
            let mut stats = self.stats.lock().await;
            stats.record(tokens, elapsed_ms);
            stats.request_count
        };

        info!(
            source = %source,
            tokens,
            elapsed_ms,
            request_count,
            "generation completed"
        );

        Ok(GenerationResult {
            request_id,
            text,
            tokens_estimate: tokens,
            elapsed_ms,
            source,
            notice,
        })
    }

    async fn attempt_remote(
        &self,
        provider: &dyn LlmProvider,
        template_id: TemplateId,
        inputs: &GenerationInputs,
    ) -> Result<(String, u64), LlmError> {
        let prompt = render_template(template_id, inputs);
        debug!(provider = provider.name(), model = provider.model(), prompt_chars = prompt.chars().count(), "rendered prompt");

        let response = provider
            .send_message(vec![Message::system(SYSTEM_PERSONA), Message::user(prompt)])
            .await?;

        let text = response.text().ok_or(LlmError::EmptyResponse)?.to_string();
        let tokens = response
            .reported_tokens()
            .map(u64::from)
            .unwrap_or_else(|| estimate_tokens(&text));
        Ok((text, tokens))
    }

    fn synthesize_locally(&self, template_id: TemplateId, inputs: &GenerationInputs) -> String {
        let content = classify(inputs);
        synthesize(template_id, inputs, &content)
    }
}
