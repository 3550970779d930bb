//! Generation Orchestrator Integration Tests
//!
//! Drives `GenerationOrchestrator` and `AppState` through a scripted
//! `LlmProvider` and a `ManualClock`:
//! - Mock mode when no credential is configured
//! - Remote success, with and without reported usage
//! - Degradation to local synthesis on remote failure or empty output
//! - Cooldown and validation gates leaving state untouched
//! - Busy guard for overlapping generations

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use copyforge::models::settings::AppConfig;
use copyforge::services::generation::{
    GenerationError, GenerationOrchestrator, FALLBACK_ERROR_NOTICE, SYSTEM_PERSONA,
};
use copyforge::utils::error::AppError;
use copyforge::AppState;
use copyforge_core::{
    estimate_tokens, GenerationInputs, GenerationInputsBuilder, GenerationSource, ManualClock,
    TemplateId,
};
use copyforge_llm::{
    LlmError, LlmProvider, LlmResponse, LlmResult, Message, MessageRole, ProviderConfig,
};

// ============================================================================
// Scripted provider
// ============================================================================

#[derive(Clone)]
enum Script {
    Reply {
        text: &'static str,
        total_tokens: Option<u32>,
    },
    Empty,
    ServerError,
    NetworkError,
}

struct ScriptedProvider {
    config: ProviderConfig,
    script: Script,
    calls: AtomicUsize,
    seen: Mutex<Vec<Vec<Message>>>,
}

impl ScriptedProvider {
    fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            config: ProviderConfig::default(),
            script,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn send_message(&self, messages: Vec<Message>) -> LlmResult<LlmResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(messages);

        match &self.script {
            Script::Reply { text, total_tokens } => Ok(LlmResponse {
                content: Some(text.to_string()),
                total_tokens: *total_tokens,
            }),
            Script::Empty => Ok(LlmResponse {
                content: Some("   ".to_string()),
                total_tokens: None,
            }),
            Script::ServerError => Err(LlmError::ServerError {
                message: "upstream exploded".to_string(),
                status: Some(503),
            }),
            Script::NetworkError => Err(LlmError::NetworkError {
                message: "connection refused".to_string(),
            }),
        }
    }
}

fn acme_runner() -> GenerationInputs {
    GenerationInputsBuilder::new("Acme Runner")
        .category("Running Shoes")
        .features("carbon plate")
        .target_audience("marathoners")
        .build()
        .unwrap()
}

fn orchestrator(provider: Option<Arc<ScriptedProvider>>, clock: &ManualClock) -> GenerationOrchestrator {
    let provider = provider.map(|p| p as Arc<dyn LlmProvider>);
    GenerationOrchestrator::new(provider, Arc::new(clock.clone()))
}

// ============================================================================
// Mock mode
// ============================================================================

#[tokio::test]
async fn test_no_credential_produces_fallback_copy() {
    let clock = ManualClock::new(1_000);
    let orch = orchestrator(None, &clock);

    let result = orch
        .generate_named("product-description", &acme_runner())
        .await
        .unwrap();

    assert!(!result.text.is_empty());
    assert!(result.text.contains("Acme Runner"));
    assert_eq!(result.source, GenerationSource::FallbackNoKey);

    let stats = orch.stats().await;
    assert_eq!(stats.request_count, 1);
    assert_eq!(stats.tokens_used, estimate_tokens(&result.text));
    assert_eq!(stats.tokens_used, (result.text.chars().count() / 4) as u64);
}

// ============================================================================
// Cooldown and validation
// ============================================================================

#[tokio::test]
async fn test_second_call_inside_cooldown_is_rate_limited() {
    let clock = ManualClock::new(1_000);
    let orch = orchestrator(None, &clock);
    let inputs = acme_runner();

    orch.generate(TemplateId::EmailCampaign, &inputs).await.unwrap();
    let before = orch.stats().await;

    clock.advance(2_500);
    let err = orch
        .generate(TemplateId::EmailCampaign, &inputs)
        .await
        .unwrap_err();
    assert_eq!(err, GenerationError::RateLimited { seconds_remaining: 8 });
    assert_eq!(orch.stats().await, before);
    assert_eq!(orch.rate_limit_state().await.last_request_at_ms, Some(1_000));

    clock.advance(7_500);
    orch.generate(TemplateId::EmailCampaign, &inputs).await.unwrap();
    assert_eq!(orch.stats().await.request_count, 2);
}

#[test]
fn test_rate_limited_message() {
    let err = GenerationError::RateLimited { seconds_remaining: 3 };
    assert_eq!(err.to_string(), "Please wait 3 seconds before generating again");
}

#[tokio::test]
async fn test_blank_product_rejected_without_side_effects() {
    let clock = ManualClock::new(1_000);
    let provider = ScriptedProvider::new(Script::Reply {
        text: "never",
        total_tokens: None,
    });
    let orch = orchestrator(Some(provider.clone()), &clock);

    for name in ["", "   ", "\t\n"] {
        let inputs = GenerationInputs {
            product_name: name.to_string(),
            ..acme_runner()
        };
        let err = orch
            .generate(TemplateId::LandingPage, &inputs)
            .await
            .unwrap_err();
        assert_eq!(err, GenerationError::Validation("productName required".to_string()));
    }

    assert_eq!(orch.rate_limit_state().await.last_request_at_ms, None);
    assert_eq!(orch.stats().await.request_count, 0);
    assert_eq!(orch.stats().await.tokens_used, 0);
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_rate_limited_attempt_never_reaches_provider() {
    let clock = ManualClock::new(1_000);
    let provider = ScriptedProvider::new(Script::Reply {
        text: "Remote copy",
        total_tokens: Some(10),
    });
    let orch = orchestrator(Some(provider.clone()), &clock);

    orch.generate(TemplateId::SocialMedia, &acme_runner()).await.unwrap();
    assert!(orch.generate(TemplateId::SocialMedia, &acme_runner()).await.is_err());
    assert_eq!(provider.calls(), 1);
}

// ============================================================================
// Remote path
// ============================================================================

#[tokio::test]
async fn test_remote_success_uses_reported_tokens() {
    let clock = ManualClock::new(1_000);
    let provider = ScriptedProvider::new(Script::Reply {
        text: "Remote copy for Acme Runner",
        total_tokens: Some(321),
    });
    let orch = orchestrator(Some(provider.clone()), &clock);

    let result = orch
        .generate(TemplateId::ProductDescription, &acme_runner())
        .await
        .unwrap();

    assert_eq!(result.source, GenerationSource::Remote);
    assert_eq!(result.text, "Remote copy for Acme Runner");
    assert_eq!(result.tokens_estimate, 321);
    assert!(result.notice.is_none());
    assert_eq!(orch.stats().await.tokens_used, 321);

    let seen = provider.seen.lock().unwrap();
    let messages = &seen[0];
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0], Message::system(SYSTEM_PERSONA));
    assert_eq!(messages[1].role, MessageRole::User);
    assert!(messages[1].content.contains("compelling product description for Acme Runner"));
    assert!(messages[1].content.contains("Running Shoes category"));
    assert!(!messages[1].content.contains("{productName}"));
}

#[tokio::test]
async fn test_remote_success_without_usage_estimates_tokens() {
    let clock = ManualClock::new(1_000);
    let provider = ScriptedProvider::new(Script::Reply {
        text: "abcdefghijklmnop",
        total_tokens: None,
    });
    let orch = orchestrator(Some(provider), &clock);

    let result = orch
        .generate(TemplateId::PressRelease, &acme_runner())
        .await
        .unwrap();
    assert_eq!(result.source, GenerationSource::Remote);
    assert_eq!(result.tokens_estimate, 4);
}

#[tokio::test]
async fn test_empty_remote_result_falls_back() {
    let clock = ManualClock::new(1_000);
    let orch = orchestrator(Some(ScriptedProvider::new(Script::Empty)), &clock);

    let result = orch
        .generate(TemplateId::SocialMedia, &acme_runner())
        .await
        .unwrap();

    assert_eq!(result.source, GenerationSource::FallbackError);
    assert!(result.text.contains("Acme Runner"));
    let notice = result.notice.unwrap();
    assert!(notice.starts_with(FALLBACK_ERROR_NOTICE));
    assert!(notice.contains("No content generated from API"));
}

#[tokio::test]
async fn test_remote_failures_degrade_and_still_count() {
    for script in [Script::ServerError, Script::NetworkError] {
        let clock = ManualClock::new(1_000);
        let orch = orchestrator(Some(ScriptedProvider::new(script)), &clock);

        let result = orch
            .generate(TemplateId::EmailCampaign, &acme_runner())
            .await
            .unwrap();

        assert_eq!(result.source, GenerationSource::FallbackError);
        assert!(result.source.is_degraded());
        assert!(result.text.contains("The Acme Runner Team"));
        let stats = orch.stats().await;
        assert_eq!(stats.request_count, 1);
        assert_eq!(stats.tokens_used, estimate_tokens(&result.text));
    }
}

#[tokio::test]
async fn test_stats_accumulate_across_paths() {
    let clock = ManualClock::new(1_000);
    let provider = ScriptedProvider::new(Script::Reply {
        text: "Remote copy",
        total_tokens: Some(50),
    });
    let orch = orchestrator(Some(provider), &clock).with_cooldown_ms(0);

    let mut last_tokens = 0;
    for id in TemplateId::ALL {
        orch.generate(id, &acme_runner()).await.unwrap();
        let stats = orch.stats().await;
        assert!(stats.tokens_used >= last_tokens);
        last_tokens = stats.tokens_used;
    }
    let stats = orch.stats().await;
    assert_eq!(stats.request_count, 5);
    assert_eq!(stats.tokens_used, 250);
}

#[tokio::test]
async fn test_unknown_template_name() {
    let clock = ManualClock::new(1_000);
    let orch = orchestrator(None, &clock);
    let err = orch
        .generate_named("blog-post", &acme_runner())
        .await
        .unwrap_err();
    assert_eq!(err, GenerationError::UnknownTemplate("blog-post".to_string()));
}

#[tokio::test]
async fn test_cooldown_per_state_instance() {
    let clock = ManualClock::new(1_000);
    let first = orchestrator(None, &clock);
    let second = orchestrator(None, &clock);

    first.generate(TemplateId::SocialMedia, &acme_runner()).await.unwrap();
    second.generate(TemplateId::SocialMedia, &acme_runner()).await.unwrap();
    assert_eq!(first.stats().await.request_count, 1);
    assert_eq!(second.stats().await.request_count, 1);
}

// ============================================================================
// Busy guard
// ============================================================================

struct GatedProvider {
    config: ProviderConfig,
    entered: Arc<Notify>,
    release: Arc<Notify>,
}

#[async_trait]
impl LlmProvider for GatedProvider {
    fn name(&self) -> &'static str {
        "gated"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn send_message(&self, _messages: Vec<Message>) -> LlmResult<LlmResponse> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(LlmResponse {
            content: Some("Gated copy".to_string()),
            total_tokens: None,
        })
    }
}

#[tokio::test]
async fn test_overlapping_generation_is_refused() {
    let entered = Arc::new(Notify::new());
    let release = Arc::new(Notify::new());
    let provider: Arc<dyn LlmProvider> = Arc::new(GatedProvider {
        config: ProviderConfig::default(),
        entered: entered.clone(),
        release: release.clone(),
    });
    let config = AppConfig {
        cooldown_ms: 0,
        ..Default::default()
    };
    let state = Arc::new(AppState::with_parts(
        config,
        Some(provider),
        Arc::new(ManualClock::new(1_000)),
    ));

    let inputs = acme_runner();
    let background = {
        let state = state.clone();
        let inputs = inputs.clone();
        tokio::spawn(async move { state.generate(TemplateId::LandingPage, &inputs).await })
    };

    entered.notified().await;
    assert!(state.is_busy());
    let err = state
        .generate(TemplateId::LandingPage, &inputs)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Busy(_)));

    release.notify_one();
    let result = background.await.unwrap().unwrap();
    assert_eq!(result.source, GenerationSource::Remote);
    assert!(!state.is_busy());
    assert_eq!(state.stats().await.request_count, 1);
}
