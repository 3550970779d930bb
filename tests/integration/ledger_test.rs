//! Output Ledger Integration Tests
//!
//! Verifies saving through the command layer:
//! - Saved entries carry copies of inputs and stats at save time
//! - Listing is most recent first and ids strictly increase
//! - Analytics distribution sums to 100 once anything is saved

use std::sync::Arc;

use copyforge::models::settings::AppConfig;
use copyforge::{
    export_saved_output, generate_copy, get_analytics, get_saved, list_saved, save_output,
    AppState,
};
use copyforge_core::{GenerationInputsBuilder, ManualClock, TemplateId};

fn mock_state(clock: &ManualClock, export_dir: std::path::PathBuf) -> AppState {
    let config = AppConfig {
        cooldown_ms: 0,
        export_dir,
        ..Default::default()
    };
    AppState::with_parts(config, None, Arc::new(clock.clone()))
}

// ============================================================================
// Save and list
// ============================================================================

#[tokio::test]
async fn test_saved_entries_are_snapshots() {
    let temp = tempfile::tempdir().unwrap();
    let clock = ManualClock::new(50_000);
    let state = mock_state(&clock, temp.path().to_path_buf());
    let mut inputs = GenerationInputsBuilder::new("Acme Runner")
        .category("Running Shoes")
        .build()
        .unwrap();

    let result = generate_copy(&state, "social-media", &inputs).await.data.unwrap();
    let saved = save_output(&state, &result, TemplateId::SocialMedia, &inputs)
        .await
        .data
        .unwrap();

    inputs.product_name = "Renamed".to_string();
    generate_copy(&state, "social-media", &inputs).await.data.unwrap();

    let stored = get_saved(&state, saved.id).await.data.unwrap();
    assert_eq!(stored.inputs_snapshot.product_name, "Acme Runner");
    assert_eq!(stored.stats_snapshot.request_count, 1);
    assert_eq!(stored.content, result.text);
    assert_eq!(stored.created_at.timestamp_millis(), 50_000);
}

#[tokio::test]
async fn test_list_is_most_recent_first_with_unique_ids() {
    let temp = tempfile::tempdir().unwrap();
    let clock = ManualClock::new(1_000);
    let state = mock_state(&clock, temp.path().to_path_buf());
    let inputs = GenerationInputsBuilder::new("Acme").build().unwrap();

    let result = generate_copy(&state, "email-campaign", &inputs).await.data.unwrap();
    let first = save_output(&state, &result, TemplateId::EmailCampaign, &inputs).await.data.unwrap();
    // Same instant: the id still moves forward.
    let second = save_output(&state, &result, TemplateId::EmailCampaign, &inputs).await.data.unwrap();
    clock.advance(10);
    let third = save_output(&state, &result, TemplateId::PressRelease, &inputs).await.data.unwrap();

    assert!(first.id < second.id && second.id < third.id);
    let ids: Vec<u64> = list_saved(&state)
        .await
        .data
        .unwrap()
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, vec![third.id, second.id, first.id]);
}

#[tokio::test]
async fn test_get_missing_saved_output() {
    let temp = tempfile::tempdir().unwrap();
    let state = mock_state(&ManualClock::new(1_000), temp.path().to_path_buf());
    let response = get_saved(&state, 77).await;
    assert!(!response.success);
    assert!(response.error.unwrap().contains("77"));
}

// ============================================================================
// Analytics
// ============================================================================

#[tokio::test]
async fn test_analytics_distribution() {
    let temp = tempfile::tempdir().unwrap();
    let clock = ManualClock::new(1_000);
    let state = mock_state(&clock, temp.path().to_path_buf());

    let empty = get_analytics(&state).await.data.unwrap();
    assert_eq!(empty.saved_count, 0);
    assert!(empty.distribution.iter().all(|u| u.percentage == 0.0));

    let inputs = GenerationInputsBuilder::new("Acme").build().unwrap();
    let result = generate_copy(&state, "landing-page", &inputs).await.data.unwrap();
    for id in [TemplateId::LandingPage, TemplateId::LandingPage, TemplateId::LandingPage, TemplateId::EmailCampaign] {
        clock.advance(1);
        save_output(&state, &result, id, &inputs).await;
    }

    let snapshot = get_analytics(&state).await.data.unwrap();
    assert_eq!(snapshot.saved_count, 4);
    assert_eq!(snapshot.request_count, 1);
    let total: f64 = snapshot.distribution.iter().map(|u| u.percentage).sum();
    assert!((total - 100.0).abs() < 1e-9);

    let landing = snapshot
        .distribution
        .iter()
        .find(|u| u.template_id == TemplateId::LandingPage)
        .unwrap();
    assert_eq!(landing.count, 3);
    assert!((landing.percentage - 75.0).abs() < 1e-9);
}

// ============================================================================
// Export
// ============================================================================

#[tokio::test]
async fn test_export_saved_output_writes_file() {
    let temp = tempfile::tempdir().unwrap();
    let state = mock_state(&ManualClock::new(1_700_000_000_000), temp.path().to_path_buf());
    let inputs = GenerationInputsBuilder::new("Acme").build().unwrap();

    let result = generate_copy(&state, "press-release", &inputs).await.data.unwrap();
    let saved = save_output(&state, &result, TemplateId::PressRelease, &inputs).await.data.unwrap();

    let path = export_saved_output(&state, saved.id).await.data.unwrap();
    assert_eq!(path, temp.path().join(format!("saved-output-{}.txt", saved.id)));

    let body = std::fs::read_to_string(path).unwrap();
    assert!(body.starts_with("Press Release - Generated 2023-11-14\n\n"));
    assert!(body.ends_with(&result.text));

    assert!(!export_saved_output(&state, 1).await.success);
}
