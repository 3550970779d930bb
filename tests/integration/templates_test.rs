//! Template Catalog Integration Tests
//!
//! Verifies the catalog as exposed by the command layer and that every
//! template renders and synthesizes for realistic inputs.

use copyforge::{list_templates, render_prompt};
use copyforge_copywriting::{classify, synthesize, template, NOT_SPECIFIED};
use copyforge_core::{GenerationInputs, GenerationInputsBuilder, TemplateId, Tone};

fn inputs() -> GenerationInputs {
    GenerationInputsBuilder::new("Acme Runner")
        .category("Running Shoes")
        .features("carbon plate, breathable mesh")
        .target_audience("marathoners")
        .tone(Tone::Enthusiastic)
        .build()
        .unwrap()
}

// ============================================================================
// Catalog
// ============================================================================

#[test]
fn test_catalog_order_and_ids() {
    let ids: Vec<String> = list_templates()
        .data
        .unwrap()
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(
        ids,
        vec![
            "product-description",
            "email-campaign",
            "social-media",
            "landing-page",
            "press-release",
        ]
    );
}

#[test]
fn test_every_template_lists_its_placeholders() {
    for summary in list_templates().data.unwrap() {
        assert!(summary.placeholders.contains(&"productName".to_string()), "{}", summary.id);
        assert!(!summary.preview.is_empty());
    }
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_substitutes_every_field() {
    for id in TemplateId::ALL {
        let prompt = render_prompt(id.as_str(), &inputs()).data.unwrap();
        assert!(prompt.contains("Acme Runner"));
        assert!(!prompt.contains("{productName}"));
        assert!(!prompt.contains("{category}"));
        assert!(!prompt.contains(NOT_SPECIFIED), "{}", template(id).display_name);
    }
}

#[test]
fn test_render_marks_missing_fields() {
    let sparse = GenerationInputsBuilder::new("Acme").build().unwrap();
    let prompt = render_prompt("product-description", &sparse).data.unwrap();
    assert!(prompt.contains(NOT_SPECIFIED));
}

#[test]
fn test_render_unknown_template() {
    let response = render_prompt("haiku", &inputs());
    assert!(!response.success);
    assert_eq!(response.error.unwrap(), "Unknown template: haiku");
}

// ============================================================================
// Synthesis
// ============================================================================

#[test]
fn test_footwear_copy_across_templates() {
    let inputs = inputs();
    let content = classify(&inputs);
    for id in TemplateId::ALL {
        let text = synthesize(id, &inputs, &content);
        assert!(text.contains("Acme Runner"), "{}", id);
    }
    let social = synthesize(TemplateId::SocialMedia, &inputs, &content);
    assert!(social.contains("COMFORT"));
}
