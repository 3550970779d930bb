//! Builder Pattern for Generation Inputs
//!
//! Follows the standard Rust builder pattern:
//! 1. Create with `::new(product_name)`
//! 2. Chain `.field(value)` calls
//! 3. Call `.build()` which validates and returns `CoreResult<GenerationInputs>`
//!
//! Validation happens at build time, so an empty product name is caught
//! before the inputs reach the orchestrator.

use crate::error::CoreResult;
use crate::inputs::{FocusArea, GenerationInputs, Length, Tone};

/// Builder for `GenerationInputs`.
///
/// # Example
/// ```
/// use copyforge_core::{GenerationInputsBuilder, Tone};
///
/// let inputs = GenerationInputsBuilder::new("Acme Runner")
///     .category("Running Shoes")
///     .tone(Tone::Enthusiastic)
///     .build()
///     .unwrap();
/// assert_eq!(inputs.category, "Running Shoes");
/// ```
#[derive(Debug, Default)]
pub struct GenerationInputsBuilder {
    inputs: GenerationInputs,
}

impl GenerationInputsBuilder {
    /// Start a builder for the given product.
    pub fn new(product_name: impl Into<String>) -> Self {
        Self {
            inputs: GenerationInputs {
                product_name: product_name.into(),
                ..Default::default()
            },
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.inputs.category = category.into();
        self
    }

    pub fn features(mut self, features: impl Into<String>) -> Self {
        self.inputs.features = features.into();
        self
    }

    pub fn target_audience(mut self, audience: impl Into<String>) -> Self {
        self.inputs.target_audience = audience.into();
        self
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.inputs.tone = tone;
        self
    }

    pub fn length(mut self, length: Length) -> Self {
        self.inputs.length = length;
        self
    }

    pub fn focus_area(mut self, focus: FocusArea) -> Self {
        self.inputs.focus_area = focus;
        self
    }

    /// Build and validate the inputs.
    pub fn build(self) -> CoreResult<GenerationInputs> {
        self.inputs.validate()?;
        Ok(self.inputs)
    }

    /// Return the inputs without validating them.
    ///
    /// The orchestrator validates again, so this is for callers that want the
    /// rejection to come from `generate` itself.
    pub fn build_unchecked(self) -> GenerationInputs {
        self.inputs
    }
}
