//! Generation Inputs
//!
//! The structured request a caller fills in before asking for copy: product
//! facts plus three enumerated style knobs. Inputs are created fresh per
//! request, owned by the caller, and validated before use.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Voice of the generated copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    #[default]
    Professional,
    Conversational,
    Enthusiastic,
    Authoritative,
    Friendly,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Professional,
        Tone::Conversational,
        Tone::Enthusiastic,
        Tone::Authoritative,
        Tone::Friendly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Conversational => "conversational",
            Tone::Enthusiastic => "enthusiastic",
            Tone::Authoritative => "authoritative",
            Tone::Friendly => "friendly",
        }
    }
}

/// Target length of the generated copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Length {
    Short,
    #[default]
    Medium,
    Long,
}

impl Length {
    pub const ALL: [Length; 3] = [Length::Short, Length::Medium, Length::Long];

    pub fn as_str(&self) -> &'static str {
        match self {
            Length::Short => "short",
            Length::Medium => "medium",
            Length::Long => "long",
        }
    }
}

/// What the copy should lean on to persuade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FocusArea {
    #[default]
    Benefits,
    Features,
    SocialProof,
    Urgency,
    Trust,
}

impl FocusArea {
    pub const ALL: [FocusArea; 5] = [
        FocusArea::Benefits,
        FocusArea::Features,
        FocusArea::SocialProof,
        FocusArea::Urgency,
        FocusArea::Trust,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FocusArea::Benefits => "benefits",
            FocusArea::Features => "features",
            FocusArea::SocialProof => "social-proof",
            FocusArea::Urgency => "urgency",
            FocusArea::Trust => "trust",
        }
    }
}

macro_rules! text_enum {
    ($ty:ident, $label:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_lowercase();
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == wanted)
                    .ok_or_else(|| {
                        let allowed: Vec<&str> = $ty::ALL.iter().map(|v| v.as_str()).collect();
                        CoreError::parse(format!(
                            "invalid {} '{}', expected one of: {}",
                            $label,
                            s,
                            allowed.join(", ")
                        ))
                    })
            }
        }
    };
}

text_enum!(Tone, "tone");
text_enum!(Length, "length");
text_enum!(FocusArea, "focus area");

/// Inputs for one generation request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationInputs {
    /// Required, non-empty after trimming.
    pub product_name: String,
    pub category: String,
    pub features: String,
    pub target_audience: String,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub length: Length,
    #[serde(default)]
    pub focus_area: FocusArea,
}

impl GenerationInputs {
    /// Placeholder names understood by template rendering, in declaration order.
    pub const FIELD_NAMES: [&'static str; 7] = [
        "productName",
        "category",
        "features",
        "targetAudience",
        "tone",
        "length",
        "focusArea",
    ];

    /// Check the inputs before any generation work happens.
    pub fn validate(&self) -> CoreResult<()> {
        if self.product_name.trim().is_empty() {
            return Err(CoreError::validation("productName required"));
        }
        Ok(())
    }

    /// Look up a field by its placeholder name.
    ///
    /// Returns `None` for names that are not input fields. Text fields come back
    /// verbatim, so an empty field yields `Some("")`.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "productName" => Some(&self.product_name),
            "category" => Some(&self.category),
            "features" => Some(&self.features),
            "targetAudience" => Some(&self.target_audience),
            "tone" => Some(self.tone.as_str()),
            "length" => Some(self.length.as_str()),
            "focusArea" => Some(self.focus_area.as_str()),
            _ => None,
        }
    }

    /// Set a field by name from text. Used by interactive front ends.
    pub fn set_field(&mut self, name: &str, value: &str) -> CoreResult<()> {
        match name {
            "productName" | "product" => self.product_name = value.to_string(),
            "category" => self.category = value.to_string(),
            "features" => self.features = value.to_string(),
            "targetAudience" | "audience" => self.target_audience = value.to_string(),
            "tone" => self.tone = value.parse()?,
            "length" => self.length = value.parse()?,
            "focusArea" | "focus" => self.focus_area = value.parse()?,
            other => return Err(CoreError::parse(format!("unknown input field '{}'", other))),
        }
        Ok(())
    }
}
