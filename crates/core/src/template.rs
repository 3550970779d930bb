//! Template Identifiers
//!
//! The fixed, compiled-in set of copy templates and the immutable template
//! record. The catalog contents live in `copyforge-copywriting`; this module
//! only defines the identity types so every crate can name a template.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Identifier of a compiled-in template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    ProductDescription,
    EmailCampaign,
    SocialMedia,
    LandingPage,
    PressRelease,
}

impl TemplateId {
    /// Every template id, in catalog display order.
    pub const ALL: [TemplateId; 5] = [
        TemplateId::ProductDescription,
        TemplateId::EmailCampaign,
        TemplateId::SocialMedia,
        TemplateId::LandingPage,
        TemplateId::PressRelease,
    ];

    /// The kebab-case wire name (`product-description`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::ProductDescription => "product-description",
            TemplateId::EmailCampaign => "email-campaign",
            TemplateId::SocialMedia => "social-media",
            TemplateId::LandingPage => "landing-page",
            TemplateId::PressRelease => "press-release",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s.trim())
            .ok_or_else(|| CoreError::unknown_template(s))
    }
}

/// A named prompt skeleton tied to one copywriting methodology.
///
/// `body` carries `{field}` placeholders named after `GenerationInputs`
/// fields (`{productName}`, `{targetAudience}`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    pub id: TemplateId,
    pub display_name: &'static str,
    pub category: &'static str,
    pub methodology: &'static str,
    pub body: &'static str,
}
