//! Template Registry
//!
//! Static catalog of the five copywriting templates and textual rendering of
//! `{field}` placeholders against `GenerationInputs`.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use copyforge_core::{CoreResult, GenerationInputs, Template, TemplateId};

/// Substituted for any input field that is empty.
pub const NOT_SPECIFIED: &str = "[Not specified]";

const PRODUCT_DESCRIPTION_BODY: &str = "You are an expert copywriter specializing in converting product descriptions. Use the FBP (Feature-Benefit-Proof) framework.

CONTEXT: Write a compelling product description for {productName} in the {category} category.

REQUIREMENTS:
- Target audience: {targetAudience}
- Tone: {tone}
- Length: {length} (short=50-75 words, medium=100-150 words, long=200-250 words)
- Focus: {focusArea}

STRUCTURE:
1. Hook: Attention-grabbing opening
2. Features: Key product attributes
3. Benefits: How features solve customer problems
4. Social proof: Trust indicators
5. Call-to-action: Clear next step

FEATURES TO HIGHLIGHT: {features}

CONSTRAINTS:
- Use active voice
- Include emotional triggers
- Avoid jargon unless {targetAudience} expects it
- Include sensory language where appropriate

Generate the product description now:";

const EMAIL_CAMPAIGN_BODY: &str = "You are a direct response email marketing specialist. Create a high-converting email using the AIDA framework with urgency psychology.

PRODUCT: {productName}
AUDIENCE: {targetAudience}
TONE: {tone}
GOAL: Drive {focusArea}

EMAIL STRUCTURE:
Subject Line: Create 3 options (A/B/C)
- A: Curiosity-driven
- B: Benefit-focused
- C: Urgency-based

Body ({length}):
ATTENTION: Hook that stops the scroll
INTEREST: Build intrigue with {features}
DESIRE: Connect emotionally to customer needs
ACTION: Clear, compelling CTA

PSYCHOLOGICAL TRIGGERS:
- Scarcity/urgency
- Social proof
- Loss aversion
- Reciprocity

CATEGORY CONTEXT: {category}

Generate the complete email campaign:";

const SOCIAL_MEDIA_BODY: &str = "You are a social media strategist creating viral-worthy content. Use the Hook-Value-CTA pattern optimized for engagement.

PRODUCT: {productName} ({category})
PLATFORM: Multi-platform (optimize for Instagram/LinkedIn)
AUDIENCE: {targetAudience}
TONE: {tone}
FOCUS: {focusArea}

POST STRUCTURE:
HOOK (First 5 words): Stop-scroll opener
VALUE: Educational/entertaining content about {features}
CTA: Engagement-driving call-to-action

FORMAT OPTIONS based on {length}:
- Short: Single compelling post
- Medium: Carousel-style breakdown
- Long: Story-driven narrative

ENGAGEMENT TACTICS:
- Question prompts
- Controversial takes (tasteful)
- Behind-the-scenes insights
- User-generated content angles

Generate the social media content:";

const LANDING_PAGE_BODY: &str = "You are a conversion copywriter specializing in high-converting landing pages. Use the PAS (Problem-Agitate-Solution) framework enhanced with social proof.

PRODUCT: {productName}
MARKET: {category}
VISITOR: {targetAudience}
TONE: {tone}
CONVERSION GOAL: {focusArea}

LANDING PAGE SECTIONS:

HERO ({length} headline + subhead):
- Clear value proposition
- Benefit-focused headline
- Supporting subheadline

PROBLEM/AGITATION:
Identify pain points for {targetAudience}

SOLUTION:
How {productName} solves it with {features}

SOCIAL PROOF:
- Testimonials
- Statistics
- Trust indicators

CTA OPTIMIZATION:
- Action-oriented language
- Urgency/scarcity
- Risk reversal

Generate the complete landing page copy:";

const PRESS_RELEASE_BODY: &str = "You are a PR professional writing newsworthy press releases. Use the inverted pyramid structure with strong news angles.

ANNOUNCEMENT: {productName} launch/update
INDUSTRY: {category}
TARGET MEDIA: Trade publications, industry blogs
TONE: {tone} but authoritative
ANGLE: {focusArea}

PRESS RELEASE STRUCTURE:

HEADLINE: Newsworthy, keyword-optimized
DATELINE: [City, Date]
LEAD PARAGRAPH: 5 W's (Who, What, When, Where, Why)
BODY: Supporting details about {features}
QUOTES: Executive/expert commentary
BOILERPLATE: Company background
CONTACT: Media relations info

NEWS ANGLES:
- Innovation/disruption
- Market impact
- Industry trends
- Customer success

AUDIENCE: {targetAudience} (as end users)
LENGTH: {length} (short=200-300 words, medium=400-500 words, long=600-800 words)

Generate the press release:";

/// The catalog, in display order. Index matches `TemplateId::ALL`.
static TEMPLATES: [Template; 5] = [
    Template {
        id: TemplateId::ProductDescription,
        display_name: "Product Description",
        category: "E-commerce",
        methodology: "Feature-Benefit-Proof Framework",
        body: PRODUCT_DESCRIPTION_BODY,
    },
    Template {
        id: TemplateId::EmailCampaign,
        display_name: "Email Campaign",
        category: "Email Marketing",
        methodology: "AIDA + Urgency Framework",
        body: EMAIL_CAMPAIGN_BODY,
    },
    Template {
        id: TemplateId::SocialMedia,
        display_name: "Social Media Post",
        category: "Social Marketing",
        methodology: "Hook-Value-CTA Pattern",
        body: SOCIAL_MEDIA_BODY,
    },
    Template {
        id: TemplateId::LandingPage,
        display_name: "Landing Page Copy",
        category: "Web Copy",
        methodology: "PAS + Social Proof Framework",
        body: LANDING_PAGE_BODY,
    },
    Template {
        id: TemplateId::PressRelease,
        display_name: "Press Release",
        category: "PR/Media",
        methodology: "Inverted Pyramid + Newsworthiness",
        body: PRESS_RELEASE_BODY,
    },
];

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{([A-Za-z]\w*)\}").expect("placeholder pattern is valid"))
}

/// All templates in display order.
pub fn all_templates() -> &'static [Template] {
    &TEMPLATES
}

/// Look up a template by its typed id.
pub fn template(id: TemplateId) -> &'static Template {
    TEMPLATES
        .iter()
        .find(|t| t.id == id)
        .unwrap_or(&TEMPLATES[0])
}

/// Look up a template by its wire name, failing with `UnknownTemplate`.
pub fn get_template(id: &str) -> CoreResult<&'static Template> {
    let id: TemplateId = id.parse()?;
    Ok(template(id))
}

/// Substitute every `{field}` in the template body with the matching input.
///
/// Empty fields become `[Not specified]`. Substitution is a single pass over
/// the body, so placeholder-looking text inside a value is left alone.
/// Placeholders that are not input fields are kept verbatim.
pub fn render_template(id: TemplateId, inputs: &GenerationInputs) -> String {
    render_body(template(id).body, inputs)
}

/// Render an arbitrary body with the same rules as `render_template`.
pub fn render_body(body: &str, inputs: &GenerationInputs) -> String {
    placeholder_re()
        .replace_all(body, |caps: &Captures| match inputs.field(&caps[1]) {
            Some(value) if !value.trim().is_empty() => value.to_string(),
            Some(_) => NOT_SPECIFIED.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Distinct placeholder names in a body, in order of first occurrence.
pub fn placeholders(body: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in placeholder_re().captures_iter(body) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// The first `max_chars` characters of a template body, for listings.
pub fn preview(id: TemplateId, max_chars: usize) -> String {
    let body = template(id).body;
    let mut out: String = body.chars().take(max_chars).collect();
    if body.chars().count() > max_chars {
        out.push_str("...");
    }
    out
}
