//! Content Synthesizer
//!
//! Local, deterministic rendering of finished marketing copy. One routine per
//! template kind; every routine reads the same `GenerationInputs` and the
//! `ContentSet` produced by the rule engine. Category-conditional wording is
//! driven by `ContentSet::bucket` only.

use copyforge_core::{GenerationInputs, TemplateId};

use crate::rules::ContentSet;

/// Returned for template ids the synthesizer does not know.
pub const UNKNOWN_TEMPLATE_PLACEHOLDER: &str = "Content generation in progress...";

/// Produce a finished document for `id`.
pub fn synthesize(id: TemplateId, inputs: &GenerationInputs, content: &ContentSet) -> String {
    let ctx = Context::new(inputs, content);
    tracing::debug!(template = %id, bucket = content.bucket.as_str(), "synthesizing fallback copy");
    match id {
        TemplateId::ProductDescription => product_description(&ctx),
        TemplateId::EmailCampaign => email_campaign(&ctx),
        TemplateId::SocialMedia => social_media(&ctx),
        TemplateId::LandingPage => landing_page(&ctx),
        TemplateId::PressRelease => press_release(&ctx),
    }
}

/// Like `synthesize`, keyed by wire name. Unknown names yield
/// [`UNKNOWN_TEMPLATE_PLACEHOLDER`] instead of an error.
pub fn synthesize_named(id: &str, inputs: &GenerationInputs, content: &ContentSet) -> String {
    match id.parse::<TemplateId>() {
        Ok(id) => synthesize(id, inputs, content),
        Err(_) => UNKNOWN_TEMPLATE_PLACEHOLDER.to_string(),
    }
}

// ── Shared context ─────────────────────────────────────────────────────

struct Context<'a> {
    name: &'a str,
    category: &'a str,
    features: &'a str,
    audience: &'a str,
    content: &'a ContentSet,
}

impl<'a> Context<'a> {
    fn new(inputs: &'a GenerationInputs, content: &'a ContentSet) -> Self {
        Self {
            name: inputs.product_name.trim(),
            category: inputs.category.trim(),
            features: inputs.features.trim(),
            audience: inputs.target_audience.trim(),
            content,
        }
    }

    fn audience_or(&self, default: &'a str) -> &'a str {
        if self.audience.is_empty() {
            default
        } else {
            self.audience
        }
    }

    fn footwear(&self) -> bool {
        self.content.bucket.is_footwear()
    }

    fn lead_benefit(&self) -> &str {
        &self.content.benefits[0]
    }

    /// Second half of a "X + Y" offer, or `default` when the offer has none.
    fn offer_extra(&self, default: &'a str) -> String {
        self.content
            .offer
            .split_once('+')
            .map(|(_, extra)| extra.trim())
            .filter(|extra| !extra.is_empty())
            .unwrap_or(default)
            .to_string()
    }

    fn bullets(&self, prefix: &str, take: usize) -> String {
        self.content
            .benefits
            .iter()
            .take(take)
            .map(|b| format!("{}{}", prefix, b))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn no_spaces(s: &str) -> String {
    s.split_whitespace().collect()
}

// ── Routines ───────────────────────────────────────────────────────────

fn product_description(ctx: &Context) -> String {
    let headline = if ctx.category.is_empty() {
        "Premium Quality You Can Trust".to_string()
    } else {
        format!("Elevate Your {} Experience", ctx.category)
    };
    let featuring = if ctx.features.is_empty() {
        String::new()
    } else {
        format!("Featuring {}, ", ctx.features)
    };

    format!(
        "**{name}**: {headline}

{cta}. {featuring}{name} delivers the perfect combination of quality, performance, and style that {audience} demand.

**Why Choose {name}:**
{benefits}

**Real Customer Experience:**
{testimonial}

**Ready to Experience {name}?**
Join thousands of satisfied customers who've made the smart choice.

*{offer}*

**Order now and discover why {name} is the #1 choice for {closing_audience}.**",
        name = ctx.name,
        headline = headline,
        cta = ctx.content.cta,
        featuring = featuring,
        audience = ctx.audience_or("discerning customers"),
        benefits = ctx.bullets("• ", 4),
        testimonial = ctx.content.testimonial,
        offer = ctx.content.offer,
        closing_audience = ctx.audience_or("customers like you"),
    )
}

fn email_campaign(ctx: &Context) -> String {
    let secret = if ctx.category.is_empty() {
        "The secret".to_string()
    } else {
        format!("The {} secret", ctx.category)
    };
    let hook = if ctx.footwear() {
        format!(
            "What if I told you that you could look amazing AND feel comfortable all day?

You'd probably think style and comfort don't go together...

But here's the proof: Over 10,000 people have discovered {}, and they're never going back.",
            ctx.name
        )
    } else {
        format!(
            "What if I told you that {} are achieving incredible results in just weeks?

You'd probably think I'm exaggerating...

But here's the proof: Over 10,000 customers have already discovered {}, and the results speak for themselves.",
            ctx.audience_or("people like you"),
            ctx.name
        )
    };
    let problem = if ctx.footwear() {
        "Products that look good but sacrifice comfort".to_string()
    } else if ctx.category.is_empty() {
        "Traditional solutions that waste time and money".to_string()
    } else {
        format!("Traditional {} solutions that waste time and money", ctx.category)
    };
    let solution = if ctx.features.is_empty() {
        ctx.name.to_string()
    } else {
        format!("{} with {}", ctx.name, ctx.features)
    };

    format!(
        "**Subject Lines:**
A) \"{secret} that's changing everything...\"
B) \"{name}: {benefit}\"
C) \"⏰ Only 48 hours left: {name} exclusive access\"

**Email Body:**

Hi [Name],

{hook}

**The Problem:** {problem}
**The Solution:** {solution}

**Real Results:**
{results}

{testimonial}

**Here's the deal:** We're offering exclusive access to the next 100 customers only.

[GET EXCLUSIVE ACCESS - SPECIAL PRICING]

But hurry - this offer expires in 48 hours.

Best regards,
The {name} Team

P.S. Still unsure? We offer a {guarantee}. Zero risk, maximum reward.",
        secret = secret,
        name = ctx.name,
        benefit = ctx.lead_benefit().to_lowercase(),
        hook = hook,
        problem = problem,
        solution = solution,
        results = ctx.bullets("• ", 3),
        testimonial = ctx.content.testimonial,
        guarantee = ctx.content.bucket.guarantee(),
    )
}

fn social_media(ctx: &Context) -> String {
    let secret = if ctx.footwear() {
        "all-day comfort AND style".to_string()
    } else if ctx.category.is_empty() {
        "real success".to_string()
    } else {
        format!("{} success", ctx.category)
    };
    let (outcome, tried, proof, want, keyword) = if ctx.footwear() {
        (
            "the perfect fit",
            "tried it myself",
            "→ Perfect fit, incredible comfort\n→ Compliments everywhere I go\n→ Best investment I've made",
            "experience the difference",
            "COMFORT",
        )
    } else {
        (
            "amazing results",
            "saw the results",
            "→ Results in just 2 weeks\n→ Easy to use and implement\n→ Worth every penny",
            "see the results",
            "RESULTS",
        )
    };
    let topic = if ctx.category.is_empty() { "everyday" } else { ctx.category };

    let mut hashtags = Vec::new();
    for tag in [no_spaces(ctx.category), no_spaces(ctx.name)] {
        if !tag.is_empty() {
            hashtags.push(format!("#{}", tag));
        }
    }
    hashtags.push("#Quality".to_string());
    hashtags.push("#Results".to_string());

    format!(
        "🚀 **STOP scrolling.**

We just discovered the secret to {secret}...

{audience} are getting {outcome} with {name} ⚡

**Here's what makes it different:**
{benefits}
✅ {extra}

**Real talk:** I was skeptical too...

But then I {tried}:
{proof}

**Want to {want}?**
👆 DM me \"{keyword}\" for exclusive access

**Question for you:** What's your biggest {topic} challenge? 👇

{hashtags}

---

**Engagement Hooks:**
💬 \"What's your biggest {topic} frustration?\"
🔄 \"Share if you want {benefit}!\"
❤️ \"Like if you're ready for a change!\"",
        secret = secret,
        audience = ctx.audience_or("People"),
        outcome = outcome,
        name = ctx.name,
        benefits = ctx.bullets("✅ ", 3),
        extra = ctx.offer_extra(ctx.content.bucket.guarantee()),
        tried = tried,
        proof = proof,
        want = want,
        keyword = keyword,
        topic = topic,
        hashtags = hashtags.join(" "),
        benefit = ctx.lead_benefit().to_lowercase(),
    )
}

fn landing_page(ctx: &Context) -> String {
    let category = if ctx.category.is_empty() { "Products" } else { ctx.category };
    let (promise, question, stat, frustrations, pitch, button) = if ctx.footwear() {
        (
            "Fits Perfect AND Feels Amazing".to_string(),
            "Are you tired of choosing between style and comfort?".to_string(),
            "87% of people struggle with ill-fitting products that look good but feel terrible."
                .to_string(),
            "→ Shoes that look good but feel uncomfortable\n→ Choosing between style and comfort\n→ Expensive pairs that don't fit right\n→ Disappointment with every purchase",
            format!(
                "The only {} solution that delivers both style AND comfort - guaranteed.",
                category
            ),
            "ORDER NOW - SPECIAL PRICING",
        )
    } else {
        (
            "Works".to_string(),
            format!(
                "Are you tired of {} solutions that promise everything but deliver nothing?",
                category
            ),
            format!(
                "87% of {} struggle with ineffective solutions that waste time and money.",
                ctx.audience_or("people")
            ),
            "→ Time wasted on ineffective methods\n→ Products that don't deliver results\n→ Promises that fall flat\n→ Solutions that are too complicated",
            format!(
                "The only {} solution built to deliver real results - guaranteed.",
                category
            ),
            "START YOUR FREE TRIAL",
        )
    };

    format!(
        "# **Finally, {category} That Actually {promise}**
## {benefit} - guaranteed or your money back

---

**{question}**

You're not alone. {stat}

**The frustration is real:**
{frustrations}

**What if there was a better way?**

## **Introducing {name}**

{cta}. {pitch}

**Here's how we're different:**
{benefits}

## **Real Results from Real Customers**

*{testimonial}*

**\"I've tried countless {category} options, but {name} is in a league of its own. Finally, something that actually works!\"** - Jordan Smith, Verified Customer

## **Ready to {cta}?**

**Special Launch Offer:**
- ✅ {offer}
- ✅ {guarantee}
- ✅ Free shipping on all orders
- ✅ Priority customer support

[**{button}**] [**LEARN MORE**]

*No risk. Results guaranteed.*

---

**Still have questions? Our customer success team is standing by to help.**",
        category = category,
        promise = promise,
        benefit = ctx.lead_benefit(),
        question = question,
        stat = stat,
        frustrations = frustrations,
        name = ctx.name,
        cta = ctx.content.cta,
        pitch = pitch,
        benefits = ctx
            .content
            .benefits
            .iter()
            .map(|b| format!("✅ **{}**", b))
            .collect::<Vec<_>>()
            .join("\n"),
        testimonial = ctx.content.testimonial,
        offer = ctx.content.offer,
        guarantee = ctx.content.bucket.guarantee(),
        button = button,
    )
}

/// Category-conditional phrases of a press release.
struct ReleaseWording {
    headline: String,
    subhead: String,
    company: String,
    launch: &'static str,
    problem: &'static str,
    result: &'static str,
    industry: String,
    approach: &'static str,
    quote_noun: &'static str,
    quote_change: String,
    quote_customers: &'static str,
    adopters: String,
    differentiator: String,
    usability: &'static str,
    availability: &'static str,
    offering: &'static str,
    mission: String,
    commitment: &'static str,
}

impl ReleaseWording {
    fn for_context(ctx: &Context, category: &str, tech: &str) -> Self {
        if ctx.footwear() {
            Self {
                headline: "Delivering All-Day Comfort Without Compromising Style".to_string(),
                subhead: format!("Innovative footwear technology addresses comfort vs. style dilemma with {}", tech),
                company: "a revolutionary footwear brand".to_string(),
                launch: "comfort-first footwear line",
                problem: "the age-old problem of choosing between comfort and style",
                result: "unprecedented all-day comfort",
                industry: "The footwear industry has long struggled with the comfort versus style dilemma, forcing consumers to choose between looking good and feeling good.".to_string(),
                approach: "revolutionary comfort technology that maintains style without sacrificing comfort",
                quote_noun: "brand",
                quote_change: "think about footwear".to_string(),
                quote_customers: "can finally have both comfort and style",
                adopters: "remarkable comfort improvements, with many saying they can wear the shoes all day without any discomfort".to_string(),
                differentiator: "product's unique comfort technology sets it apart from traditional solutions that often prioritize appearance over wearability".to_string(),
                usability: "wearability",
                availability: "The footwear line is immediately available to consumers globally, with styles starting",
                offering: "free shipping and a 60-day comfort trial",
                mission: "revolutionizing footwear through comfort-first design".to_string(),
                commitment: "ending the compromise between comfort and style",
            }
        } else {
            Self {
                headline: format!("Delivering {}", ctx.lead_benefit()),
                subhead: format!("Innovative {} technology addresses key consumer pain points with {}", category, tech),
                company: format!("a leading innovator in {} solutions", category),
                launch: "platform",
                problem: "critical industry challenges",
                result: "superior results",
                industry: format!(
                    "The {} industry has long struggled with solutions that fail to meet modern consumer demands for both quality and performance.",
                    category
                ),
                approach: "innovative approach that combines effectiveness with ease of use",
                quote_noun: "product",
                quote_change: format!("approach {}", category),
                quote_customers: "are achieving results that seemed impossible just months ago",
                adopters: format!(
                    "remarkable improvements, with many reporting that {} within the first week of use",
                    ctx.lead_benefit().to_lowercase()
                ),
                differentiator: "platform's unique capability sets it apart from traditional solutions that often require extensive setup and training".to_string(),
                usability: "usability",
                availability: "The platform is immediately available to consumers globally, with pricing starting",
                offering: "a 30-day free trial and implementation support",
                mission: format!("revolutionizing {} through innovative technology solutions", category),
                commitment: "delivering exceptional results and customer satisfaction",
            }
        }
    }
}

fn press_release(ctx: &Context) -> String {
    let category = if ctx.category.is_empty() { "consumer" } else { ctx.category };
    let (tech, leverage, combination) = if ctx.features.is_empty() {
        (
            "advanced engineering".to_string(),
            "innovative technology".to_string(),
            "innovative design".to_string(),
        )
    } else {
        (
            format!("proprietary {} technology", ctx.features),
            format!("advanced {}", ctx.features),
            ctx.features.to_string(),
        )
    };
    let w = ReleaseWording::for_context(ctx, category, &tech);

    format!(
        "**FOR IMMEDIATE RELEASE**

**{name} Launches Revolutionary {category} Solution, {headline}**

*{subhead}*

**[CITY, DATE]** - {name}, {company}, today announced the launch of its groundbreaking {launch} designed specifically for {audience}. The solution addresses {problem} by leveraging {leverage} to deliver {result}.

{industry} {name} addresses this challenge through its {approach}.

**\"We're not just launching another {category} {quote_noun} - we're fundamentally changing how people {quote_change},\"** said [CEO Name], CEO of {name}. **\"Our customers {quote_customers}. This isn't incremental improvement; it's transformation.\"**

Early adopters have reported {adopters}. The {differentiator}.

**Key product features include:**
{features}
- {extra}
- Premium customer support

**Industry expert Dr. Jane Smith, Research Director at {category} Analytics, commented:** *\"{name} represents a significant advancement in {category} technology. The combination of {combination} with practical {usability} addresses the core challenges we've identified in our research.\"*

{availability} at [price point]. The company is offering {offering}.

**About {name}**
Founded in [year], {name} is dedicated to {mission}. The company serves customers worldwide and is committed to {commitment}.

**Media Contact:**
[Name]
[Title]
[Phone]
[Email]

**Customer Contact:**
[Phone]
[Email]
[Website]

###",
        name = ctx.name,
        category = category,
        headline = w.headline,
        subhead = w.subhead,
        company = w.company,
        launch = w.launch,
        audience = ctx.audience_or("modern consumers"),
        problem = w.problem,
        leverage = leverage,
        result = w.result,
        industry = w.industry,
        approach = w.approach,
        quote_noun = w.quote_noun,
        quote_change = w.quote_change,
        quote_customers = w.quote_customers,
        adopters = w.adopters,
        differentiator = w.differentiator,
        features = ctx.bullets("- ", 4),
        extra = ctx.content.bucket.guarantee(),
        combination = combination,
        usability = w.usability,
        availability = w.availability,
        offering = w.offering,
        mission = w.mission,
        commitment = w.commitment,
    )
}
