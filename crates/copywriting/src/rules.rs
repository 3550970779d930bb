//! Contextual Rule Engine
//!
//! Classifies a free-text product category into a content bucket and derives
//! the `ContentSet` (benefits, testimonial, call-to-action, offer) that every
//! synthesis routine consumes. Classification is the single source of
//! category-conditional facts: the synthesizer branches on `ContentSet::bucket`
//! and never inspects the raw category text itself.

use serde::Serialize;

use copyforge_core::GenerationInputs;

/// Content bucket selected for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentBucket {
    Footwear,
    Technology,
    FoodAndBeverage,
    Fitness,
    General,
}

impl ContentBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentBucket::Footwear => "footwear",
            ContentBucket::Technology => "technology",
            ContentBucket::FoodAndBeverage => "food-and-beverage",
            ContentBucket::Fitness => "fitness",
            ContentBucket::General => "general",
        }
    }

    pub fn is_footwear(&self) -> bool {
        matches!(self, ContentBucket::Footwear)
    }

    /// Risk-reversal wording used across templates.
    pub fn guarantee(&self) -> &'static str {
        match self {
            ContentBucket::Footwear => "60-day comfort guarantee",
            _ => "30-day money-back guarantee",
        }
    }
}

/// Ordered keyword rules. The first rule with a keyword contained in the
/// lower-cased category wins; no match means `General`.
const RULES: &[(ContentBucket, &[&str])] = &[
    (ContentBucket::Footwear, &["footwear", "shoe", "sneaker"]),
    (ContentBucket::Technology, &["tech", "software", "app"]),
    (ContentBucket::FoodAndBeverage, &["food", "drink", "beverage"]),
    (ContentBucket::Fitness, &["fitness", "health", "wellness"]),
];

/// Structured contextual content derived from a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentSet {
    pub bucket: ContentBucket,
    pub benefits: [String; 4],
    /// Quoted testimonial including its attribution.
    pub testimonial: String,
    pub cta: String,
    pub offer: String,
}

/// Pick the bucket for a category.
pub fn bucket_for(category: &str) -> ContentBucket {
    let lower = category.to_lowercase();
    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(bucket, _)| *bucket)
        .unwrap_or(ContentBucket::General)
}

/// Derive the content set for a request.
///
/// Pure: depends only on category, product name, features and audience.
pub fn classify(inputs: &GenerationInputs) -> ContentSet {
    let bucket = bucket_for(&inputs.category);
    tracing::debug!(category = %inputs.category, bucket = bucket.as_str(), "classified category");

    let name = inputs.product_name.trim();
    let features = inputs.features.trim();

    match bucket {
        ContentBucket::Footwear => ContentSet {
            bucket,
            benefits: [
                "Revolutionary comfort technology keeps you going all day".to_string(),
                "Premium materials ensure durability for any adventure".to_string(),
                "Stylish design that turns heads wherever you go".to_string(),
                "Performance-engineered for your active lifestyle".to_string(),
            ],
            testimonial: format!(
                "\"These {} are game-changers! Perfect fit, incredible comfort, and I get compliments everywhere I go. Best investment for my feet!\" - Alex Rodriguez, Fitness Enthusiast",
                name
            ),
            cta: format!("Step into comfort and style with {}", name),
            offer: "Free shipping + 60-day comfort guarantee".to_string(),
        },
        ContentBucket::Technology => {
            let feature_line = if features.is_empty() {
                "It alone saves us 10 hours per week.".to_string()
            } else {
                format!("The {} feature alone saves us 10 hours per week.", features)
            };
            ContentSet {
                bucket,
                benefits: [
                    "Streamlined workflow increases productivity by 40%".to_string(),
                    "Intuitive design reduces learning curve to just 2 days".to_string(),
                    "Enterprise-grade security protects your valuable data".to_string(),
                    "24/7 support ensures you're never stuck".to_string(),
                ],
                testimonial: format!(
                    "\"Since implementing {}, our team's efficiency has skyrocketed. {}\" - Sarah Chen, Operations Director",
                    name, feature_line
                ),
                cta: format!(
                    "Transform your {} workflow",
                    inputs.category.trim().to_lowercase()
                ),
                offer: "20% off your first year + free implementation support".to_string(),
            }
        }
        ContentBucket::FoodAndBeverage => ContentSet {
            bucket,
            benefits: [
                "Premium ingredients sourced from the finest suppliers".to_string(),
                "Artisanal craftsmanship in every batch".to_string(),
                "Satisfaction guaranteed or your money back".to_string(),
                "Loved by food enthusiasts worldwide".to_string(),
            ],
            testimonial: format!(
                "\"{} has become my go-to choice. The quality is unmatched and the taste is incredible!\" - Maria Santos, Food Blogger",
                name
            ),
            cta: format!("Taste the difference with {}", name),
            offer: "Free shipping on orders over $50".to_string(),
        },
        ContentBucket::Fitness => ContentSet {
            bucket,
            benefits: [
                "Scientifically proven results in just 30 days".to_string(),
                "Easy-to-follow program fits any schedule".to_string(),
                "Expert guidance every step of the way".to_string(),
                "Join thousands who've transformed their lives".to_string(),
            ],
            testimonial: format!(
                "\"{} changed my life! I feel stronger, more confident, and healthier than ever.\" - David Kim, Personal Trainer",
                name
            ),
            cta: format!("Start your transformation with {}", name),
            offer: "30-day money-back guarantee + bonus materials".to_string(),
        },
        ContentBucket::General => ContentSet {
            bucket,
            benefits: [
                "Superior quality that exceeds expectations".to_string(),
                "Innovative design that stands out from the crowd".to_string(),
                "Trusted by thousands of satisfied customers".to_string(),
                "Exceptional value for your investment".to_string(),
            ],
            testimonial: format!(
                "\"{} exceeded all my expectations. Quality, performance, and value - everything I was looking for!\" - Taylor Johnson, Verified Customer",
                name
            ),
            cta: format!("Experience the {} difference", name),
            offer: "Special launch pricing + satisfaction guarantee".to_string(),
        },
    }
}
