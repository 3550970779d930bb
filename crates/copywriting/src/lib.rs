//! Copyforge Copywriting
//!
//! Pure, synchronous building blocks of the generation pipeline:
//!
//! - `registry`: the template catalog and prompt rendering
//! - `rules`: category classification into a `ContentSet`
//! - `synthesizer`: local copy synthesis used when the remote path is unavailable

pub mod registry;
pub mod rules;
pub mod synthesizer;

pub use registry::{
    all_templates, get_template, placeholders, preview, render_body, render_template, template,
    NOT_SPECIFIED,
};
pub use rules::{bucket_for, classify, ContentBucket, ContentSet};
pub use synthesizer::{synthesize, synthesize_named, UNKNOWN_TEMPLATE_PLACEHOLDER};
