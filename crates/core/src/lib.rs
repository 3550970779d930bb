//! Copyforge Core
//!
//! Foundational domain types, error types, and the clock abstraction for the
//! copyforge workspace. This crate has zero dependencies on application-level
//! code (HTTP clients, configuration files, CLI).
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//! - `template` - Template identifiers and the immutable template record
//! - `inputs` - Generation inputs and their enumerated style knobs
//! - `generation` - Generation results, source tags, and cumulative stats
//! - `clock` - Wall-clock abstraction (`Clock`, `SystemClock`, `ManualClock`)
//! - `builders` - Validating builder for `GenerationInputs`
//!
//! ## Design Principles
//!
//! 1. **Minimal dependencies** - serde, thiserror, chrono only
//! 2. **Trait-based seams** - the clock is injectable for deterministic tests
//! 3. **Unidirectional dependency** - this crate depends on nothing else in the workspace

pub mod builders;
pub mod clock;
pub mod error;
pub mod generation;
pub mod inputs;
pub mod template;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult};

// ── Domain Types ───────────────────────────────────────────────────────
pub use generation::{estimate_tokens, GenerationResult, GenerationSource, GenerationStats};
pub use inputs::{FocusArea, GenerationInputs, Length, Tone};
pub use template::{Template, TemplateId};

// ── Clock ──────────────────────────────────────────────────────────────
pub use clock::{Clock, ManualClock, SystemClock};

// ── Builders ───────────────────────────────────────────────────────────
pub use builders::GenerationInputsBuilder;
