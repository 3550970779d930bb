//! Integration Tests Module
//!
//! End-to-end tests for the copy generation pipeline: orchestration with a
//! mock remote provider, cooldown and stats bookkeeping, the output ledger,
//! export round-trips, and the template catalog.

// Generation orchestrator tests (remote, fallback, cooldown, validation)
mod generation_test;

// Output ledger and analytics tests
mod ledger_test;

// Export document tests
mod export_test;

// Template catalog and rendering tests
mod templates_test;
