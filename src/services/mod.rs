//! Services
//!
//! Business logic behind the command handlers.

pub mod export;
pub mod generation;
pub mod ledger;
