//! Data Models
//!
//! Serializable types shared by services and command handlers.

pub mod export;
pub mod ledger;
pub mod response;
pub mod settings;

pub use export::*;
pub use ledger::*;
pub use response::*;
pub use settings::*;
