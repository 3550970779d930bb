//! Commands
//!
//! Entry points used by front ends. Each handler wraps its outcome in a
//! `CommandResponse`; the interactive session drives `AppState` directly.

pub mod generation;
pub mod ledger;
pub mod session;
pub mod templates;

pub use generation::*;
pub use ledger::*;
pub use session::{run_session, Session, Step};
pub use templates::*;
