//! Storage Layer
//!
//! Handles persistence of the JSON config. Generation state is in-memory only.

pub mod config;

pub use config::*;
