//! # ShiftSlot Domain
//!
//! Business domain types and models for the shift slot engine.
//!
//! This crate contains:
//! - Directory, calendar record and slot types
//! - Domain error types and Result definitions
//! - Configuration structures
//! - The tag/title codec that is the wire contract with the calendar store
//!
//! ## Architecture
//! - No dependencies on other ShiftSlot crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
// Re-export codec and parsing utilities
pub use utils::slot_codec::{decode_body, encode_slot, EncodedSlot};
pub use utils::window_parser::{has_window_pattern, parse_window_title, ShiftWindow};
