//! # ShiftSlot Infrastructure
//!
//! Infrastructure implementations of the engine's ports.
//!
//! This crate contains:
//! - The Google Calendar store adapter
//! - The JSON file directory store
//! - Notifier adapters (webhook, log only)
//! - Configuration loading and logging setup
//!
//! ## Architecture
//! - Implements traits defined in `shiftslot-core`
//! - Contains all "impure" code (HTTP, files, environment)

pub mod config;
pub mod directory;
pub mod errors;
pub mod http;
pub mod integrations;
pub mod notifications;
pub mod observability;

// Re-export commonly used items
pub use directory::JsonFileDirectory;
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
#[cfg(feature = "calendar")]
pub use integrations::calendar::GoogleCalendarStore;
pub use notifications::{TracingNotifier, WebhookNotifier};
pub use observability::init_tracing;
