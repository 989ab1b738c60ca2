//! Notifier adapters

pub mod log_only;
pub mod webhook;

pub use log_only::TracingNotifier;
pub use webhook::WebhookNotifier;
