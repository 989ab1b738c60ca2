//! Calendar integration module (feature: calendar)
//!
//! Google Calendar v3 implementation of the `CalendarStore` port.
//!
//! This module is only compiled when the `calendar` feature is enabled.

pub mod google;
pub mod types;

pub use google::GoogleCalendarStore;
