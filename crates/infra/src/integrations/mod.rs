//! External service integrations

#[cfg(feature = "calendar")]
pub mod calendar;
