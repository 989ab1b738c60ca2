//! Configuration management

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CACHE_MAX_DAYS, DEFAULT_CACHE_TTL_SECS, DEFAULT_CALENDAR_API_BASE,
    DEFAULT_DIRECTORY_PATH, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_TIME_ZONE,
};
use crate::errors::{Result, ShiftError};

/// Engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub booking: BookingConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// Calendar store connection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarConfig {
    pub calendar_id: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default, skip_serializing)]
    pub access_token: Option<String>,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

/// Civil time settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// IANA zone in which every day/hour computation happens
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
}

/// Booking policy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Fetch the whole day on booking and reject hours outside the window
    #[serde(default)]
    pub enforce_window: bool,
}

/// Day records cache
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_cache_ttl")]
    pub ttl_seconds: u64,
    #[serde(default = "default_cache_max_days")]
    pub max_days: u64,
}

/// Directory snapshot location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    #[serde(default = "default_directory_path")]
    pub path: String,
}

/// Notification transport
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default)]
    pub webhook_url: Option<String>,
}

impl ScheduleConfig {
    /// Parse the configured zone.
    ///
    /// # Errors
    /// Returns `ShiftError::Config` when the name is not a known IANA zone.
    pub fn tz(&self) -> Result<Tz> {
        self.time_zone
            .parse::<Tz>()
            .map_err(|e| ShiftError::Config(format!("Invalid time zone '{}': {}", self.time_zone, e)))
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            calendar_id: "primary".to_string(),
            api_base: default_api_base(),
            access_token: None,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self { time_zone: default_time_zone() }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl_seconds: default_cache_ttl(), max_days: default_cache_max_days() }
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self { path: default_directory_path() }
    }
}

fn default_api_base() -> String {
    DEFAULT_CALENDAR_API_BASE.to_string()
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_time_zone() -> String {
    DEFAULT_TIME_ZONE.to_string()
}

fn default_cache_ttl() -> u64 {
    DEFAULT_CACHE_TTL_SECS
}

fn default_cache_max_days() -> u64 {
    DEFAULT_CACHE_MAX_DAYS
}

fn default_directory_path() -> String {
    DEFAULT_DIRECTORY_PATH.to_string()
}
