//! Configuration loader
//!
//! Loads engine configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Reads a `.env` file into the environment when present
//! 2. Attempts to load from environment variables
//! 3. If incomplete, falls back to a probed JSON or TOML file
//! 4. The access token may always come from the environment, so it can stay
//!    out of config files
//!
//! ## Environment Variables
//! - `SHIFTSLOT_CALENDAR_ID`: Calendar to use (required for env loading)
//! - `SHIFTSLOT_CALENDAR_API_BASE`: Calendar API base URL
//! - `SHIFTSLOT_CALENDAR_TOKEN`: Bearer token for the calendar API
//! - `SHIFTSLOT_REQUEST_TIMEOUT_SECS`: HTTP timeout in seconds
//! - `SHIFTSLOT_TIME_ZONE`: IANA zone for day/hour arithmetic
//! - `SHIFTSLOT_ENFORCE_WINDOW`: Reject bookings outside the window (true/false)
//! - `SHIFTSLOT_CACHE_TTL_SECS`: Day records cache TTL in seconds
//! - `SHIFTSLOT_CACHE_MAX_DAYS`: Day records cache capacity
//! - `SHIFTSLOT_DIRECTORY_PATH`: Directory JSON file
//! - `SHIFTSLOT_WEBHOOK_URL`: Notification webhook
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./shiftslot.{toml,json}` (current working directory)
//! 2. `./config.{toml,json}` (current working directory)
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};
use std::str::FromStr;

use shiftslot_domain::{
    BookingConfig, CacheConfig, CalendarConfig, DirectoryConfig, EngineConfig, NotificationConfig,
    Result, ScheduleConfig, ShiftError,
};

const CONFIG_FILE_NAMES: [&str; 4] =
    ["shiftslot.toml", "shiftslot.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `ShiftError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - The configured time zone is unknown
pub fn load() -> Result<EngineConfig> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded .env file");
    }

    let mut config = match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            config
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)?
        }
    };

    if config.calendar.access_token.is_none() {
        config.calendar.access_token = std::env::var("SHIFTSLOT_CALENDAR_TOKEN").ok();
    }
    config.schedule.tz()?;
    Ok(config)
}

/// Load configuration from environment variables
///
/// Only `SHIFTSLOT_CALENDAR_ID` is required; everything else falls back to
/// its default.
///
/// # Errors
/// Returns `ShiftError::Config` if required variables are missing or have
/// invalid values.
pub fn load_from_env() -> Result<EngineConfig> {
    let defaults = EngineConfig::default();

    let calendar = CalendarConfig {
        calendar_id: env_var("SHIFTSLOT_CALENDAR_ID")?,
        api_base: env_or("SHIFTSLOT_CALENDAR_API_BASE", defaults.calendar.api_base),
        access_token: std::env::var("SHIFTSLOT_CALENDAR_TOKEN").ok(),
        request_timeout_secs: env_parse(
            "SHIFTSLOT_REQUEST_TIMEOUT_SECS",
            defaults.calendar.request_timeout_secs,
        )?,
    };

    Ok(EngineConfig {
        calendar,
        schedule: ScheduleConfig {
            time_zone: env_or("SHIFTSLOT_TIME_ZONE", defaults.schedule.time_zone),
        },
        booking: BookingConfig {
            enforce_window: env_bool("SHIFTSLOT_ENFORCE_WINDOW", defaults.booking.enforce_window),
        },
        cache: CacheConfig {
            ttl_seconds: env_parse("SHIFTSLOT_CACHE_TTL_SECS", defaults.cache.ttl_seconds)?,
            max_days: env_parse("SHIFTSLOT_CACHE_MAX_DAYS", defaults.cache.max_days)?,
        },
        directory: DirectoryConfig {
            path: env_or("SHIFTSLOT_DIRECTORY_PATH", defaults.directory.path),
        },
        notifications: NotificationConfig { webhook_url: std::env::var("SHIFTSLOT_WEBHOOK_URL").ok() },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Supports JSON and
/// TOML (detected by file extension).
///
/// # Errors
/// Returns `ShiftError::Config` if the file is missing, unreadable, or
/// malformed.
pub fn load_from_file(path: Option<PathBuf>) -> Result<EngineConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ShiftError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ShiftError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ShiftError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content, by file extension.
fn parse_config(contents: &str, path: &Path) -> Result<EngineConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ShiftError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ShiftError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(ShiftError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// First existing config file in the working directory, then next to the
/// executable.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir);
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| ShiftError::Config(format!("Missing required environment variable: {}", key)))
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty()).unwrap_or(default)
}

fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| ShiftError::Config(format!("Invalid value for {}: {}", key, e))),
        Err(_) => Ok(default),
    }
}

/// Accepts `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
