//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;

use shiftslot_domain::ShiftError;
use shiftslot_infra::config;
use tempfile::NamedTempFile;

fn write_config(contents: &str, extension: &str) -> (NamedTempFile, std::path::PathBuf) {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(contents.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension(extension);
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");
    (temp_file, path)
}

#[test]
fn test_load_config_from_json_file() {
    let (_temp, path) = write_config(
        r#"{
            "calendar": {
                "calendar_id": "shifts@example.org",
                "api_base": "https://calendar.example.org/v3",
                "access_token": "json-token",
                "request_timeout_secs": 12
            },
            "schedule": { "time_zone": "Europe/Warsaw" },
            "booking": { "enforce_window": true },
            "cache": { "ttl_seconds": 15, "max_days": 10 },
            "directory": { "path": "/srv/shiftslot/directory.json" },
            "notifications": { "webhook_url": "https://hooks.example.org/notify" }
        }"#,
        "json",
    );

    let config = config::load_from_file(Some(path.clone())).expect("config should load");

    assert_eq!(config.calendar.calendar_id, "shifts@example.org");
    assert_eq!(config.calendar.api_base, "https://calendar.example.org/v3");
    assert_eq!(config.calendar.access_token.as_deref(), Some("json-token"));
    assert_eq!(config.calendar.request_timeout_secs, 12);
    assert!(config.booking.enforce_window);
    assert_eq!(config.cache.ttl_seconds, 15);
    assert_eq!(config.cache.max_days, 10);
    assert_eq!(config.directory.path, "/srv/shiftslot/directory.json");
    assert_eq!(
        config.notifications.webhook_url.as_deref(),
        Some("https://hooks.example.org/notify")
    );

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_config_from_toml_file_with_defaults() {
    let (_temp, path) = write_config(
        r#"
[calendar]
calendar_id = "shifts@example.org"
"#,
        "toml",
    );

    let config = config::load_from_file(Some(path.clone())).expect("config should load");

    assert_eq!(config.calendar.api_base, "https://www.googleapis.com/calendar/v3");
    assert_eq!(config.calendar.request_timeout_secs, 30);
    assert_eq!(config.schedule.time_zone, "Europe/Warsaw");
    assert!(!config.booking.enforce_window);
    assert_eq!(config.cache.ttl_seconds, 60);
    assert_eq!(config.directory.path, "directory.json");
    assert!(config.notifications.webhook_url.is_none());

    std::fs::remove_file(path).ok();
}

#[test]
fn test_config_without_calendar_section_is_rejected() {
    let (_temp, path) = write_config(r#"{ "booking": { "enforce_window": true } }"#, "json");

    let result = config::load_from_file(Some(path.clone()));
    assert!(matches!(result, Err(ShiftError::Config(_))));

    std::fs::remove_file(path).ok();
}

#[test]
fn test_unknown_time_zone_fails_on_use() {
    let (_temp, path) = write_config(
        r#"
[calendar]
calendar_id = "shifts@example.org"

[schedule]
time_zone = "Europe/Atlantis"
"#,
        "toml",
    );

    let config = config::load_from_file(Some(path.clone())).expect("file itself is valid");
    assert!(matches!(config.schedule.tz(), Err(ShiftError::Config(_))));

    std::fs::remove_file(path).ok();
}
