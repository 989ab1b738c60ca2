//! Shared helpers for the infra integration suites.

#![allow(dead_code)]

use chrono::{DateTime, FixedOffset};
use serde_json::{json, Value};
use shiftslot_domain::CalendarConfig;

pub const CALENDAR_ID: &str = "shifts@example.org";
pub const TOKEN: &str = "test-token";

/// Events path the store hits for [`CALENDAR_ID`].
pub fn events_path() -> String {
    format!("/calendars/{CALENDAR_ID}/events")
}

/// Calendar config pointing at a mock server.
pub fn calendar_config(api_base: &str) -> CalendarConfig {
    CalendarConfig {
        calendar_id: CALENDAR_ID.to_string(),
        api_base: api_base.to_string(),
        access_token: Some(TOKEN.to_string()),
        request_timeout_secs: 5,
    }
}

pub fn at(rfc3339: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(rfc3339).expect("valid RFC 3339 timestamp")
}

/// Timed event resource as the API returns it.
pub fn timed_event(id: &str, summary: &str, description: &str, start: &str, end: &str) -> Value {
    json!({
        "id": id,
        "status": "confirmed",
        "summary": summary,
        "description": description,
        "start": { "dateTime": start, "timeZone": "Europe/Warsaw" },
        "end": { "dateTime": end, "timeZone": "Europe/Warsaw" }
    })
}

/// All-day event resource.
pub fn all_day_event(id: &str, summary: &str, date: &str) -> Value {
    json!({
        "id": id,
        "status": "confirmed",
        "summary": summary,
        "start": { "date": date },
        "end": { "date": date }
    })
}
