//! Google Calendar v3 wire types
//!
//! Only the fields the store reads or writes are modelled.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// `events.list` response page
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleEventsResponse {
    #[serde(default)]
    pub items: Vec<GoogleEvent>,
    pub next_page_token: Option<String>,
}

/// Event resource as returned by the API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleEvent {
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub start: EventDateTime,
    pub end: EventDateTime,
}

/// Start or end of an event; all-day events carry `date` instead of
/// `dateTime`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDateTime {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

/// Body of `events.insert`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleEventInsert {
    pub summary: String,
    pub description: String,
    pub start: EventDateTime,
    pub end: EventDateTime,
}

/// Body of `events.patch`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleEventPatch<'a> {
    pub summary: &'a str,
    pub description: &'a str,
}

impl GoogleEvent {
    pub fn is_cancelled(&self) -> bool {
        self.status.as_deref() == Some("cancelled")
    }
}
