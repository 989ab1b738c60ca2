//! Google Calendar store
//!
//! Implements [`CalendarStore`] over the Calendar v3 REST API with a bearer
//! token. Only timed events are surfaced; all-day and cancelled events are
//! skipped on read. Writes carry explicit offsets plus the configured zone.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, SecondsFormat};
use reqwest::{Method, Response};
use shiftslot_core::CalendarStore;
use shiftslot_domain::{
    CalendarConfig, CalendarRecord, RecordDraft, Result, ShiftError, StoreError, StoreResult,
};
use tracing::{debug, warn};
use url::Url;

use super::types::{
    EventDateTime, GoogleEvent, GoogleEventInsert, GoogleEventPatch, GoogleEventsResponse,
};
use crate::errors::InfraError;
use crate::http::HttpClient;

const PAGE_SIZE: &str = "2500";

/// Google Calendar implementation of the calendar store port
#[derive(Debug, Clone)]
pub struct GoogleCalendarStore {
    http: HttpClient,
    events_url: Url,
    access_token: String,
    time_zone: String,
}

impl GoogleCalendarStore {
    /// Build the store for one calendar.
    ///
    /// # Errors
    /// `Config` when no access token is configured or the API base is not a
    /// valid URL.
    pub fn new(config: &CalendarConfig, time_zone: impl Into<String>) -> Result<Self> {
        let access_token = config
            .access_token
            .clone()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ShiftError::Config("calendar.access_token is not set".into()))?;

        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            events_url: events_url(&config.api_base, &config.calendar_id)?,
            access_token,
            time_zone: time_zone.into(),
        })
    }

    fn event_url(&self, id: &str) -> StoreResult<Url> {
        let mut url = self.events_url.clone();
        url.path_segments_mut()
            .map_err(|()| StoreError::Unavailable("calendar API base cannot hold a path".into()))?
            .push(id);
        Ok(url)
    }

    fn event_time(&self, instant: DateTime<FixedOffset>) -> EventDateTime {
        EventDateTime {
            date_time: Some(instant),
            date: None,
            time_zone: Some(self.time_zone.clone()),
        }
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> StoreResult<Response> {
        let response = self
            .http
            .send(request.bearer_auth(&self.access_token))
            .await
            .map_err(|err| InfraError(err).into_store_error())?;
        response.error_for_status().map_err(|err| InfraError::from(err).into_store_error())
    }
}

/// `{api_base}/calendars/{calendar_id}/events`, with the id percent-encoded.
fn events_url(api_base: &str, calendar_id: &str) -> Result<Url> {
    let mut url = Url::parse(api_base)
        .map_err(|e| ShiftError::Config(format!("Invalid calendar API base '{api_base}': {e}")))?;
    url.path_segments_mut()
        .map_err(|()| ShiftError::Config(format!("Invalid calendar API base '{api_base}'")))?
        .pop_if_empty()
        .extend(["calendars", calendar_id, "events"]);
    Ok(url)
}

fn into_record(event: GoogleEvent) -> Option<CalendarRecord> {
    if event.is_cancelled() {
        return None;
    }
    let (Some(start), Some(end)) = (event.start.date_time, event.end.date_time) else {
        debug!(event_id = %event.id, "Skipping all-day event");
        return None;
    };
    Some(CalendarRecord {
        id: event.id,
        title: event.summary.unwrap_or_default(),
        body: event.description.unwrap_or_default(),
        start,
        end,
    })
}

#[async_trait]
impl CalendarStore for GoogleCalendarStore {
    async fn list_records(
        &self,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> StoreResult<Vec<CalendarRecord>> {
        let time_min = start.to_rfc3339_opts(SecondsFormat::Secs, true);
        let time_max = end.to_rfc3339_opts(SecondsFormat::Secs, true);
        let mut records = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut query = vec![
                ("timeMin", time_min.clone()),
                ("timeMax", time_max.clone()),
                ("singleEvents", "true".to_string()),
                ("orderBy", "startTime".to_string()),
                ("maxResults", PAGE_SIZE.to_string()),
            ];
            if let Some(token) = page_token.take() {
                query.push(("pageToken", token));
            }

            let request = self.http.request(Method::GET, self.events_url.clone()).query(&query);
            let page: GoogleEventsResponse = self
                .execute(request)
                .await?
                .json()
                .await
                .map_err(|err| InfraError::from(err).into_store_error())?;

            records.extend(page.items.into_iter().filter_map(into_record));

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        debug!(%start, %end, count = records.len(), "Listed calendar records");
        Ok(records)
    }

    async fn create_record(&self, draft: RecordDraft) -> StoreResult<String> {
        let body = GoogleEventInsert {
            summary: draft.title,
            description: draft.body,
            start: self.event_time(draft.start),
            end: self.event_time(draft.end),
        };

        let request = self.http.request(Method::POST, self.events_url.clone()).json(&body);
        let created: GoogleEvent = self
            .execute(request)
            .await?
            .json()
            .await
            .map_err(|err| InfraError::from(err).into_store_error())?;

        debug!(event_id = %created.id, "Created calendar record");
        Ok(created.id)
    }

    async fn update_record(&self, id: &str, title: &str, body: &str) -> StoreResult<()> {
        let patch = GoogleEventPatch { summary: title, description: body };
        let request = self.http.request(Method::PATCH, self.event_url(id)?).json(&patch);
        self.execute(request).await?;
        debug!(event_id = %id, "Updated calendar record");
        Ok(())
    }

    async fn delete_record(&self, id: &str) -> StoreResult<()> {
        let request = self.http.request(Method::DELETE, self.event_url(id)?);
        if let Err(err) = self.execute(request).await {
            warn!(event_id = %id, error = %err, "Calendar delete failed");
            return Err(err);
        }
        debug!(event_id = %id, "Deleted calendar record");
        Ok(())
    }
}
