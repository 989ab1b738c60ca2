//! Webhook notifier
//!
//! POSTs `{ "to", "subject", "body" }` as JSON to a configured URL; whatever
//! sits behind it (mail relay, chat bot) does the delivery.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use shiftslot_core::Notifier;
use shiftslot_domain::{Result, ShiftError};
use tracing::debug;
use url::Url;

use crate::errors::InfraError;
use crate::http::HttpClient;

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    to: &'a str,
    subject: &'a str,
    body: &'a str,
}

/// Notifier that forwards messages to an HTTP endpoint
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    http: HttpClient,
    url: Url,
}

impl WebhookNotifier {
    /// # Errors
    /// `Config` when the URL does not parse.
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let url = Url::parse(url)
            .map_err(|e| ShiftError::Config(format!("Invalid webhook URL '{url}': {e}")))?;
        let http = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self { http, url })
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        let request = self
            .http
            .request(Method::POST, self.url.clone())
            .json(&WebhookPayload { to, subject, body });

        let response = self.http.send(request).await?;
        response.error_for_status().map_err(InfraError::from)?;
        debug!(%to, "Webhook notification accepted");
        Ok(())
    }
}
