//! Microsoft Graph (Outlook) events

use async_trait::async_trait;
use linkedgpt_core::CalendarFetcher;
use linkedgpt_domain::{CalendarSource, Result};
use reqwest::header::{HeaderName, HeaderValue};
use serde_json::Value;

use super::fetch_event_array;
use crate::http::HttpClient;

const MICROSOFT_GRAPH_API_BASE: &str = "https://graph.microsoft.com/v1.0";
const OUTLOOK_TIMEZONE_HEADER: &str = r#"outlook.timezone="UTC""#;

pub struct OutlookCalendarFetcher {
    http_client: HttpClient,
    base_url: String,
}

impl OutlookCalendarFetcher {
    pub fn new(http_client: HttpClient) -> Self {
        Self { http_client, base_url: MICROSOFT_GRAPH_API_BASE.to_string() }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl CalendarFetcher for OutlookCalendarFetcher {
    fn source(&self) -> CalendarSource {
        CalendarSource::Outlook
    }

    /// The `value` array of `/me/events`, with times requested in UTC.
    async fn fetch_events(&self, token: &str) -> Result<Vec<Value>> {
        let url = format!("{}/me/events", self.base_url);
        let prefer = (
            HeaderName::from_static("prefer"),
            HeaderValue::from_static(OUTLOOK_TIMEZONE_HEADER),
        );
        fetch_event_array(&self.http_client, &url, token, Some(prefer), "value", "Outlook").await
    }
}
