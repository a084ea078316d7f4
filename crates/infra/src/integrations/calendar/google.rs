//! Google Calendar primary-calendar events

use async_trait::async_trait;
use linkedgpt_core::CalendarFetcher;
use linkedgpt_domain::{CalendarSource, Result};
use serde_json::Value;

use super::fetch_event_array;
use crate::http::HttpClient;

const GOOGLE_CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";

pub struct GoogleCalendarFetcher {
    http_client: HttpClient,
    base_url: String,
}

impl GoogleCalendarFetcher {
    pub fn new(http_client: HttpClient) -> Self {
        Self { http_client, base_url: GOOGLE_CALENDAR_API_BASE.to_string() }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl CalendarFetcher for GoogleCalendarFetcher {
    fn source(&self) -> CalendarSource {
        CalendarSource::Google
    }

    /// The `items` array of the primary calendar's events listing.
    async fn fetch_events(&self, token: &str) -> Result<Vec<Value>> {
        let url = format!("{}/calendars/primary/events", self.base_url);
        fetch_event_array(&self.http_client, &url, token, None, "items", "Google Calendar").await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn fetcher(server: &MockServer) -> GoogleCalendarFetcher {
        GoogleCalendarFetcher::new(HttpClient::new().unwrap())
            .with_base_url(format!("{}/calendar/v3", server.uri()))
    }

    #[tokio::test]
    async fn returns_items_unmodified() {
        let items = json!([
            {"id": "e1", "summary": "Standup", "start": {"dateTime": "2025-01-01T09:00:00Z"}},
            {"id": "e2", "custom": {"nested": [1, 2, 3]}}
        ]);
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/calendar/v3/calendars/primary/events"))
            .and(header("Authorization", "Bearer g-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "kind": "calendar#events",
                "items": items
            })))
            .expect(1)
            .mount(&server)
            .await;

        let events = fetcher(&server).fetch_events("g-token").await.unwrap();
        assert_eq!(Value::Array(events), items);
    }

    #[tokio::test]
    async fn expired_token_is_upstream_401() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = fetcher(&server).fetch_events("old").await.unwrap_err();
        assert_eq!(err.status(), Some(401));
    }
}
