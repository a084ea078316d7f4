//! LinkedIn events

use async_trait::async_trait;
use linkedgpt_core::CalendarFetcher;
use linkedgpt_domain::{CalendarSource, Result};
use reqwest::header::{HeaderName, HeaderValue};
use serde_json::Value;

use super::fetch_event_array;
use crate::http::HttpClient;
use crate::integrations::social::RESTLI_PROTOCOL_HEADER;

const LINKEDIN_API_BASE: &str = "https://api.linkedin.com/v2";

pub struct LinkedInEventsFetcher {
    http_client: HttpClient,
    base_url: String,
}

impl LinkedInEventsFetcher {
    pub fn new(http_client: HttpClient) -> Self {
        Self { http_client, base_url: LINKEDIN_API_BASE.to_string() }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl CalendarFetcher for LinkedInEventsFetcher {
    fn source(&self) -> CalendarSource {
        CalendarSource::LinkedIn
    }

    /// The `elements` array of `/events`.
    async fn fetch_events(&self, token: &str) -> Result<Vec<Value>> {
        let url = format!("{}/events", self.base_url);
        let restli = (
            HeaderName::from_static("x-restli-protocol-version"),
            HeaderValue::from_static(RESTLI_PROTOCOL_HEADER.1),
        );
        fetch_event_array(&self.http_client, &url, token, Some(restli), "elements", "LinkedIn events")
            .await
    }
}

#[cfg(test)]
mod tests {
    use linkedgpt_domain::LinkedGptError;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn fetcher(server: &MockServer) -> LinkedInEventsFetcher {
        LinkedInEventsFetcher::new(HttpClient::new().unwrap())
            .with_base_url(format!("{}/v2", server.uri()))
    }

    #[tokio::test]
    async fn returns_elements_with_restli_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/events"))
            .and(header("Authorization", "Bearer li"))
            .and(header("X-Restli-Protocol-Version", "2.0.0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "elements": [{"id": 1}, {"id": 2}],
                "paging": {"count": 2}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let events = fetcher(&server).fetch_events("li").await.unwrap();
        assert_eq!(events.len(), 2);
    }

    #[tokio::test]
    async fn non_array_elements_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"elements": "nope"})))
            .mount(&server)
            .await;

        let err = fetcher(&server).fetch_events("li").await.unwrap_err();
        assert!(matches!(err, LinkedGptError::InvalidResponse(_)));
    }
}
