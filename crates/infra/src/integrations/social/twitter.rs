//! Twitter (X) v2 tweets

use async_trait::async_trait;
use linkedgpt_core::PlatformSender;
use linkedgpt_domain::{Platform, PublishResult, Result};
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;

use super::{accepted_body, publish_result};
use crate::http::{check_status, HttpClient};

const TWITTER_API_BASE: &str = "https://api.twitter.com/2";

pub struct TwitterClient {
    http_client: HttpClient,
    base_url: String,
}

#[derive(Debug, Default, Deserialize)]
struct TweetResponse {
    #[serde(default)]
    data: Option<TweetData>,
}

#[derive(Debug, Deserialize)]
struct TweetData {
    id: String,
}

impl TwitterClient {
    pub fn new(http_client: HttpClient) -> Self {
        Self { http_client, base_url: TWITTER_API_BASE.to_string() }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl PlatformSender for TwitterClient {
    fn platform(&self) -> Platform {
        Platform::Twitter
    }

    async fn send(&self, text: &str, token: &str) -> Result<PublishResult> {
        let request = self
            .http_client
            .request(Method::POST, format!("{}/tweets", self.base_url))
            .bearer_auth(token)
            .json(&json!({ "text": text }));

        let response = check_status(self.http_client.send(request).await?, "Twitter publish").await?;
        let bytes = accepted_body(Platform::Twitter, response).await;
        let id = serde_json::from_slice::<TweetResponse>(&bytes)
            .unwrap_or_default()
            .data
            .map(|d| d.id);

        Ok(publish_result(Platform::Twitter, id))
    }
}
