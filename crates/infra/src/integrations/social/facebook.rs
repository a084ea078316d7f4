//! Facebook Graph API feed posts

use async_trait::async_trait;
use linkedgpt_core::PlatformSender;
use linkedgpt_domain::{Platform, PublishResult, Result};
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;

use super::{accepted_body, publish_result};
use crate::http::{check_status, HttpClient};

const FACEBOOK_GRAPH_BASE: &str = "https://graph.facebook.com/v18.0";

pub struct FacebookClient {
    http_client: HttpClient,
    base_url: String,
}

#[derive(Debug, Default, Deserialize)]
struct FeedResponse {
    #[serde(default)]
    id: Option<String>,
}

impl FacebookClient {
    pub fn new(http_client: HttpClient) -> Self {
        Self { http_client, base_url: FACEBOOK_GRAPH_BASE.to_string() }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl PlatformSender for FacebookClient {
    fn platform(&self) -> Platform {
        Platform::Facebook
    }

    /// Graph takes the token as the `access_token` query parameter.
    async fn send(&self, text: &str, token: &str) -> Result<PublishResult> {
        let request = self
            .http_client
            .request(Method::POST, format!("{}/me/feed", self.base_url))
            .query(&[("access_token", token)])
            .json(&json!({ "message": text }));

        let response = check_status(self.http_client.send(request).await?, "Facebook publish").await?;
        let bytes = accepted_body(Platform::Facebook, response).await;
        let id = serde_json::from_slice::<FeedResponse>(&bytes).unwrap_or_default().id;

        Ok(publish_result(Platform::Facebook, id))
    }
}
