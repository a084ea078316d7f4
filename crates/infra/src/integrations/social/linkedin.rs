//! LinkedIn UGC posts and direct messages

use async_trait::async_trait;
use linkedgpt_core::{DirectMessenger, PlatformSender};
use linkedgpt_domain::constants::LINKEDIN_MESSAGE_SUBJECT;
use linkedgpt_domain::{Platform, PublishResult, Result};
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::{accepted_body, publish_result, RESTLI_PROTOCOL_HEADER};
use crate::http::{check_status, HttpClient};

const LINKEDIN_API_BASE: &str = "https://api.linkedin.com/v2";
const AUTHOR_URN: &str = "urn:li:person:me";

pub struct LinkedInClient {
    http_client: HttpClient,
    base_url: String,
}

#[derive(Debug, Default, Deserialize)]
struct CreatedEntity {
    #[serde(default)]
    id: Option<String>,
}

impl LinkedInClient {
    pub fn new(http_client: HttpClient) -> Self {
        Self { http_client, base_url: LINKEDIN_API_BASE.to_string() }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Create a public text share as the token's owner.
    pub async fn create_post(&self, text: &str, token: &str) -> Result<PublishResult> {
        let body = json!({
            "author": AUTHOR_URN,
            "lifecycleState": "PUBLISHED",
            "specificContent": {
                "com.linkedin.ugc.ShareContent": {
                    "shareCommentary": { "text": text },
                    "shareMediaCategory": "NONE"
                }
            },
            "visibility": { "visibility": "PUBLIC" }
        });

        let request = self
            .http_client
            .request(Method::POST, format!("{}/ugcPosts", self.base_url))
            .bearer_auth(token)
            .header(RESTLI_PROTOCOL_HEADER.0, RESTLI_PROTOCOL_HEADER.1)
            .json(&body);

        let response = check_status(self.http_client.send(request).await?, "LinkedIn publish").await?;

        // The new share's URN comes back in `x-restli-id`; the body is often empty.
        let header_id = response
            .headers()
            .get("x-restli-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let id = match header_id {
            Some(id) => Some(id),
            None => {
                let bytes = accepted_body(Platform::LinkedIn, response).await;
                serde_json::from_slice::<CreatedEntity>(&bytes).unwrap_or_default().id
            }
        };

        debug!(id = ?id, "LinkedIn share created");
        Ok(publish_result(Platform::LinkedIn, id))
    }

    /// Send a direct message to one recipient URN.
    pub async fn send_direct_message(&self, text: &str, recipient_urn: &str, token: &str) -> Result<()> {
        let body = json!({
            "recipients": [recipient_urn],
            "subject": LINKEDIN_MESSAGE_SUBJECT,
            "body": text
        });

        let request = self
            .http_client
            .request(Method::POST, format!("{}/messages", self.base_url))
            .bearer_auth(token)
            .header(RESTLI_PROTOCOL_HEADER.0, RESTLI_PROTOCOL_HEADER.1)
            .json(&body);

        check_status(self.http_client.send(request).await?, "LinkedIn message").await?;
        Ok(())
    }
}

#[async_trait]
impl PlatformSender for LinkedInClient {
    fn platform(&self) -> Platform {
        Platform::LinkedIn
    }

    async fn send(&self, text: &str, token: &str) -> Result<PublishResult> {
        self.create_post(text, token).await
    }
}

#[async_trait]
impl DirectMessenger for LinkedInClient {
    async fn send_message(&self, text: &str, recipient_urn: &str, token: &str) -> Result<()> {
        self.send_direct_message(text, recipient_urn, token).await
    }
}
