//! Immediate publishing on behalf of a signed-in user

use std::sync::Arc;

use linkedgpt_domain::{LinkedGptError, Platform, PostRecord, PublishResult, Result, Session};
use tracing::{instrument, warn};

use super::ports::PostRepository;
use super::router::PublishingRouter;
use crate::clock_ports::Clock;
use crate::content::prompts::with_hashtags;
use crate::credential_ports::CredentialProvider;

/// Publishes now and keeps the user's post history
pub struct PublishingService {
    router: Arc<PublishingRouter>,
    credentials: Arc<dyn CredentialProvider>,
    posts: Arc<dyn PostRepository>,
    clock: Arc<dyn Clock>,
}

impl PublishingService {
    pub fn new(
        router: Arc<PublishingRouter>,
        credentials: Arc<dyn CredentialProvider>,
        posts: Arc<dyn PostRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { router, credentials, posts, clock }
    }

    /// Publish `content` (plus formatted hashtags) to `platform`.
    ///
    /// `token` overrides the configured platform credential. Without either,
    /// fails with `Configuration` before any network call.
    #[instrument(skip(self, session, content, hashtags, token), fields(user_id = %session.user_id, platform = %platform))]
    pub async fn publish_now(
        &self,
        session: &Session,
        content: &str,
        platform: Platform,
        hashtags: &[String],
        token: Option<String>,
    ) -> Result<PublishResult> {
        let token = token
            .filter(|t| !t.trim().is_empty())
            .or_else(|| self.credentials.platform_token(platform))
            .ok_or_else(|| {
                LinkedGptError::Configuration(format!("{platform} API key not configured"))
            })?;

        let text = with_hashtags(content, hashtags);
        let result = self.router.publish(&text, platform, &token).await?;

        let record = PostRecord::published(&session.user_id, text, platform, &result, self.clock.now());
        if let Err(err) = self.posts.insert_post(&record).await {
            warn!(error = %err, "failed to record post history");
        }

        Ok(result)
    }

    /// The session user's post history
    pub async fn history(&self, session: &Session) -> Result<Vec<PostRecord>> {
        self.posts.list_posts(&session.user_id).await
    }
}
