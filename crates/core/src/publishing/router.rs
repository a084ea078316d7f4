//! Publishing router
//!
//! Dispatches one publish request to the sender for its platform. Dispatch is
//! an exhaustive match over [`Platform`], so an unknown tag can only enter
//! through [`PublishingRouter::publish_tag`], which rejects it before any
//! network call.

use std::sync::Arc;

use linkedgpt_domain::{LinkedGptError, Platform, PostMetrics, PublishResult, Result};
use tracing::{info, instrument, warn};

use super::ports::{MetricsRecorder, PlatformSender};
use crate::clock_ports::Clock;

/// One sender per supported platform
#[derive(Clone)]
pub struct PlatformSenders {
    pub linkedin: Arc<dyn PlatformSender>,
    pub twitter: Arc<dyn PlatformSender>,
    pub facebook: Arc<dyn PlatformSender>,
}

pub struct PublishingRouter {
    senders: PlatformSenders,
    metrics: Arc<dyn MetricsRecorder>,
    clock: Arc<dyn Clock>,
}

impl PublishingRouter {
    pub fn new(
        senders: PlatformSenders,
        metrics: Arc<dyn MetricsRecorder>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { senders, metrics, clock }
    }

    fn sender(&self, platform: Platform) -> &dyn PlatformSender {
        match platform {
            Platform::LinkedIn => self.senders.linkedin.as_ref(),
            Platform::Twitter => self.senders.twitter.as_ref(),
            Platform::Facebook => self.senders.facebook.as_ref(),
        }
    }

    /// Publish `text` to `platform` with `token`.
    ///
    /// On success a metrics row is written best-effort. On failure nothing is
    /// written and the sender's error is returned unchanged.
    #[instrument(skip(self, text, token), fields(platform = %platform))]
    pub async fn publish(&self, text: &str, platform: Platform, token: &str) -> Result<PublishResult> {
        if token.trim().is_empty() {
            return Err(LinkedGptError::Configuration(format!("{platform} API key not configured")));
        }

        let result = match self.sender(platform).send(text, token).await {
            Ok(result) => result,
            Err(err) => {
                warn!(error = %err, kind = err.label(), "publish failed");
                return Err(err);
            }
        };

        info!(platform_post_id = %result.platform_post_id, "post published");
        self.metrics
            .record_best_effort(PostMetrics::published(&result, platform, self.clock.now()))
            .await;

        Ok(result)
    }

    /// Parse a raw platform tag and publish.
    ///
    /// Unknown tags fail with `UnsupportedPlatform` before any network call.
    pub async fn publish_tag(&self, text: &str, tag: &str, token: &str) -> Result<PublishResult> {
        let platform: Platform = tag.parse()?;
        self.publish(text, platform, token).await
    }
}
