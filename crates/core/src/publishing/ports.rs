//! Port interfaces for publishing
//!
//! These traits define the boundaries between the publishing logic and the
//! vendor clients / storage adapters that implement them.

use async_trait::async_trait;
use linkedgpt_domain::{Platform, PostMetrics, PostRecord, PublishResult, Result};
use tracing::warn;

/// One platform's "create post" endpoint
#[async_trait]
pub trait PlatformSender: Send + Sync {
    /// Platform this sender publishes to
    fn platform(&self) -> Platform;

    /// Publish `text` with a single POST.
    ///
    /// Non-2xx responses surface as `Upstream` with the vendor's status,
    /// transport failures as `Network`.
    async fn send(&self, text: &str, token: &str) -> Result<PublishResult>;
}

/// Sink for `post_metrics` rows
#[async_trait]
pub trait MetricsRecorder: Send + Sync {
    /// Persist one metrics row
    async fn record(&self, metrics: PostMetrics) -> Result<()>;

    /// Persist one metrics row, logging and discarding any failure.
    ///
    /// A publish that reached the platform is never reported as failed
    /// because bookkeeping failed afterwards.
    async fn record_best_effort(&self, metrics: PostMetrics) {
        let post_id = metrics.post_id.clone();
        let platform = metrics.platform;
        if let Err(err) = self.record(metrics).await {
            warn!(%post_id, %platform, error = %err, "failed to record post metrics");
        }
    }
}

/// Post history (`posts` table)
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn insert_post(&self, post: &PostRecord) -> Result<()>;

    /// All rows owned by `user_id`, newest first
    async fn list_posts(&self, user_id: &str) -> Result<Vec<PostRecord>>;
}
