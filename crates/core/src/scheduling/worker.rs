//! Scheduled-post worker
//!
//! One run polls `scheduled_posts` for due rows and publishes each to every
//! listed platform, sequentially. Per-platform failures are logged and the run
//! moves on; after every platform of a post has been attempted the row is
//! flipped to `published` regardless of outcome. There is no row leasing, so
//! overlapping runs may publish a post twice.

use std::sync::Arc;

use linkedgpt_domain::{LinkedGptError, Platform, ScheduledPost};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::ports::ScheduledPostRepository;
use crate::clock_ports::Clock;
use crate::credential_ports::CredentialProvider;
use crate::publishing::PublishingRouter;

/// What happened to one (post, platform) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutcomeStatus {
    Published { platform_post_id: String },
    /// No token configured for the platform; nothing was sent.
    Skipped,
    Failed { kind: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformOutcome {
    pub post_id: Uuid,
    pub platform: String,
    #[serde(flatten)]
    pub status: OutcomeStatus,
}

/// Summary of one worker run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkerReport {
    /// Number of due posts found and flipped
    pub processed: usize,
    pub outcomes: Vec<PlatformOutcome>,
}

impl WorkerReport {
    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| matches!(o.status, OutcomeStatus::Failed { .. })).count()
    }
}

pub struct ScheduledPostWorker {
    repository: Arc<dyn ScheduledPostRepository>,
    router: Arc<PublishingRouter>,
    credentials: Arc<dyn CredentialProvider>,
    clock: Arc<dyn Clock>,
}

impl ScheduledPostWorker {
    pub fn new(
        repository: Arc<dyn ScheduledPostRepository>,
        router: Arc<PublishingRouter>,
        credentials: Arc<dyn CredentialProvider>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { repository, router, credentials, clock }
    }

    /// Process every post due at the clock's current time.
    ///
    /// Only the due-posts query can fail the run.
    #[instrument(skip(self))]
    pub async fn run_once(&self) -> linkedgpt_domain::Result<WorkerReport> {
        let now = self.clock.now();
        let due = self.repository.find_due(now).await?;

        if due.is_empty() {
            debug!("No scheduled posts due");
            return Ok(WorkerReport::default());
        }

        info!(count = due.len(), "Publishing due scheduled posts");

        let mut report = WorkerReport { processed: due.len(), outcomes: Vec::new() };
        for post in &due {
            let outcomes = self.publish_post(post).await;
            let failed = outcomes
                .iter()
                .filter(|o| matches!(o.status, OutcomeStatus::Failed { .. }))
                .count();

            if let Err(err) = self.repository.mark_published(post.id).await {
                warn!(post_id = %post.id, error = %err, "mark_published failed");
            } else if failed > 0 {
                warn!(post_id = %post.id, failed, "post marked published with failed platforms");
            }

            report.outcomes.extend(outcomes);
        }

        info!(
            processed = report.processed,
            failures = report.failures(),
            "Scheduled post run completed"
        );
        Ok(report)
    }

    async fn publish_post(&self, post: &ScheduledPost) -> Vec<PlatformOutcome> {
        let mut outcomes = Vec::with_capacity(post.platforms.len());

        for (tag, parsed) in post.platforms.iter().zip(post.parsed_platforms()) {
            let status = match parsed {
                Ok(platform) => self.publish_to(post, platform).await,
                Err(err) => {
                    warn!(post_id = %post.id, platform = %tag, "unsupported platform tag");
                    failed(&err)
                }
            };
            outcomes.push(PlatformOutcome { post_id: post.id, platform: tag.clone(), status });
        }

        outcomes
    }

    async fn publish_to(&self, post: &ScheduledPost, platform: Platform) -> OutcomeStatus {
        let Some(token) = self.credentials.platform_token(platform) else {
            debug!(post_id = %post.id, %platform, "no token configured, skipping");
            return OutcomeStatus::Skipped;
        };

        match self.router.publish(&post.content, platform, &token).await {
            Ok(result) => OutcomeStatus::Published { platform_post_id: result.platform_post_id },
            Err(err) => {
                warn!(post_id = %post.id, %platform, error = %err, "Failed to publish scheduled post");
                failed(&err)
            }
        }
    }
}

fn failed(err: &LinkedGptError) -> OutcomeStatus {
    OutcomeStatus::Failed { kind: err.label().to_string(), message: err.to_string() }
}
