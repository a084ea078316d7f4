//! Scheduling service

use std::sync::Arc;

use chrono::{DateTime, Utc};
use linkedgpt_domain::{LinkedGptError, Platform, Result, ScheduledPost, Session};
use tracing::{info, instrument};

use super::ports::ScheduledPostRepository;

pub struct SchedulingService {
    repository: Arc<dyn ScheduledPostRepository>,
}

impl SchedulingService {
    pub fn new(repository: Arc<dyn ScheduledPostRepository>) -> Self {
        Self { repository }
    }

    /// Persist one pending row for the worker to pick up at `scheduled_at`.
    ///
    /// A time in the past is accepted; the next worker run publishes it.
    #[instrument(skip(self, session, content), fields(user_id = %session.user_id))]
    pub async fn schedule_post(
        &self,
        session: &Session,
        content: &str,
        platforms: &[Platform],
        scheduled_at: DateTime<Utc>,
    ) -> Result<ScheduledPost> {
        if content.trim().is_empty() {
            return Err(LinkedGptError::InvalidInput("content must not be empty".to_string()));
        }
        if platforms.is_empty() {
            return Err(LinkedGptError::InvalidInput(
                "at least one platform is required".to_string(),
            ));
        }

        let mut unique = platforms.to_vec();
        unique.sort();
        unique.dedup();

        let post = ScheduledPost::new(&session.user_id, content, &unique, scheduled_at);
        let stored = self.repository.insert_scheduled(&post).await?;
        info!(post_id = %stored.id, %scheduled_at, "post scheduled");
        Ok(stored)
    }
}
