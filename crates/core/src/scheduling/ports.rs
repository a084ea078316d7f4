//! Port interfaces for scheduled posts

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use linkedgpt_domain::{Result, ScheduledPost};
use uuid::Uuid;

/// Persistence for the `scheduled_posts` table
#[async_trait]
pub trait ScheduledPostRepository: Send + Sync {
    /// Insert a new row and return it as stored
    async fn insert_scheduled(&self, post: &ScheduledPost) -> Result<ScheduledPost>;

    /// Rows with status `pending` and `scheduled_at <= now`
    async fn find_due(&self, now: DateTime<Utc>) -> Result<Vec<ScheduledPost>>;

    /// Set status to `published` for the row with `id`
    async fn mark_published(&self, id: Uuid) -> Result<()>;
}
