//! Port implementations over [`SupabaseClient`]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use linkedgpt_core::{MessageRepository, MetricsRecorder, PostRepository, ScheduledPostRepository};
use linkedgpt_domain::constants::{
    TABLE_MESSAGES, TABLE_POSTS, TABLE_POST_METRICS, TABLE_SCHEDULED_POSTS,
};
use linkedgpt_domain::{
    MessageRecord, PostMetrics, PostRecord, Result, ScheduledPost, ScheduledPostStatus,
};
use serde_json::json;
use tracing::debug;
use uuid::Uuid;

use super::supabase::{Filter, SupabaseClient};

/// `scheduled_posts` table
pub struct SupabaseScheduledPostRepository {
    client: Arc<SupabaseClient>,
}

impl SupabaseScheduledPostRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ScheduledPostRepository for SupabaseScheduledPostRepository {
    async fn insert_scheduled(&self, post: &ScheduledPost) -> Result<ScheduledPost> {
        let mut stored: Vec<ScheduledPost> = self.client.insert(TABLE_SCHEDULED_POSTS, post).await?;
        Ok(if stored.is_empty() { post.clone() } else { stored.swap_remove(0) })
    }

    async fn find_due(&self, now: DateTime<Utc>) -> Result<Vec<ScheduledPost>> {
        // `Z` suffix: a literal `+` would read as a space in the query.
        let cutoff = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        let rows: Vec<ScheduledPost> = self
            .client
            .select(
                TABLE_SCHEDULED_POSTS,
                &[
                    Filter::eq("status", ScheduledPostStatus::Pending),
                    Filter::lte("scheduled_at", cutoff),
                ],
                Some("scheduled_at.asc"),
            )
            .await?;
        debug!(due = rows.len(), "loaded due scheduled posts");
        Ok(rows)
    }

    async fn mark_published(&self, id: Uuid) -> Result<()> {
        self.client
            .update(
                TABLE_SCHEDULED_POSTS,
                &json!({ "status": ScheduledPostStatus::Published }),
                &[Filter::eq("id", id)],
            )
            .await
    }
}

/// `post_metrics` table
pub struct SupabaseMetricsRecorder {
    client: Arc<SupabaseClient>,
}

impl SupabaseMetricsRecorder {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MetricsRecorder for SupabaseMetricsRecorder {
    async fn record(&self, metrics: PostMetrics) -> Result<()> {
        self.client.insert_minimal(TABLE_POST_METRICS, &metrics).await
    }
}

/// `posts` table
pub struct SupabasePostRepository {
    client: Arc<SupabaseClient>,
}

impl SupabasePostRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PostRepository for SupabasePostRepository {
    async fn insert_post(&self, post: &PostRecord) -> Result<()> {
        self.client.insert_minimal(TABLE_POSTS, post).await
    }

    async fn list_posts(&self, user_id: &str) -> Result<Vec<PostRecord>> {
        self.client
            .select(
                TABLE_POSTS,
                &[Filter::eq("user_id", user_id)],
                Some("published_date.desc.nullslast"),
            )
            .await
    }
}

/// `messages` table
pub struct SupabaseMessageRepository {
    client: Arc<SupabaseClient>,
}

impl SupabaseMessageRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MessageRepository for SupabaseMessageRepository {
    async fn insert_message(&self, message: &MessageRecord) -> Result<()> {
        self.client.insert_minimal(TABLE_MESSAGES, message).await
    }
}
