//! Posts, scheduled posts and publish bookkeeping

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Platform;
use crate::{impl_status_conversions, Result};

/// Lifecycle of a `scheduled_posts` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduledPostStatus {
    Pending,
    Published,
}

impl_status_conversions!(ScheduledPostStatus {
    Pending => "pending",
    Published => "published",
});

/// A post whose publication is deferred to `scheduled_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledPost {
    pub id: Uuid,
    pub user_id: String,
    pub content: String,
    /// Platform tags as persisted. Parsed at dispatch time so that a row
    /// carrying an unknown tag still gets processed.
    #[serde(default)]
    pub platforms: Vec<String>,
    pub scheduled_at: DateTime<Utc>,
    pub status: ScheduledPostStatus,
}

impl ScheduledPost {
    /// New pending post with a fresh identifier.
    pub fn new(
        user_id: impl Into<String>,
        content: impl Into<String>,
        platforms: &[Platform],
        scheduled_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            content: content.into(),
            platforms: platforms.iter().map(|p| p.as_str().to_string()).collect(),
            scheduled_at,
            status: ScheduledPostStatus::Pending,
        }
    }

    /// Whether the worker should pick this row up at `now`.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.status == ScheduledPostStatus::Pending && self.scheduled_at <= now
    }

    /// Parse every stored tag.
    pub fn parsed_platforms(&self) -> Vec<Result<Platform>> {
        self.platforms.iter().map(|tag| tag.parse()).collect()
    }
}

/// Returned by a successful publish call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishResult {
    pub platform_post_id: String,
}

/// Lightweight engagement-tracking row written after a publish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostMetrics {
    pub id: Uuid,
    pub post_id: String,
    pub platform: Platform,
    pub status: String,
    pub likes: i64,
    pub comments: i64,
    pub shares: i64,
    pub recorded_at: DateTime<Utc>,
}

impl PostMetrics {
    /// Zeroed counters for a freshly published post.
    pub fn published(result: &PublishResult, platform: Platform, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            post_id: result.platform_post_id.clone(),
            platform,
            status: PostStatus::Published.to_string(),
            likes: 0,
            comments: 0,
            shares: 0,
            recorded_at: now,
        }
    }
}

/// Status of a `posts` history row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Scheduled,
    Published,
}

impl_status_conversions!(PostStatus {
    Draft => "draft",
    Scheduled => "scheduled",
    Published => "published",
});

/// Entry in the user's post history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: Uuid,
    pub user_id: String,
    pub content: String,
    pub platform: Option<Platform>,
    pub status: PostStatus,
    #[serde(default)]
    pub platform_post_id: Option<String>,
    #[serde(default)]
    pub scheduled_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub published_date: Option<DateTime<Utc>>,
}

impl PostRecord {
    pub fn published(
        user_id: impl Into<String>,
        content: impl Into<String>,
        platform: Platform,
        result: &PublishResult,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            content: content.into(),
            platform: Some(platform),
            status: PostStatus::Published,
            platform_post_id: Some(result.platform_post_id.clone()),
            scheduled_date: None,
            published_date: Some(now),
        }
    }
}
