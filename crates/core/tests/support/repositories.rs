//! In-memory repository implementations for testing

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use linkedgpt_core::{MessageRepository, MetricsRecorder, PostRepository, ScheduledPostRepository};
use linkedgpt_domain::{
    LinkedGptError, MessageRecord, PostMetrics, PostRecord, Result as DomainResult, ScheduledPost,
    ScheduledPostStatus,
};
use tokio::sync::Mutex as TokioMutex;
use uuid::Uuid;

/// In-memory `scheduled_posts` table
#[derive(Default, Clone)]
pub struct MockScheduledPostRepository {
    pub rows: Arc<TokioMutex<Vec<ScheduledPost>>>,
    pub fail_find: bool,
}

impl MockScheduledPostRepository {
    pub async fn get(&self, id: Uuid) -> Option<ScheduledPost> {
        self.rows.lock().await.iter().find(|p| p.id == id).cloned()
    }
}

#[async_trait]
impl ScheduledPostRepository for MockScheduledPostRepository {
    async fn insert_scheduled(&self, post: &ScheduledPost) -> DomainResult<ScheduledPost> {
        self.rows.lock().await.push(post.clone());
        Ok(post.clone())
    }

    async fn find_due(&self, now: DateTime<Utc>) -> DomainResult<Vec<ScheduledPost>> {
        if self.fail_find {
            return Err(LinkedGptError::upstream(503, "database unavailable"));
        }
        Ok(self.rows.lock().await.iter().filter(|p| p.is_due(now)).cloned().collect())
    }

    async fn mark_published(&self, id: Uuid) -> DomainResult<()> {
        let mut rows = self.rows.lock().await;
        if let Some(row) = rows.iter_mut().find(|p| p.id == id) {
            row.status = ScheduledPostStatus::Published;
        }
        Ok(())
    }
}

/// Collects metrics rows; optionally fails every write
#[derive(Default, Clone)]
pub struct MockMetricsRecorder {
    pub rows: Arc<TokioMutex<Vec<PostMetrics>>>,
    pub fail: bool,
}

#[async_trait]
impl MetricsRecorder for MockMetricsRecorder {
    async fn record(&self, metrics: PostMetrics) -> DomainResult<()> {
        if self.fail {
            return Err(LinkedGptError::upstream(500, "insert failed"));
        }
        self.rows.lock().await.push(metrics);
        Ok(())
    }
}

#[derive(Default, Clone)]
pub struct MockPostRepository {
    pub rows: Arc<TokioMutex<Vec<PostRecord>>>,
}

#[async_trait]
impl PostRepository for MockPostRepository {
    async fn insert_post(&self, post: &PostRecord) -> DomainResult<()> {
        self.rows.lock().await.push(post.clone());
        Ok(())
    }

    async fn list_posts(&self, user_id: &str) -> DomainResult<Vec<PostRecord>> {
        Ok(self.rows.lock().await.iter().filter(|p| p.user_id == user_id).cloned().collect())
    }
}

#[derive(Default, Clone)]
pub struct MockMessageRepository {
    pub rows: Arc<TokioMutex<Vec<MessageRecord>>>,
    pub fail: bool,
}

#[async_trait]
impl MessageRepository for MockMessageRepository {
    async fn insert_message(&self, message: &MessageRecord) -> DomainResult<()> {
        if self.fail {
            return Err(LinkedGptError::Network("connection reset".into()));
        }
        self.rows.lock().await.push(message.clone());
        Ok(())
    }
}
