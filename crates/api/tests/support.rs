//! Test harness: the real router over wiremock vendors and in-memory tables
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use chrono::{DateTime, TimeZone, Utc};
use linkedgpt_api::{create_router, AppContext, AppPorts};
use linkedgpt_core::{
    CalendarFetchers, CredentialProvider, FixedClock, MessageRepository, MetricsRecorder,
    PlatformSenders, PostRepository, ScheduledPostRepository,
};
use linkedgpt_domain::{
    Config, LinkedGptError, MessageRecord, Platform, PostMetrics, PostRecord, Result,
    ScheduledPost, ScheduledPostStatus,
};
use linkedgpt_infra::{
    FacebookClient, GoogleCalendarFetcher, HttpClient, LinkedInClient, LinkedInEventsFetcher,
    OpenAIClient, OutlookCalendarFetcher, TwitterClient,
};
use serde_json::Value;
use tokio::sync::Mutex;
use tower::ServiceExt;
use uuid::Uuid;
use wiremock::MockServer;

pub const USER: &str = "user-1";

/// 2025-01-01T10:00:01Z
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 1).unwrap()
}

/// All four tables in memory
#[derive(Default)]
pub struct InMemoryStore {
    pub scheduled: Mutex<Vec<ScheduledPost>>,
    pub metrics: Mutex<Vec<PostMetrics>>,
    pub posts: Mutex<Vec<PostRecord>>,
    pub messages: Mutex<Vec<MessageRecord>>,
    pub fail_find_due: AtomicBool,
}

impl InMemoryStore {
    pub async fn scheduled_status(&self, id: Uuid) -> Option<ScheduledPostStatus> {
        self.scheduled.lock().await.iter().find(|p| p.id == id).map(|p| p.status)
    }
}

#[async_trait]
impl ScheduledPostRepository for InMemoryStore {
    async fn insert_scheduled(&self, post: &ScheduledPost) -> Result<ScheduledPost> {
        self.scheduled.lock().await.push(post.clone());
        Ok(post.clone())
    }

    async fn find_due(&self, now: DateTime<Utc>) -> Result<Vec<ScheduledPost>> {
        if self.fail_find_due.load(Ordering::SeqCst) {
            return Err(LinkedGptError::upstream(503, "storage select failed: unavailable"));
        }
        Ok(self.scheduled.lock().await.iter().filter(|p| p.is_due(now)).cloned().collect())
    }

    async fn mark_published(&self, id: Uuid) -> Result<()> {
        if let Some(post) = self.scheduled.lock().await.iter_mut().find(|p| p.id == id) {
            post.status = ScheduledPostStatus::Published;
        }
        Ok(())
    }
}

#[async_trait]
impl MetricsRecorder for InMemoryStore {
    async fn record(&self, metrics: PostMetrics) -> Result<()> {
        self.metrics.lock().await.push(metrics);
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn insert_post(&self, post: &PostRecord) -> Result<()> {
        self.posts.lock().await.push(post.clone());
        Ok(())
    }

    async fn list_posts(&self, user_id: &str) -> Result<Vec<PostRecord>> {
        Ok(self.posts.lock().await.iter().filter(|p| p.user_id == user_id).cloned().collect())
    }
}

#[async_trait]
impl MessageRepository for InMemoryStore {
    async fn insert_message(&self, message: &MessageRecord) -> Result<()> {
        self.messages.lock().await.push(message.clone());
        Ok(())
    }
}

#[derive(Default, Clone)]
pub struct StaticCredentials(HashMap<Platform, String>);

impl StaticCredentials {
    pub fn with(mut self, platform: Platform, token: &str) -> Self {
        self.0.insert(platform, token.to_string());
        self
    }
}

impl CredentialProvider for StaticCredentials {
    fn platform_token(&self, platform: Platform) -> Option<String> {
        self.0.get(&platform).cloned()
    }
}

pub struct TestApp {
    pub router: Router,
    /// Stands in for every vendor; paths are prefixed like the real APIs.
    pub upstream: MockServer,
    pub store: Arc<InMemoryStore>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::with_credentials(StaticCredentials::default()).await
    }

    pub async fn with_credentials(credentials: StaticCredentials) -> Self {
        Self::build(credentials, Config::default()).await
    }

    pub async fn with_config(config: Config) -> Self {
        Self::build(StaticCredentials::default(), config).await
    }

    async fn build(credentials: StaticCredentials, config: Config) -> Self {
        let upstream = MockServer::start().await;
        let uri = upstream.uri();
        let http = HttpClient::new().unwrap();
        let store = Arc::new(InMemoryStore::default());

        let linkedin =
            Arc::new(LinkedInClient::new(http.clone()).with_base_url(format!("{uri}/v2")));
        let ports = AppPorts {
            generator: Arc::new(
                OpenAIClient::new(Some("sk-test".into()), http.clone())
                    .with_base_url(format!("{uri}/v1")),
            ),
            senders: PlatformSenders {
                linkedin: linkedin.clone(),
                twitter: Arc::new(TwitterClient::new(http.clone()).with_base_url(format!("{uri}/2"))),
                facebook: Arc::new(
                    FacebookClient::new(http.clone()).with_base_url(format!("{uri}/v18.0")),
                ),
            },
            messenger: linkedin,
            fetchers: CalendarFetchers {
                google: Arc::new(
                    GoogleCalendarFetcher::new(http.clone())
                        .with_base_url(format!("{uri}/calendar/v3")),
                ),
                outlook: Arc::new(
                    OutlookCalendarFetcher::new(http.clone()).with_base_url(format!("{uri}/v1.0")),
                ),
                linkedin: Arc::new(
                    LinkedInEventsFetcher::new(http).with_base_url(format!("{uri}/v2")),
                ),
            },
            scheduled_posts: store.clone(),
            metrics: store.clone(),
            posts: store.clone(),
            messages: store.clone(),
            credentials: Arc::new(credentials),
            clock: Arc::new(FixedClock(now())),
        };

        let ctx = Arc::new(AppContext::from_ports(config, ports));
        Self { router: create_router(ctx), upstream, store }
    }

    /// Send one request as `user` (no `X-User-Id` when `None`).
    pub async fn call(
        &self,
        method: Method,
        uri: &str,
        user: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        self.call_with_headers(method, uri, user, &[], body).await
    }

    pub async fn call_with_headers(
        &self,
        method: Method,
        uri: &str,
        user: Option<&str>,
        headers: &[(&str, &str)],
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user) = user {
            builder = builder.header("X-User-Id", user);
        }
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
        (status, json)
    }

    pub async fn upstream_request_count(&self) -> usize {
        self.upstream.received_requests().await.map_or(0, |r| r.len())
    }
}
