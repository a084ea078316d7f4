//! Recording mocks for vendor-facing ports

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use linkedgpt_core::{
    CalendarFetcher, CredentialProvider, DirectMessenger, PlatformSender, PlatformSenders,
};
use linkedgpt_domain::{
    CalendarSource, LinkedGptError, Platform, PublishResult, Result as DomainResult,
};
use serde_json::Value;
use tokio::sync::Mutex as TokioMutex;

type CallLog = Arc<TokioMutex<Vec<(Platform, String, String)>>>;

/// Sender that records `(platform, text, token)` and answers from a fixed result
#[derive(Clone)]
pub struct MockSender {
    platform: Platform,
    pub calls: CallLog,
    outcome: Result<String, LinkedGptError>,
}

impl MockSender {
    pub fn ok(platform: Platform, calls: CallLog) -> Self {
        Self { platform, calls, outcome: Ok(format!("{}-post-1", platform.as_str().to_lowercase())) }
    }

    pub fn failing(platform: Platform, calls: CallLog, err: LinkedGptError) -> Self {
        Self { platform, calls, outcome: Err(err) }
    }
}

#[async_trait]
impl PlatformSender for MockSender {
    fn platform(&self) -> Platform {
        self.platform
    }

    async fn send(&self, text: &str, token: &str) -> DomainResult<PublishResult> {
        self.calls.lock().await.push((self.platform, text.to_string(), token.to_string()));
        self.outcome.clone().map(|id| PublishResult { platform_post_id: id })
    }
}

/// Three recording senders sharing one call log
pub fn recording_senders() -> (PlatformSenders, CallLog) {
    let calls: CallLog = Arc::default();
    let senders = PlatformSenders {
        linkedin: Arc::new(MockSender::ok(Platform::LinkedIn, calls.clone())),
        twitter: Arc::new(MockSender::ok(Platform::Twitter, calls.clone())),
        facebook: Arc::new(MockSender::ok(Platform::Facebook, calls.clone())),
    };
    (senders, calls)
}

/// Static platform tokens
#[derive(Default, Clone)]
pub struct StaticCredentials(pub HashMap<Platform, String>);

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

#[derive(Default, Clone)]
pub struct MockMessenger {
    pub calls: Arc<TokioMutex<Vec<(String, String, String)>>>,
}

#[async_trait]
impl DirectMessenger for MockMessenger {
    async fn send_message(&self, text: &str, recipient_urn: &str, token: &str) -> DomainResult<()> {
        self.calls.lock().await.push((text.into(), recipient_urn.into(), token.into()));
        Ok(())
    }
}

/// Fetcher returning a canned array or error
#[derive(Clone)]
pub struct MockFetcher {
    pub source: CalendarSource,
    pub response: Result<Vec<Value>, LinkedGptError>,
    pub calls: Arc<TokioMutex<Vec<String>>>,
}

impl MockFetcher {
    pub fn new(source: CalendarSource, response: Result<Vec<Value>, LinkedGptError>) -> Self {
        Self { source, response, calls: Arc::default() }
    }
}

#[async_trait]
impl CalendarFetcher for MockFetcher {
    fn source(&self) -> CalendarSource {
        self.source
    }

    async fn fetch_events(&self, token: &str) -> DomainResult<Vec<Value>> {
        self.calls.lock().await.push(token.to_string());
        self.response.clone()
    }
}
