//! Port interfaces for calendar providers

use async_trait::async_trait;
use linkedgpt_domain::{CalendarSource, Result};
use serde_json::Value;

/// One provider's "list events" endpoint
#[async_trait]
pub trait CalendarFetcher: Send + Sync {
    fn source(&self) -> CalendarSource;

    /// Fetch the provider's event array exactly as returned.
    async fn fetch_events(&self, token: &str) -> Result<Vec<Value>>;
}
