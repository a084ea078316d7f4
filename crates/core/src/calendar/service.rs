//! Calendar service

use std::sync::Arc;

use linkedgpt_domain::{CalendarEvent, CalendarSource, CalendarTokens, LinkedGptError, Result};
use serde_json::Value;
use tracing::{info, instrument, warn};

use super::normalize::normalize_event;
use super::ports::CalendarFetcher;

#[derive(Clone)]
pub struct CalendarFetchers {
    pub google: Arc<dyn CalendarFetcher>,
    pub outlook: Arc<dyn CalendarFetcher>,
    pub linkedin: Arc<dyn CalendarFetcher>,
}

pub struct CalendarService {
    fetchers: CalendarFetchers,
}

impl CalendarService {
    pub fn new(fetchers: CalendarFetchers) -> Self {
        Self { fetchers }
    }

    fn fetcher(&self, source: CalendarSource) -> Result<&dyn CalendarFetcher> {
        match source {
            CalendarSource::Google => Ok(self.fetchers.google.as_ref()),
            CalendarSource::Outlook => Ok(self.fetchers.outlook.as_ref()),
            CalendarSource::LinkedIn => Ok(self.fetchers.linkedin.as_ref()),
            CalendarSource::Local => Err(LinkedGptError::InvalidInput(
                "local events are not fetched from a provider".to_string(),
            )),
        }
    }

    /// Provider event array, unmodified.
    #[instrument(skip(self, token), fields(source = %source))]
    pub async fn fetch_raw(&self, source: CalendarSource, token: &str) -> Result<Vec<Value>> {
        let fetcher = self.fetcher(source)?;
        if token.trim().is_empty() {
            return Err(LinkedGptError::Configuration(format!("{source} access token missing")));
        }
        fetcher.fetch_events(token).await
    }

    /// Fetch every connected provider in order (Google, Outlook, LinkedIn)
    /// and merge the normalised events.
    ///
    /// Providers without a token are skipped. The first failing provider
    /// aborts the sync and its error is returned.
    #[instrument(skip_all)]
    pub async fn sync(&self, tokens: &CalendarTokens) -> Result<Vec<CalendarEvent>> {
        let connected = [
            (CalendarSource::Google, tokens.google.as_deref()),
            (CalendarSource::Outlook, tokens.outlook.as_deref()),
            (CalendarSource::LinkedIn, tokens.linkedin.as_deref()),
        ];

        let mut events = Vec::new();
        for (source, token) in connected {
            let Some(token) = token.filter(|t| !t.trim().is_empty()) else {
                continue;
            };

            let raw = self.fetch_raw(source, token).await?;
            let before = events.len();
            for item in &raw {
                match normalize_event(source, item) {
                    Some(event) => events.push(event),
                    None => warn!(%source, "skipping malformed calendar entry"),
                }
            }
            info!(%source, count = events.len() - before, "calendar events fetched");
        }

        Ok(events)
    }
}
