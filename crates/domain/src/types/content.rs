//! Content generation requests

use serde::{Deserialize, Serialize};

use super::Platform;

/// Input for one generation action. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRequest {
    pub prompt: String,
    /// Destination the text is written for; `None` uses the generic prompt.
    #[serde(default)]
    pub platform: Option<Platform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hashtags: Vec<String>,
}

impl ContentRequest {
    pub fn new(prompt: impl Into<String>, platform: Option<Platform>) -> Self {
        Self { prompt: prompt.into(), platform, tone: None, hashtags: Vec::new() }
    }

    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = Some(tone.into());
        self
    }

    pub fn with_hashtags<I, S>(mut self, hashtags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hashtags = hashtags.into_iter().map(Into::into).collect();
        self
    }
}
