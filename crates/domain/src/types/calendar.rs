//! Calendar events merged from external providers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::impl_status_conversions;

/// Where a calendar event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarSource {
    Google,
    Outlook,
    LinkedIn,
    Local,
}

impl_status_conversions!(CalendarSource {
    Google => "google",
    Outlook => "outlook",
    LinkedIn => "linkedin",
    Local => "local",
});

/// Provider-independent event shape. Transient, never persisted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub attendees: Vec<String>,
    pub source: CalendarSource,
}

/// Provider access tokens supplied for a calendar sync. Providers without a
/// token are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarTokens {
    #[serde(default)]
    pub google: Option<String>,
    #[serde(default)]
    pub outlook: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
}
