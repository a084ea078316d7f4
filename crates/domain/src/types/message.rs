//! Outreach messages

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Platform;
use crate::impl_status_conversions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Draft,
    Sent,
}

impl_status_conversions!(MessageStatus {
    Draft => "draft",
    Sent => "sent",
});

/// Purpose of an outreach message, used to pick a template in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Connection,
    Prospecting,
    Followup,
}

impl_status_conversions!(MessageKind {
    Connection => "connection",
    Prospecting => "prospecting",
    Followup => "followup",
});

/// Row in the `messages` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub id: Uuid,
    pub user_id: String,
    /// LinkedIn URN of the recipient (`urn:li:person:...`).
    pub recipient_urn: String,
    #[serde(default)]
    pub recipient_name: Option<String>,
    pub content: String,
    pub platform: Platform,
    pub status: MessageStatus,
    #[serde(default)]
    pub kind: Option<MessageKind>,
    #[serde(default)]
    pub sent_at: Option<DateTime<Utc>>,
}

/// Parameters for one outgoing direct message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub content: String,
    pub recipient_urn: String,
    #[serde(default)]
    pub recipient_name: Option<String>,
    #[serde(default)]
    pub kind: Option<MessageKind>,
}

impl MessageRecord {
    pub fn sent(user_id: impl Into<String>, message: &OutgoingMessage, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            recipient_urn: message.recipient_urn.clone(),
            recipient_name: message.recipient_name.clone(),
            content: message.content.clone(),
            platform: Platform::LinkedIn,
            status: MessageStatus::Sent,
            kind: message.kind,
            sent_at: Some(now),
        }
    }
}
