//! Port interfaces for direct messaging

use async_trait::async_trait;
use linkedgpt_domain::{MessageRecord, Result};

/// Sends one direct message through a vendor API
#[async_trait]
pub trait DirectMessenger: Send + Sync {
    async fn send_message(&self, text: &str, recipient_urn: &str, token: &str) -> Result<()>;
}

/// Persistence for the `messages` table
#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn insert_message(&self, message: &MessageRecord) -> Result<()>;
}
