//! Messaging service

use std::sync::Arc;

use linkedgpt_domain::{
    LinkedGptError, MessageRecord, OutgoingMessage, Platform, Result, Session,
};
use tracing::{info, instrument, warn};

use super::ports::{DirectMessenger, MessageRepository};
use crate::clock_ports::Clock;
use crate::credential_ports::CredentialProvider;

pub struct MessagingService {
    messenger: Arc<dyn DirectMessenger>,
    messages: Arc<dyn MessageRepository>,
    credentials: Arc<dyn CredentialProvider>,
    clock: Arc<dyn Clock>,
}

impl MessagingService {
    pub fn new(
        messenger: Arc<dyn DirectMessenger>,
        messages: Arc<dyn MessageRepository>,
        credentials: Arc<dyn CredentialProvider>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { messenger, messages, credentials, clock }
    }

    /// Send a LinkedIn direct message and record it.
    ///
    /// The record is written best-effort after the vendor accepted the message.
    #[instrument(skip(self, session, message, token), fields(user_id = %session.user_id))]
    pub async fn send(
        &self,
        session: &Session,
        message: &OutgoingMessage,
        token: Option<String>,
    ) -> Result<MessageRecord> {
        if message.recipient_urn.trim().is_empty() {
            return Err(LinkedGptError::InvalidInput("recipient URN is required".to_string()));
        }
        if message.content.trim().is_empty() {
            return Err(LinkedGptError::InvalidInput("message must not be empty".to_string()));
        }

        let token = token
            .filter(|t| !t.trim().is_empty())
            .or_else(|| self.credentials.platform_token(Platform::LinkedIn))
            .ok_or_else(|| {
                LinkedGptError::Configuration("LinkedIn API key not configured".to_string())
            })?;

        self.messenger.send_message(&message.content, &message.recipient_urn, &token).await?;
        info!(recipient = %message.recipient_urn, "message sent");

        let record = MessageRecord::sent(&session.user_id, message, self.clock.now());
        if let Err(err) = self.messages.insert_message(&record).await {
            warn!(error = %err, "failed to record sent message");
        }
        Ok(record)
    }
}
