use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use linkedgpt_domain::{MessageRecord, OutgoingMessage};
use serde::Deserialize;

use super::observe;
use crate::error::ApiResult;
use crate::extractors::AuthSession;
use crate::AppContext;

#[derive(Debug, Deserialize)]
pub struct MessageBody {
    #[serde(flatten)]
    pub message: OutgoingMessage,
    #[serde(default)]
    pub token: Option<String>,
}

/// `POST /api/messages`: send a LinkedIn direct message.
pub async fn send(
    State(ctx): State<Arc<AppContext>>,
    AuthSession(session): AuthSession,
    Json(body): Json<MessageBody>,
) -> ApiResult<Json<MessageRecord>> {
    observe("messages::send", async move {
        let record = ctx.messaging.send(&session, &body.message, body.token).await?;
        Ok(Json(record))
    })
    .await
}
