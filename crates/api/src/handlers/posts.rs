//! Publishing, scheduling and history endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use linkedgpt_domain::{Platform, PostRecord, PublishResult, Result, ScheduledPost};
use serde::Deserialize;

use super::{observe, parse_platform};
use crate::error::ApiResult;
use crate::extractors::AuthSession;
use crate::AppContext;

#[derive(Debug, Deserialize)]
pub struct PublishBody {
    pub content: String,
    pub platform: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    /// Overrides the configured platform credential.
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScheduleBody {
    pub content: String,
    pub platforms: Vec<String>,
    pub scheduled_at: DateTime<Utc>,
}

/// `POST /api/posts/publish`
pub async fn publish(
    State(ctx): State<Arc<AppContext>>,
    AuthSession(session): AuthSession,
    Json(body): Json<PublishBody>,
) -> ApiResult<Json<PublishResult>> {
    observe("posts::publish", async move {
        let platform = parse_platform(&body.platform)?;
        let result = ctx
            .publishing
            .publish_now(&session, &body.content, platform, &body.hashtags, body.token)
            .await?;
        Ok(Json(result))
    })
    .await
}

/// `POST /api/posts/schedule`
pub async fn schedule(
    State(ctx): State<Arc<AppContext>>,
    AuthSession(session): AuthSession,
    Json(body): Json<ScheduleBody>,
) -> ApiResult<(StatusCode, Json<ScheduledPost>)> {
    observe("posts::schedule", async move {
        let platforms =
            body.platforms.iter().map(|tag| parse_platform(tag)).collect::<Result<Vec<Platform>>>()?;
        let post = ctx
            .scheduling
            .schedule_post(&session, &body.content, &platforms, body.scheduled_at)
            .await?;
        Ok((StatusCode::CREATED, Json(post)))
    })
    .await
}

/// `GET /api/posts`
pub async fn list(
    State(ctx): State<Arc<AppContext>>,
    AuthSession(session): AuthSession,
) -> ApiResult<Json<Vec<PostRecord>>> {
    observe("posts::list", async move { Ok(Json(ctx.publishing.history(&session).await?)) })
        .await
}
