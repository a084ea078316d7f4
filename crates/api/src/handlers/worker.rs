//! Scheduled-post worker trigger

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use linkedgpt_domain::LinkedGptError;
use serde_json::json;
use tracing::{error, warn};

use crate::error::ApiError;
use crate::extractors::header_value;
use crate::utils::logging::log_command_execution;
use crate::AppContext;

pub const WORKER_SECRET_HEADER: &str = "x-worker-secret";

/// `POST /functions/publish-scheduled-posts`
///
/// `{"processed": n}` on success. A failed due-posts query answers 500 with
/// the error message whatever its kind, so the external cron only has to
/// check for success. With `worker.trigger_secret` configured, callers must
/// present it in `X-Worker-Secret`.
pub async fn publish_scheduled_posts(
    State(ctx): State<Arc<AppContext>>,
    headers: HeaderMap,
) -> Response {
    if let Some(expected) = ctx.config.worker.trigger_secret.as_deref() {
        if header_value(&headers, WORKER_SECRET_HEADER).as_deref() != Some(expected) {
            warn!("worker trigger rejected: bad or missing secret");
            return ApiError(LinkedGptError::Unauthorized(
                "missing or invalid X-Worker-Secret header".to_string(),
            ))
            .into_response();
        }
    }

    let started = Instant::now();
    let result = ctx.worker.run_once().await;
    log_command_execution("worker::publish_scheduled_posts", started.elapsed(), result.is_ok());

    match result {
        Ok(report) => Json(json!({ "processed": report.processed })).into_response(),
        Err(err) => {
            error!(error = %err, kind = err.label(), "scheduled post run failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": err.to_string(), "kind": err.label() })),
            )
                .into_response()
        }
    }
}
