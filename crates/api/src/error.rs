//! HTTP mapping of [`LinkedGptError`]

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use linkedgpt_domain::LinkedGptError;
use serde_json::json;
use tracing::{error, warn};

/// Handler error: a domain error rendered as JSON.
///
/// Body: `{"error": message, "kind": label, "status": upstream_status?}`.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub LinkedGptError);

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            LinkedGptError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            LinkedGptError::UnsupportedPlatform(_) | LinkedGptError::InvalidInput(_) => {
                StatusCode::BAD_REQUEST
            }
            LinkedGptError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            LinkedGptError::Network(_) => StatusCode::SERVICE_UNAVAILABLE,
            LinkedGptError::Configuration(_)
            | LinkedGptError::InvalidResponse(_)
            | LinkedGptError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(kind = self.0.label(), error = %self.0, "request failed");
        } else {
            warn!(kind = self.0.label(), error = %self.0, "request rejected");
        }

        let mut body = json!({
            "error": self.0.to_string(),
            "kind": self.0.label(),
        });
        if let Some(upstream) = self.0.status() {
            body["status"] = json!(upstream);
        }

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
