//! Request extractors

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use linkedgpt_domain::{LinkedGptError, Session};

use crate::error::ApiError;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const PROVIDER_TOKEN_HEADER: &str = "x-provider-token";

/// The caller's [`Session`], taken from `X-User-Id`. Requests without a user
/// id are rejected with 401.
#[derive(Debug, Clone)]
pub struct AuthSession(pub Session);

impl<S> FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = header_value(&parts.headers, USER_ID_HEADER).ok_or_else(|| {
            ApiError(LinkedGptError::Unauthorized("missing X-User-Id header".to_string()))
        })?;

        Ok(Self(Session::new(user_id)))
    }
}

/// Trimmed, non-empty header value.
pub fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
