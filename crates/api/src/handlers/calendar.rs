//! Calendar endpoints

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use linkedgpt_domain::{CalendarEvent, CalendarSource, CalendarTokens};
use serde_json::Value;

use super::observe;
use crate::error::ApiResult;
use crate::extractors::{header_value, AuthSession, PROVIDER_TOKEN_HEADER};
use crate::AppContext;

/// `GET /api/calendar/{source}`: the provider's event array, unmodified.
///
/// The provider access token comes from `X-Provider-Token`.
pub async fn fetch(
    State(ctx): State<Arc<AppContext>>,
    AuthSession(_session): AuthSession,
    Path(source): Path<String>,
    headers: HeaderMap,
) -> ApiResult<Json<Vec<Value>>> {
    observe("calendar::fetch", async move {
        let source: CalendarSource = source.parse()?;
        let token = header_value(&headers, PROVIDER_TOKEN_HEADER).unwrap_or_default();
        Ok(Json(ctx.calendar.fetch_raw(source, &token).await?))
    })
    .await
}

/// `POST /api/calendar/sync`: normalised events from every connected provider.
pub async fn sync(
    State(ctx): State<Arc<AppContext>>,
    AuthSession(_session): AuthSession,
    Json(tokens): Json<CalendarTokens>,
) -> ApiResult<Json<Vec<CalendarEvent>>> {
    observe("calendar::sync", async move { Ok(Json(ctx.calendar.sync(&tokens).await?)) }).await
}
