//! Content generation endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use linkedgpt_domain::{ContentRequest, LinkedGptError, Platform};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{observe, parse_platform};
use crate::error::ApiResult;
use crate::extractors::AuthSession;
use crate::AppContext;

#[derive(Debug, Deserialize)]
pub struct GenerateBody {
    pub prompt: String,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
    /// Number of variations; one when omitted.
    #[serde(default)]
    pub n: Option<u8>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    /// First variation, shown in the editor.
    pub content: String,
    pub variations: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ImageBody {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct ImageResponse {
    pub url: String,
}

/// `POST /api/content/generate`
pub async fn generate(
    State(ctx): State<Arc<AppContext>>,
    AuthSession(_session): AuthSession,
    Json(body): Json<GenerateBody>,
) -> ApiResult<Json<GenerateResponse>> {
    observe("content::generate", async move {
        let platform = body.platform.as_deref().and_then(prompt_platform);

        let mut request = ContentRequest::new(body.prompt, platform).with_hashtags(body.hashtags);
        if let Some(tone) = body.tone.filter(|t| !t.trim().is_empty()) {
            request = request.with_tone(tone);
        }

        let variations = ctx.content.generate_variations(&request, body.n.unwrap_or(1)).await?;
        let content = variations.first().cloned().ok_or_else(|| {
            LinkedGptError::InvalidResponse("completion returned no choices".to_string())
        })?;

        Ok(Json(GenerateResponse { content, variations }))
    })
    .await
}

/// Platform used to pick the system prompt. Unknown or blank tags fall back
/// to the generic assistant prompt instead of failing.
fn prompt_platform(tag: &str) -> Option<Platform> {
    match parse_platform(tag) {
        Ok(platform) => Some(platform),
        Err(err) => {
            debug!(platform = %tag, error = %err, "using generic prompt");
            None
        }
    }
}

/// `POST /api/content/image`
pub async fn generate_image(
    State(ctx): State<Arc<AppContext>>,
    AuthSession(_session): AuthSession,
    Json(body): Json<ImageBody>,
) -> ApiResult<Json<ImageResponse>> {
    observe("content::image", async move {
        let url = ctx.content.generate_image(&body.prompt).await?;
        Ok(Json(ImageResponse { url }))
    })
    .await
}
