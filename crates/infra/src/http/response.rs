//! Status and body handling shared by every vendor client

use linkedgpt_domain::LinkedGptError;
use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::errors::InfraError;

/// Longest upstream body kept in an error message.
const MAX_ERROR_BODY: usize = 512;

/// Pass 2xx responses through; turn anything else into `Upstream` carrying
/// the exact status and a truncated body.
pub async fn check_status(response: Response, what: &str) -> Result<Response, LinkedGptError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    warn!(status = status.as_u16(), operation = what, "upstream returned error status");
    Err(LinkedGptError::upstream(status.as_u16(), format!("{what} failed: {}", truncate(&body))))
}

/// Decode a JSON body, mapping shape mismatches to `InvalidResponse`.
pub async fn read_json<T: DeserializeOwned>(
    response: Response,
    what: &str,
) -> Result<T, LinkedGptError> {
    let bytes = response.bytes().await.map_err(|err| LinkedGptError::from(InfraError::from(err)))?;
    serde_json::from_slice(&bytes).map_err(|err| {
        LinkedGptError::InvalidResponse(format!("{what}: unexpected response body: {err}"))
    })
}

fn truncate(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY {
        return body.to_string();
    }
    let mut truncated: String = body.chars().take(MAX_ERROR_BODY.saturating_sub(3)).collect();
    truncated.push_str("...");
    truncated
}
