//! Calendar event fetchers
//!
//! Three providers share one shape: a single authenticated GET to a fixed
//! endpoint, returning one array field of the JSON body unmodified.

pub mod google;
pub mod linkedin;
pub mod outlook;

pub use google::GoogleCalendarFetcher;
pub use linkedin::LinkedInEventsFetcher;
pub use outlook::OutlookCalendarFetcher;

use linkedgpt_domain::{LinkedGptError, Result};
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use crate::http::{check_status, read_json, HttpClient};

/// GET `url` with bearer `token` and return `body[field]` as an array.
///
/// A body without the field is an empty calendar, not an error.
pub(crate) async fn fetch_event_array(
    http_client: &HttpClient,
    url: &str,
    token: &str,
    extra_header: Option<(HeaderName, HeaderValue)>,
    field: &str,
    what: &str,
) -> Result<Vec<Value>> {
    let mut request = http_client.request(Method::GET, url).bearer_auth(token);
    if let Some((name, value)) = extra_header {
        request = request.header(name, value);
    }

    let response = check_status(http_client.send(request).await?, what).await?;
    let body: Value = read_json(response, what).await?;

    match body.get(field) {
        Some(Value::Array(items)) => {
            debug!(count = items.len(), provider = what, "calendar events received");
            Ok(items.clone())
        }
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(_) => Err(LinkedGptError::InvalidResponse(format!("{what}: `{field}` is not an array"))),
    }
}
