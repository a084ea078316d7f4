//! Social platform publishers
//!
//! One client per platform, each implementing [`PlatformSender`]. LinkedIn
//! additionally implements [`DirectMessenger`] for outreach messages.
//!
//! [`PlatformSender`]: linkedgpt_core::PlatformSender
//! [`DirectMessenger`]: linkedgpt_core::DirectMessenger

pub mod facebook;
pub mod linkedin;
pub mod twitter;

pub use facebook::FacebookClient;
pub use linkedin::LinkedInClient;
pub use twitter::TwitterClient;

use linkedgpt_domain::{Platform, PublishResult};
use tracing::warn;
use uuid::Uuid;

/// LinkedIn's Rest.li protocol header, sent on every LinkedIn call.
pub(crate) const RESTLI_PROTOCOL_HEADER: (&str, &str) = ("X-Restli-Protocol-Version", "2.0.0");

/// Body of an accepted publish call. A body that cannot be read only costs
/// the platform id, so the error is logged and an empty body returned.
pub(crate) async fn accepted_body(platform: Platform, response: reqwest::Response) -> Vec<u8> {
    match response.bytes().await {
        Ok(bytes) => bytes.to_vec(),
        Err(err) => {
            warn!(%platform, error = %err, "failed to read publish response body");
            Vec::new()
        }
    }
}

/// Wrap the platform's post id, or mint a local one when the platform
/// accepted the post without returning an id.
pub(crate) fn publish_result(platform: Platform, id: Option<String>) -> PublishResult {
    let platform_post_id = match id.filter(|id| !id.is_empty()) {
        Some(id) => id,
        None => {
            let generated = Uuid::new_v4().to_string();
            warn!(%platform, %generated, "platform returned no post id, using generated id");
            generated
        }
    };
    PublishResult { platform_post_id }
}
