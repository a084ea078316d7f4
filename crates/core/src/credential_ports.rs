//! Platform credential lookup port

use linkedgpt_domain::Platform;

/// Resolves publish tokens for a platform at call time.
///
/// Implementations must not cache: a token added to the environment after
/// startup is picked up by the next worker run.
pub trait CredentialProvider: Send + Sync {
    /// Token for `platform`, or `None` when not configured
    fn platform_token(&self, platform: Platform) -> Option<String>;
}
