//! Platform tokens from the process environment

use linkedgpt_core::CredentialProvider;
use linkedgpt_domain::Platform;

/// Reads `<PLATFORM>_API_KEY` on every call so rotated tokens take effect
/// without a restart. Blank values count as missing.
#[derive(Debug, Clone, Default)]
pub struct EnvCredentialProvider;

impl CredentialProvider for EnvCredentialProvider {
    fn platform_token(&self, platform: Platform) -> Option<String> {
        std::env::var(platform.token_env_var())
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}
