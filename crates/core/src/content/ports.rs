//! Port interfaces for content generation

use async_trait::async_trait;
use linkedgpt_domain::Result;

/// Chat-completion and image-generation backend
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Run one completion and return every choice, trimmed.
    ///
    /// Fails with `Configuration` before any I/O when no key is configured.
    async fn complete(&self, system_prompt: &str, prompt: &str, n: u8) -> Result<Vec<String>>;

    /// Generate one image and return its URL.
    async fn generate_image(&self, prompt: &str) -> Result<String>;
}
