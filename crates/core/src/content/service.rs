//! Content generation service

use std::sync::Arc;

use linkedgpt_domain::constants::MAX_VARIATIONS;
use linkedgpt_domain::{ContentRequest, LinkedGptError, Result};
use tracing::{debug, instrument};

use super::ports::ContentGenerator;
use super::prompts::{compose_prompt, system_prompt};

/// Turns a [`ContentRequest`] into generated text
pub struct ContentService {
    generator: Arc<dyn ContentGenerator>,
}

impl ContentService {
    pub fn new(generator: Arc<dyn ContentGenerator>) -> Self {
        Self { generator }
    }

    /// Generate a single text for `request`.
    #[instrument(skip(self, request), fields(platform = ?request.platform))]
    pub async fn generate(&self, request: &ContentRequest) -> Result<String> {
        self.generate_variations(request, 1).await?.into_iter().next().ok_or_else(|| {
            LinkedGptError::InvalidResponse("completion returned no choices".to_string())
        })
    }

    /// Generate `n` alternative texts in one upstream call.
    #[instrument(skip(self, request), fields(platform = ?request.platform))]
    pub async fn generate_variations(&self, request: &ContentRequest, n: u8) -> Result<Vec<String>> {
        if request.prompt.trim().is_empty() {
            return Err(LinkedGptError::InvalidInput("prompt must not be empty".to_string()));
        }
        if n == 0 || n > MAX_VARIATIONS {
            return Err(LinkedGptError::InvalidInput(format!(
                "variation count must be between 1 and {MAX_VARIATIONS}, got {n}"
            )));
        }

        let prompt = compose_prompt(request);
        let choices =
            self.generator.complete(system_prompt(request.platform), &prompt, n).await?;
        debug!(choices = choices.len(), "content generated");
        Ok(choices)
    }

    /// Generate an illustration and return its URL.
    #[instrument(skip_all)]
    pub async fn generate_image(&self, prompt: &str) -> Result<String> {
        if prompt.trim().is_empty() {
            return Err(LinkedGptError::InvalidInput("prompt must not be empty".to_string()));
        }
        self.generator.generate_image(prompt).await
    }
}
