/// OpenAI API client for content generation
use async_trait::async_trait;
use linkedgpt_core::ContentGenerator;
use linkedgpt_domain::constants::{DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL};
use linkedgpt_domain::{LinkedGptError, Result};
use reqwest::Method;
use tracing::{debug, info};

use super::types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ImageGenerationRequest,
    ImageGenerationResponse,
};
use crate::http::{check_status, read_json, HttpClient};

const DEFAULT_IMAGE_SIZE: &str = "1024x1024";

/// OpenAI API client for generating posts, messages and images
pub struct OpenAIClient {
    http_client: HttpClient,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl OpenAIClient {
    /// Create a new OpenAI client
    ///
    /// A missing key is accepted here; every call then fails with
    /// `Configuration` before touching the network.
    pub fn new(api_key: Option<String>, http_client: HttpClient) -> Self {
        Self {
            http_client,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model: DEFAULT_OPENAI_MODEL.to_string(),
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point the client at another API root (proxies, tests)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| LinkedGptError::Configuration("OpenAI API key not configured".into()))
    }

    /// Run one chat completion and return every choice, trimmed.
    pub async fn chat(&self, system_prompt: &str, prompt: &str, n: u8) -> Result<Vec<String>> {
        let api_key = self.api_key()?;

        let payload = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(system_prompt), ChatMessage::user(prompt)],
            n,
        };

        let request = self
            .http_client
            .request(Method::POST, format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&payload);

        let response = self.http_client.send(request).await?;
        debug!(status = response.status().as_u16(), "Received OpenAI API response");
        let response = check_status(response, "content generation").await?;

        let completion: ChatCompletionResponse = read_json(response, "content generation").await?;
        let texts: Vec<String> = completion
            .choices
            .into_iter()
            .map(|choice| choice.message.content.unwrap_or_default().trim().to_string())
            .collect();

        if texts.is_empty() {
            return Err(LinkedGptError::InvalidResponse("Response contained no choices".into()));
        }

        info!(model = %self.model, choices = texts.len(), "OpenAI completion finished");
        Ok(texts)
    }

    /// Generate one image and return its hosted URL.
    pub async fn image(&self, prompt: &str) -> Result<String> {
        let api_key = self.api_key()?;

        let payload = ImageGenerationRequest {
            prompt: prompt.to_string(),
            n: 1,
            size: DEFAULT_IMAGE_SIZE.to_string(),
        };

        let request = self
            .http_client
            .request(Method::POST, format!("{}/images/generations", self.base_url))
            .bearer_auth(api_key)
            .json(&payload);

        let response = check_status(self.http_client.send(request).await?, "image generation").await?;
        let images: ImageGenerationResponse = read_json(response, "image generation").await?;

        images
            .data
            .into_iter()
            .find_map(|image| image.url)
            .ok_or_else(|| LinkedGptError::InvalidResponse("Response contained no image URL".into()))
    }
}

#[async_trait]
impl ContentGenerator for OpenAIClient {
    async fn complete(&self, system_prompt: &str, prompt: &str, n: u8) -> Result<Vec<String>> {
        self.chat(system_prompt, prompt, n).await
    }

    async fn generate_image(&self, prompt: &str) -> Result<String> {
        self.image(prompt).await
    }
}
