/// OpenAI integration for post and message generation
///
/// # Architecture
///
/// - **Client**: `OpenAIClient` - wrapper for the Chat Completions and Images APIs
/// - **Types**: request/response wire types
///
/// # Usage
///
/// ```no_run
/// use linkedgpt_infra::http::HttpClient;
/// use linkedgpt_infra::integrations::openai::OpenAIClient;
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let http_client = HttpClient::new()?;
/// let client = OpenAIClient::new(std::env::var("OPENAI_API_KEY").ok(), http_client);
///
/// let texts = client.chat("You are a helpful assistant.", "Write a haiku", 1).await?;
/// println!("{}", texts[0]);
/// # Ok(())
/// # }
/// ```
///
/// # Error Handling
///
/// - **Missing key**: `Configuration`, raised before any request is built
/// - **Non-2xx**: `Upstream` with the exact status, never retried
/// - **Transport failure**: `Network`
pub mod client;
pub(crate) mod types;

pub use client::OpenAIClient;
