//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Persisted tables (schema owned by the storage collaborator)
pub const TABLE_SCHEDULED_POSTS: &str = "scheduled_posts";
pub const TABLE_POST_METRICS: &str = "post_metrics";
pub const TABLE_POSTS: &str = "posts";
pub const TABLE_MESSAGES: &str = "messages";

// Configuration defaults
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8787";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

// Scheduled-post worker
pub const DEFAULT_WORKER_CRON: &str = "0 * * * * *"; // every minute
pub const DEFAULT_WORKER_JOB_TIMEOUT_SECS: u64 = 300;

// Generation limits
pub const MAX_VARIATIONS: u8 = 5;

// LinkedIn messaging
pub const LINKEDIN_MESSAGE_SUBJECT: &str = "Automated message";

/// Suffix appended to the upper-cased platform tag to find its publish token
/// (e.g. `LINKEDIN_API_KEY`).
pub const PLATFORM_TOKEN_ENV_SUFFIX: &str = "_API_KEY";
