//! # LinkedGPT Infrastructure
//!
//! Adapters implementing the ports defined in `linkedgpt-core`:
//! - vendor HTTP clients (OpenAI, LinkedIn, Twitter, Facebook)
//! - calendar fetchers (Google, Outlook, LinkedIn events)
//! - Supabase PostgREST repositories
//! - configuration loading, environment credentials and the wall clock
//! - the cron trigger for the scheduled-post worker
//!
//! Everything that performs I/O lives here; `linkedgpt-core` stays pure.

pub mod clock;
pub mod config;
pub mod credentials;
pub mod errors;
pub mod http;
pub mod integrations;
pub mod scheduling;
pub mod storage;

pub use clock::SystemClock;
pub use credentials::EnvCredentialProvider;
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use integrations::calendar::{
    GoogleCalendarFetcher, LinkedInEventsFetcher, OutlookCalendarFetcher,
};
pub use integrations::openai::OpenAIClient;
pub use integrations::social::{FacebookClient, LinkedInClient, TwitterClient};
pub use scheduling::{ScheduledPostScheduler, ScheduledPostSchedulerConfig, SchedulerError};
pub use storage::{
    SupabaseClient, SupabaseMessageRepository, SupabaseMetricsRecorder, SupabasePostRepository,
    SupabaseScheduledPostRepository,
};
