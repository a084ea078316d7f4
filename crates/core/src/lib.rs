//! # LinkedGPT Core
//!
//! Business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for vendor clients and storage
//! - Prompt composition and content generation
//! - The publishing router and the scheduled-post worker
//! - Messaging and calendar services
//!
//! ## Architecture Principles
//! - Only depends on `linkedgpt-domain`
//! - No HTTP, database, or environment access
//! - All external dependencies via traits

pub mod calendar;
pub mod content;
pub mod messaging;
pub mod publishing;
pub mod scheduling;

// Infrastructure ports
pub mod clock_ports;
pub mod credential_ports;

pub use calendar::{CalendarFetcher, CalendarFetchers, CalendarService};
pub use clock_ports::{Clock, FixedClock};
pub use content::{ContentGenerator, ContentService};
pub use credential_ports::CredentialProvider;
pub use messaging::{DirectMessenger, MessageRepository, MessagingService};
pub use publishing::{
    MetricsRecorder, PlatformSender, PlatformSenders, PostRepository, PublishingRouter,
    PublishingService,
};
pub use scheduling::{
    OutcomeStatus, PlatformOutcome, ScheduledPostRepository, ScheduledPostWorker,
    SchedulingService, WorkerReport,
};
