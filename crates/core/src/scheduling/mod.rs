//! Deferred publishing: scheduling posts and the worker that publishes them

pub mod ports;
pub mod service;
pub mod worker;

pub use ports::ScheduledPostRepository;
pub use service::SchedulingService;
pub use worker::{OutcomeStatus, PlatformOutcome, ScheduledPostWorker, WorkerReport};
