//! Cron-triggered background work
//!
//! Schedulers own their lifecycle explicitly: `start`/`stop` are awaited
//! with timeouts, the monitor task's join handle is kept, and dropping a
//! running scheduler cancels it.

pub mod error;
pub mod scheduled_post_scheduler;

pub use error::{SchedulerError, SchedulerResult};
pub use scheduled_post_scheduler::{ScheduledPostScheduler, ScheduledPostSchedulerConfig};
