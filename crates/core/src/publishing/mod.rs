//! Publishing to social platforms

pub mod ports;
pub mod router;
pub mod service;

pub use ports::{MetricsRecorder, PlatformSender, PostRepository};
pub use router::{PlatformSenders, PublishingRouter};
pub use service::PublishingService;
