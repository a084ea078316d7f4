//! Domain types and models

pub mod calendar;
pub mod content;
pub mod message;
pub mod platform;
pub mod post;
pub mod session;

pub use calendar::{CalendarEvent, CalendarSource, CalendarTokens};
pub use content::ContentRequest;
pub use message::{MessageKind, MessageRecord, MessageStatus, OutgoingMessage};
pub use platform::Platform;
pub use post::{
    PostMetrics, PostRecord, PostStatus, PublishResult, ScheduledPost, ScheduledPostStatus,
};
pub use session::Session;
