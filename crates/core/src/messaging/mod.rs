//! LinkedIn direct messages

pub mod ports;
pub mod service;

pub use ports::{DirectMessenger, MessageRepository};
pub use service::MessagingService;
