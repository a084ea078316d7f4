//! Content generation: prompt composition and the generation service

pub mod ports;
pub mod prompts;
pub mod service;

pub use ports::ContentGenerator;
pub use service::ContentService;
