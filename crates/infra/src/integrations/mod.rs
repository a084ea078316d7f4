//! External service integrations

pub mod calendar;
pub mod openai;
pub mod social;
