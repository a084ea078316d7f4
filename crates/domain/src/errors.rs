//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for LinkedGPT
///
/// Every API wrapper surfaces exactly one of these to its immediate caller.
/// Only [`LinkedGptError::Upstream`] carries a numeric status.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail")]
pub enum LinkedGptError {
    /// A required credential or setting is missing.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The vendor answered with a non-success status.
    #[error("Upstream error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    /// DNS, connect, timeout or reset before a response arrived.
    #[error("Network error: {0}")]
    Network(String),

    /// Platform tag outside {LinkedIn, Twitter, Facebook}.
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A 2xx response whose body did not have the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl LinkedGptError {
    /// Build an upstream error from a status code and response text.
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::Upstream { status, message: message.into() }
    }

    /// Numeric status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Stable label for logs and response bodies.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration",
            Self::Upstream { .. } => "upstream",
            Self::Network(_) => "network",
            Self::UnsupportedPlatform(_) => "unsupported_platform",
            Self::InvalidInput(_) => "invalid_input",
            Self::Unauthorized(_) => "unauthorized",
            Self::InvalidResponse(_) => "invalid_response",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for LinkedGPT operations
pub type Result<T> = std::result::Result<T, LinkedGptError>;
