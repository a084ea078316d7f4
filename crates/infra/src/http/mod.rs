//! Shared HTTP client and response helpers

pub mod client;
pub mod response;

pub use client::{HttpClient, HttpClientBuilder};
pub use response::{check_status, read_json};
