//! # LinkedGPT Domain
//!
//! Business domain types for LinkedGPT's API wrapper layer.
//!
//! This crate contains:
//! - Platform, post, message and calendar types
//! - The shared error type and Result alias
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other LinkedGPT crates
//! - No I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

pub use config::*;
pub use errors::*;
pub use types::*;
