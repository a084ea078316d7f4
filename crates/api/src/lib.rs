//! # LinkedGPT API
//!
//! HTTP layer over the LinkedGPT services.
//!
//! This crate contains:
//! - Application context (dependency injection)
//! - axum routes and handlers
//! - Session extraction and error-to-response mapping
//! - Logging setup and the `linkedgpt` binary
//!
//! ## Architecture
//! - Depends on `domain`, `core` and `infra`
//! - Wires adapters into services; holds no business logic

pub mod context;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routes;
pub mod utils;

pub use context::{AppContext, AppPorts};
pub use error::{ApiError, ApiResult};
pub use extractors::AuthSession;
pub use routes::create_router;
