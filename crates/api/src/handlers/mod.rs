//! Route handlers
//!
//! Each handler times its service call and logs the outcome through
//! [`log_command_execution`] before mapping errors to [`ApiError`].

pub mod calendar;
pub mod content;
pub mod health;
pub mod messages;
pub mod posts;
pub mod worker;

use std::future::Future;
use std::time::Instant;

use linkedgpt_domain::{Platform, Result};
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::utils::logging::{error_label, log_command_execution};

pub(crate) async fn observe<T, F>(command: &'static str, call: F) -> ApiResult<T>
where
    F: Future<Output = Result<T>>,
{
    let started = Instant::now();
    let result = call.await;

    if let Err(err) = &result {
        debug!(command, kind = error_label(err), "command returned error");
    }
    log_command_execution(command, started.elapsed(), result.is_ok());
    result.map_err(ApiError)
}

/// Parse a UI platform tag; unknown tags fail before any network call.
pub(crate) fn parse_platform(tag: &str) -> Result<Platform> {
    tag.parse()
}
