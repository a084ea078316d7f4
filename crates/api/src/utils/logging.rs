use std::time::Duration;

use linkedgpt_domain::LinkedGptError;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "linkedgpt=info,linkedgpt_api=info,linkedgpt_core=info,linkedgpt_infra=info";

/// Install the global subscriber.
///
/// `RUST_LOG` overrides the default filter; `LINKEDGPT_LOG_JSON=true`
/// switches to JSON lines.
pub fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let json = std::env::var("LINKEDGPT_LOG_JSON")
        .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json().with_current_span(true)).try_init()?;
    } else {
        registry.with(tracing_subscriber::fmt::layer().with_target(true)).try_init()?;
    }
    Ok(())
}

/// Log the outcome of one handled request with structured fields.
///
/// `command` must be a stable identifier such as `"posts::publish"`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Stable label for metrics and logs.
#[inline]
pub fn error_label(error: &LinkedGptError) -> &'static str {
    error.label()
}
