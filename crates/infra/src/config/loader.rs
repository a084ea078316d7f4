//! Configuration loader
//!
//! ## Loading Strategy
//! 1. Probe for a config file (`linkedgpt.{toml,json}`, `config.{toml,json}`)
//!    in the working directory, its parents and next to the executable
//! 2. Start from that file, or from defaults when none exists
//! 3. Overlay environment variables
//!
//! ## Environment Variables
//! - `LINKEDGPT_BIND_ADDR`
//! - `OPENAI_API_KEY`, `OPENAI_MODEL`, `OPENAI_BASE_URL`
//! - `SUPABASE_URL`, `SUPABASE_SERVICE_ROLE_KEY` (or `SUPABASE_ANON_KEY`)
//! - `LINKEDGPT_WORKER_ENABLED`, `LINKEDGPT_WORKER_CRON`,
//!   `LINKEDGPT_WORKER_JOB_TIMEOUT_SECS`
//! - `LINKEDGPT_HTTP_TIMEOUT_SECS`
//!
//! Platform tokens (`LINKEDIN_API_KEY`, ...) are not part of [`Config`]; they
//! are read at call time by [`crate::credentials::EnvCredentialProvider`].

use std::path::{Path, PathBuf};

use linkedgpt_domain::{Config, LinkedGptError, Result};

const CONFIG_FILE_NAMES: [&str; 4] =
    ["linkedgpt.toml", "linkedgpt.json", "config.toml", "config.json"];

/// Load configuration: file (if any) overlaid with the environment.
///
/// # Errors
/// Returns `LinkedGptError::Configuration` if a probed file cannot be parsed
/// or an environment variable holds an invalid value.
pub fn load() -> Result<Config> {
    let base = match probe_config_paths() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("no config file found, using defaults");
            Config::default()
        }
    };

    let config = apply_env(base, |key| std::env::var(key).ok())?;
    tracing::info!(
        bind_addr = %config.server.bind_addr,
        worker_enabled = config.worker.enabled,
        "configuration loaded"
    );
    Ok(config)
}

/// Load configuration from a file.
///
/// If `path` is `None`, probes the standard locations.
///
/// # Errors
/// Returns `LinkedGptError::Configuration` if the file is missing, unreadable
/// or malformed.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) if p.exists() => p,
        Some(p) => {
            return Err(LinkedGptError::Configuration(format!(
                "Config file not found: {}",
                p.display()
            )))
        }
        None => probe_config_paths().ok_or_else(|| {
            LinkedGptError::Configuration(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "loading configuration from file");

    let contents = std::fs::read_to_string(&config_path).map_err(|e| {
        LinkedGptError::Configuration(format!("Failed to read config file: {e}"))
    })?;

    parse_config(&contents, &config_path)
}

/// Overlay variables resolved through `lookup` onto `config`.
///
/// Empty values count as unset.
pub fn apply_env<F>(mut config: Config, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    if let Some(addr) = get("LINKEDGPT_BIND_ADDR") {
        config.server.bind_addr = addr;
    }

    if let Some(key) = get("OPENAI_API_KEY") {
        config.openai.api_key = Some(key);
    }
    if let Some(model) = get("OPENAI_MODEL") {
        config.openai.model = model;
    }
    if let Some(base_url) = get("OPENAI_BASE_URL") {
        config.openai.base_url = base_url;
    }

    if let Some(url) = get("SUPABASE_URL") {
        config.supabase.url = Some(url);
    }
    if let Some(key) = get("SUPABASE_SERVICE_ROLE_KEY").or_else(|| get("SUPABASE_ANON_KEY")) {
        config.supabase.key = Some(key);
    }

    if let Some(enabled) = get("LINKEDGPT_WORKER_ENABLED") {
        config.worker.enabled = parse_bool(&enabled);
    }
    if let Some(cron) = get("LINKEDGPT_WORKER_CRON") {
        config.worker.cron_expression = cron;
    }
    if let Some(secs) = get("LINKEDGPT_WORKER_JOB_TIMEOUT_SECS") {
        config.worker.job_timeout_secs = parse_secs("LINKEDGPT_WORKER_JOB_TIMEOUT_SECS", &secs)?;
    }
    if let Some(secret) = get("LINKEDGPT_WORKER_TRIGGER_SECRET") {
        config.worker.trigger_secret = Some(secret);
    }

    if let Some(secs) = get("LINKEDGPT_HTTP_TIMEOUT_SECS") {
        config.http.timeout_secs = parse_secs("LINKEDGPT_HTTP_TIMEOUT_SECS", &secs)?;
    }

    Ok(config)
}

/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| LinkedGptError::Configuration(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| LinkedGptError::Configuration(format!("Invalid JSON format: {e}"))),
        _ => Err(LinkedGptError::Configuration(format!(
            "Unsupported config format: {extension}"
        ))),
    }
}

/// First existing config file among the standard locations.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }
    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir);
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

fn parse_bool(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

fn parse_secs(key: &str, value: &str) -> Result<u64> {
    match value.parse::<u64>() {
        Ok(0) | Err(_) => Err(LinkedGptError::Configuration(format!(
            "{key} must be a positive number of seconds, got {value:?}"
        ))),
        Ok(secs) => Ok(secs),
    }
}
