//! Configuration loading
//!
//! Environment variables take precedence; a config file, when one is found,
//! fills whatever the environment leaves unset.

pub mod loader;

pub use loader::{apply_env, load, load_from_file, probe_config_paths};
