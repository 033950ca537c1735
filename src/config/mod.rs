//! Configuration loading and layering.
//!
//! Handles `.provider-info.toml` loading, environment variable overrides,
//! and the built-in defaults for the CLI's optional arguments.

pub mod loader;

pub use loader::{Config, ConfigError, DefaultsConfig};
