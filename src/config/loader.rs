//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables
//! 3. `.provider-info.toml` in the working directory
//! 4. `~/.config/provider-info/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::constants::{DEFAULT_JSON_FILE, DEFAULT_PROVIDER, ENV_JSON_FILE, ENV_PROVIDER};
use crate::env::Env;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: DefaultsConfig,
}

/// Values used when the corresponding CLI argument is omitted.
///
/// `None` means no layer set the value; the accessors then fall back to
/// the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Provider name looked up when none is given.
    pub provider: Option<String>,
    /// Path to the providers JSON file.
    pub json_file: Option<PathBuf>,
}

impl DefaultsConfig {
    /// The configured provider name, or `OpenAI`.
    pub fn provider(&self) -> &str {
        self.provider.as_deref().unwrap_or(DEFAULT_PROVIDER)
    }

    /// The configured providers file, or `providers.json`.
    pub fn json_file(&self) -> &Path {
        self.json_file
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_JSON_FILE))
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads the global config, then `work_dir`'s local config, then applies
    /// environment variable overrides. CLI arguments are applied by the caller.
    pub fn load(work_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                debug!(path = %global_path.display(), "applying global config");
                config.merge(Self::load_file(&global_path)?);
            }
        }

        if let Some(dir) = work_dir {
            let local_path = dir.join(crate::constants::CONFIG_FILENAME);
            if local_path.exists() {
                debug!(path = %local_path.display(), "applying local config");
                config.merge(Self::load_file(&local_path)?);
            }
        }

        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(crate::constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one; every value `other` sets wins.
    fn merge(&mut self, other: Config) {
        if let Some(provider) = other.defaults.provider {
            self.defaults.provider = Some(provider);
        }
        if let Some(json_file) = other.defaults.json_file {
            self.defaults.json_file = Some(json_file);
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(val) = env.non_empty(ENV_PROVIDER) {
            debug!("default provider taken from {ENV_PROVIDER}");
            self.defaults.provider = Some(val);
        }
        if let Some(val) = env.non_empty(ENV_JSON_FILE) {
            debug!("providers file taken from {ENV_JSON_FILE}");
            self.defaults.json_file = Some(PathBuf::from(val));
        }
    }
}
