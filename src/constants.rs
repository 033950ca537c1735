//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! defaults and the fixed report literals.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "provider-info";

/// Local config filename, looked up in the current working directory.
pub const CONFIG_FILENAME: &str = ".provider-info.toml";

/// Directory name under the platform config dir for the global config.
pub const CONFIG_DIR: &str = "provider-info";

/// Provider looked up when no name is given.
pub const DEFAULT_PROVIDER: &str = "OpenAI";

/// Providers file read when no path is given.
pub const DEFAULT_JSON_FILE: &str = "providers.json";

/// Name of the provider whose base URL can be overridden from the environment.
/// Compared case-insensitively.
pub const OPENAI_PROVIDER: &str = "openai";

/// Token text for providers without a `token_env_key`.
pub const NO_TOKEN_REQUIRED: &str = "No token required";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
pub const ENV_PROVIDER: &str = "PROVIDER_INFO_PROVIDER";
pub const ENV_JSON_FILE: &str = "PROVIDER_INFO_JSON_FILE";
pub const ENV_LOG: &str = "PROVIDER_INFO_LOG";
