//! Clap argument types and default resolution.

use clap::Parser;
use std::path::{Path, PathBuf};

use provider_info::config::Config;

/// Get provider information from providers.json.
///
/// Prints the base URL, token environment key, and token for one provider.
/// For the OpenAI provider, OPENAI_BASE_URL overrides the configured base URL
/// when it is set.
#[derive(Parser, Debug)]
#[command(
    name = provider_info::constants::APP_NAME,
    version,
    after_help = super::EXAMPLES,
)]
pub struct Cli {
    /// Name of the provider to look up (default: OpenAI).
    pub provider_name: Option<String>,

    /// Path to the providers JSON file (default: providers.json).
    #[arg(long, value_name = "PATH")]
    pub json_file: Option<PathBuf>,

    /// Print debug diagnostics to stderr.
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    /// The provider to look up: the CLI argument, else the configured default.
    pub fn provider_name<'a>(&'a self, config: &'a Config) -> &'a str {
        self.provider_name
            .as_deref()
            .unwrap_or(config.defaults.provider())
    }

    /// The providers file: `--json-file`, else the configured default.
    pub fn json_file<'a>(&'a self, config: &'a Config) -> &'a Path {
        self.json_file
            .as_deref()
            .unwrap_or(config.defaults.json_file())
    }
}
