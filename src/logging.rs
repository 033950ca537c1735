//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout only ever carries the report. The filter is
//! read from `PROVIDER_INFO_LOG` (`EnvFilter` syntax); without it only
//! warnings are shown, or debug output with `--verbose`.

use tracing::warn;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use crate::constants::ENV_LOG;
use crate::env::Env;

fn default_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Build the filter used by [`init`]. Fails on unparseable `PROVIDER_INFO_LOG`.
pub fn filter(verbose: bool, env: &Env) -> Result<EnvFilter, ParseError> {
    match env.non_empty(ENV_LOG) {
        Some(directives) => EnvFilter::try_new(directives),
        None => Ok(EnvFilter::new(default_level(verbose))),
    }
}

/// Install the global subscriber. Calling it twice is harmless.
///
/// An invalid `PROVIDER_INFO_LOG` falls back to the default level and is
/// reported as a warning once the subscriber is in place.
pub fn init(verbose: bool, env: &Env) {
    let (filter, invalid) = match filter(verbose, env) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(default_level(verbose)), Some(e)),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();

    if let Some(e) = invalid {
        warn!("ignoring invalid {ENV_LOG} value: {e}");
    }
}
