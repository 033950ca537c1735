//! Loading and looking up provider records.
//!
//! The providers file is a JSON array of provider objects. It is read
//! once, then searched linearly by case-insensitive name.

pub mod loader;
pub mod lookup;

use std::path::PathBuf;

use thiserror::Error;

pub use loader::{load_providers, parse_providers};
pub use lookup::{find_provider, lookup_provider};

/// Errors from loading or searching the providers file.
///
/// Display strings are the user-facing messages printed after `Error: `.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("File '{path}' not found.")]
    FileNotFound { path: PathBuf },

    #[error("Could not read file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in '{path}': {source}")]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Provider '{name}' not found.\n\nAvailable providers:{}", available_list(.available))]
    UnknownProvider { name: String, available: Vec<String> },
}

/// One `\n  - <name>` line per provider, in file order.
fn available_list(names: &[String]) -> String {
    names.iter().map(|name| format!("\n  - {name}")).collect()
}
