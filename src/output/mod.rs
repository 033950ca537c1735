//! Plain-text report rendering.
//!
//! The report format is fixed: one `Label: value` line per field, no
//! colour, no alignment padding, so it can be parsed by shell scripts.

use crate::models::ResolvedProvider;

/// Render the four-line report for a resolved provider.
pub fn render_report(provider: &ResolvedProvider) -> String {
    let key = provider.token_env_key.as_deref().unwrap_or("None");

    let mut output = String::new();
    output.push_str(&format!("Provider: {}\n", provider.name));
    output.push_str(&format!("Base URL: {}\n", provider.base_url));
    output.push_str(&format!("Token Environment Key: {key}\n"));
    output.push_str(&format!("Token: {}\n", provider.token));
    output
}
