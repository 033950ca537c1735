//! CLI argument definitions and help text.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

/// Usage examples appended to `--help`.
pub const EXAMPLES: &str = "\
Examples:
  provider-info                                    # Uses OpenAI by default
  provider-info \"OpenAI\"
  provider-info \"Anthropic\"
  provider-info \"Ollama\"
  provider-info --json-file custom_providers.json \"OpenAI\"";
