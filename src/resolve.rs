//! Token and base URL resolution.
//!
//! Both read the environment through [`Env`] at lookup time; nothing from
//! the environment is cached or written back to the provider record.

use tracing::debug;

use crate::constants::{ENV_OPENAI_BASE_URL, NO_TOKEN_REQUIRED, OPENAI_PROVIDER};
use crate::env::Env;
use crate::models::{Provider, ResolvedProvider};

/// Resolve the token named by `token_env_key`.
///
/// Missing tokens are not an error: the result is a placeholder message
/// that ends up in the printed report.
pub fn resolve_token(token_env_key: Option<&str>, env: &Env) -> String {
    let key = match token_env_key {
        Some(key) if !key.is_empty() => key,
        _ => return NO_TOKEN_REQUIRED.to_string(),
    };

    match env.non_empty(key) {
        Some(token) => {
            debug!(key, "token read from environment");
            token
        }
        None => {
            debug!(key, "token variable not set");
            format!("Environment variable '{key}' not found")
        }
    }
}

/// Resolve the base URL, honouring `OPENAI_BASE_URL` for the OpenAI provider.
pub fn resolve_base_url(provider: &Provider, env: &Env) -> String {
    if provider.matches(OPENAI_PROVIDER) {
        if let Some(url) = env.non_empty(ENV_OPENAI_BASE_URL) {
            debug!(provider = %provider.name, "base URL overridden by {ENV_OPENAI_BASE_URL}");
            return url;
        }
    }
    provider.base_url.clone()
}

/// Resolve everything the report needs for `provider`.
pub fn resolve_provider(provider: &Provider, env: &Env) -> ResolvedProvider {
    ResolvedProvider {
        name: provider.name.clone(),
        base_url: resolve_base_url(provider, env),
        token_env_key: provider.token_env_key().map(String::from),
        token: resolve_token(provider.token_env_key(), env),
    }
}
