//! Provider records and their resolved form.

use serde::Deserialize;
use std::fmt;

/// A provider entry from `providers.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Provider {
    /// Display name, matched case-insensitively.
    pub name: String,
    /// Default endpoint URL.
    pub base_url: String,
    /// Name of the environment variable holding the token.
    ///
    /// May be absent, `null` or `""`; all three mean no token is required.
    #[serde(default)]
    pub token_env_key: Option<String>,
}

impl Provider {
    /// Returns `true` if `name` equals this provider's name, ignoring case.
    pub fn matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// The token variable name, or `None` when it is null or empty.
    pub fn token_env_key(&self) -> Option<&str> {
        self.token_env_key.as_deref().filter(|key| !key.is_empty())
    }
}

/// A provider after token and base URL resolution, ready to print.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedProvider {
    pub name: String,
    pub base_url: String,
    pub token_env_key: Option<String>,
    /// The token value, or a placeholder explaining why there is none.
    pub token: String,
}

impl fmt::Debug for ResolvedProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedProvider")
            .field("name", &self.name)
            .field("base_url", &self.base_url)
            .field("token_env_key", &self.token_env_key)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(name: &str, key: Option<&str>) -> Provider {
        Provider {
            name: name.to_string(),
            base_url: "https://example.test".to_string(),
            token_env_key: key.map(String::from),
        }
    }

    #[test]
    fn matches_ignores_case() {
        let p = provider("OpenAI", None);
        assert!(p.matches("openai"));
        assert!(p.matches("OPENAI"));
        assert!(p.matches("OpenAI"));
        assert!(!p.matches("open ai"));
    }

    #[test]
    fn empty_and_null_token_keys_are_conflated() {
        assert_eq!(provider("Ollama", None).token_env_key(), None);
        assert_eq!(provider("Ollama", Some("")).token_env_key(), None);
        assert_eq!(
            provider("Anthropic", Some("ANTHROPIC_API_KEY")).token_env_key(),
            Some("ANTHROPIC_API_KEY")
        );
    }

    #[test]
    fn deserialize_accepts_missing_and_null_token_key() {
        let json = r#"[
            {"name": "A", "base_url": "https://a.test", "token_env_key": null},
            {"name": "B", "base_url": "https://b.test"},
            {"name": "C", "base_url": "https://c.test", "token_env_key": "C_KEY"}
        ]"#;
        let providers: Vec<Provider> = serde_json::from_str(json).unwrap();
        assert_eq!(providers.len(), 3);
        assert_eq!(providers[0].token_env_key, None);
        assert_eq!(providers[1].token_env_key, None);
        assert_eq!(providers[2].token_env_key.as_deref(), Some("C_KEY"));
    }

    #[test]
    fn deserialize_rejects_missing_base_url() {
        let json = r#"[{"name": "A"}]"#;
        let err = serde_json::from_str::<Vec<Provider>>(json).unwrap_err();
        assert!(err.to_string().contains("base_url"), "got: {err}");
    }

    #[test]
    fn resolved_debug_redacts_token() {
        let resolved = ResolvedProvider {
            name: "OpenAI".into(),
            base_url: "https://api.openai.com/v1".into(),
            token_env_key: Some("OPENAI_API_KEY".into()),
            token: "sk-secret".into(),
        };
        let debug = format!("{resolved:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
