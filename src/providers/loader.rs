//! Reading and parsing the providers file.

use std::io;
use std::path::Path;

use tracing::debug;

use super::ProviderError;
use crate::models::Provider;

/// Load every provider from the JSON file at `path`, preserving file order.
pub fn load_providers(path: &Path) -> Result<Vec<Provider>, ProviderError> {
    let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ProviderError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ProviderError::ReadFile {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let providers = parse_providers(&content, path)?;
    debug!(path = %path.display(), count = providers.len(), "loaded providers");
    Ok(providers)
}

/// Parse providers from JSON text. `path` is only used in error messages.
///
/// Records missing `name` or `base_url`, or with non-string fields, are
/// rejected rather than defaulted.
pub fn parse_providers(content: &str, path: &Path) -> Result<Vec<Provider>, ProviderError> {
    serde_json::from_str(content).map_err(|source| ProviderError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
  {"name": "OpenAI", "base_url": "https://api.openai.com/v1", "token_env_key": "OPENAI_API_KEY"},
  {"name": "Anthropic", "base_url": "https://api.anthropic.com", "token_env_key": "ANTHROPIC_API_KEY"},
  {"name": "Ollama", "base_url": "http://localhost:11434/v1", "token_env_key": null}
]"#;

    #[test]
    fn load_reads_all_records_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("providers.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let providers = load_providers(&path).unwrap();
        let names: Vec<_> = providers.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["OpenAI", "Anthropic", "Ollama"]);
        assert_eq!(providers[2].token_env_key, None);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let err = load_providers(&path).unwrap_err();
        assert!(matches!(err, ProviderError::FileNotFound { .. }));
        assert!(err.to_string().contains("nope.json"), "got: {err}");
    }

    #[test]
    fn load_directory_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_providers(dir.path()).unwrap_err();
        assert!(matches!(err, ProviderError::ReadFile { .. }), "got: {err:?}");
    }

    #[test]
    fn load_invalid_utf8_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("providers.json");
        std::fs::write(&path, b"[\xff]").unwrap();

        let err = load_providers(&path).unwrap_err();
        assert!(matches!(err, ProviderError::ReadFile { .. }), "got: {err:?}");
        let expected = format!("Could not read file '{}': ", path.display());
        assert!(err.to_string().starts_with(&expected), "got: {err}");
    }

    #[test]
    fn parse_invalid_json_includes_decode_detail() {
        let err = parse_providers("[{\"name\": ", Path::new("bad.json")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid JSON in 'bad.json': "), "got: {msg}");
        assert!(msg.contains("line 1"), "got: {msg}");
    }

    #[test]
    fn parse_rejects_non_array() {
        let err = parse_providers(r#"{"name": "OpenAI"}"#, Path::new("p.json")).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidJson { .. }));
    }

    #[test]
    fn parse_rejects_missing_name() {
        let err = parse_providers(r#"[{"base_url": "https://x.test"}]"#, Path::new("p.json"))
            .unwrap_err();
        assert!(err.to_string().contains("missing field `name`"), "got: {err}");
    }

    #[test]
    fn parse_empty_array() {
        let providers = parse_providers("[]", Path::new("p.json")).unwrap();
        assert!(providers.is_empty());
    }
}
