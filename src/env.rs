//! Environment variable abstraction for testability.
//!
//! Production code uses [`Env::real()`] which delegates to [`std::env::var`].
//! Tests use [`Env::from_vars()`] backed by a `HashMap`, so token and
//! base URL resolution can be exercised without `unsafe` calls to
//! [`std::env::set_var`] / [`std::env::remove_var`].

use std::collections::HashMap;
use std::env::VarError;

/// Environment variable reader.
#[derive(Clone, Debug, Default)]
pub struct Env {
    vars: Option<HashMap<String, String>>,
}

impl Env {
    /// Create an `Env` that reads from the real process environment.
    pub fn real() -> Self {
        Self { vars: None }
    }

    /// Create an `Env` backed by explicit key-value pairs.
    ///
    /// Variables not in `vars` are reported as not present, regardless of
    /// what the process environment contains.
    pub fn from_vars(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            vars: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Look up an environment variable by name.
    pub fn var(&self, name: &str) -> Result<String, VarError> {
        match &self.vars {
            Some(map) => map.get(name).cloned().ok_or(VarError::NotPresent),
            None => std::env::var(name),
        }
    }

    /// Look up a variable, treating an empty value the same as an unset one.
    pub fn non_empty(&self, name: &str) -> Option<String> {
        self.var(name).ok().filter(|value| !value.is_empty())
    }
}
