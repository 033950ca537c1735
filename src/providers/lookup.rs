//! Case-insensitive provider lookup.

use tracing::debug;

use super::ProviderError;
use crate::models::Provider;

/// Find the first provider whose name matches `name`, ignoring case.
pub fn find_provider<'a>(providers: &'a [Provider], name: &str) -> Option<&'a Provider> {
    providers.iter().find(|provider| provider.matches(name))
}

/// Like [`find_provider`], but a miss becomes
/// [`ProviderError::UnknownProvider`] listing every configured name.
pub fn lookup_provider<'a>(
    providers: &'a [Provider],
    name: &str,
) -> Result<&'a Provider, ProviderError> {
    match find_provider(providers, name) {
        Some(provider) => {
            debug!(requested = name, matched = %provider.name, "provider found");
            Ok(provider)
        }
        None => Err(ProviderError::UnknownProvider {
            name: name.to_string(),
            available: providers.iter().map(|p| p.name.clone()).collect(),
        }),
    }
}
