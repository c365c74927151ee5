//! Client builder for constructing [`SearchClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, api_key)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, redirects)
//!
//! # Invariants
//! - `base_url` and `api_key` are required fields and must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes
//! - Without an explicit timeout the transport default applies

use secrecy::SecretString;
use std::time::Duration;

use azsearch_config::ConnectionConfig;
use azsearch_config::constants::{DEFAULT_API_VERSION, DEFAULT_MAX_REDIRECTS};

use crate::client::SearchClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`SearchClient`].
pub struct SearchClientBuilder {
    base_url: Option<String>,
    api_key: Option<SecretString>,
    api_version: String,
    timeout: Option<Duration>,
}

impl Default for SearchClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: None,
        }
    }
}

impl SearchClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the search service, e.g. `https://my-svc.search.windows.net`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the admin API key.
    pub fn api_key(mut self, key: SecretString) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Set the REST API version. Default is `2019-05-06`.
    pub fn api_version(mut self, version: String) -> Self {
        self.api_version = version;
        self
    }

    /// Set a per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Pre-configure the builder from connection settings.
    ///
    /// The API key is not part of [`ConnectionConfig`] and must still be set.
    pub fn from_config(mut self, connection: &ConnectionConfig) -> Self {
        self.base_url = Some(connection.search_endpoint.clone());
        self.api_version = connection.api_version.clone();
        self.timeout = connection.timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`SearchClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided.
    /// Returns [`ClientError::CredentialResolution`] if `api_key` was not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<SearchClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let api_key = self.api_key.ok_or_else(|| {
            ClientError::CredentialResolution("api_key is required".to_string())
        })?;

        Ok(SearchClient {
            http: http_client(self.timeout)?,
            base_url,
            api_version: self.api_version,
            api_key,
        })
    }
}

/// Build the shared `reqwest` client used for search and management calls.
pub(crate) fn http_client(timeout: Option<Duration>) -> Result<reqwest::Client> {
    let mut builder =
        reqwest::Client::builder().redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_preserves_settings() {
        let mut connection = ConnectionConfig::for_service("svc");
        connection.api_version = "2023-11-01".to_string();
        connection.timeout = Some(Duration::from_secs(90));

        let builder = SearchClientBuilder::new().from_config(&connection);

        assert_eq!(
            builder.base_url,
            Some("https://svc.search.windows.net".to_string())
        );
        assert_eq!(builder.api_version, "2023-11-01");
        assert_eq!(builder.timeout, Some(Duration::from_secs(90)));
    }

    #[test]
    fn test_normalize_base_url_trailing_slash() {
        assert_eq!(
            SearchClientBuilder::normalize_base_url("http://127.0.0.1:8080/".to_string()),
            "http://127.0.0.1:8080"
        );
        assert_eq!(
            SearchClientBuilder::normalize_base_url("https://svc.search.windows.net//".to_string()),
            "https://svc.search.windows.net"
        );
    }
}
