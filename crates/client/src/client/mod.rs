//! Search service REST API client and API methods.
//!
//! This module provides the primary [`SearchClient`] for managing indexes on
//! a search service. The client holds a resolved admin API key; it never
//! talks to the management plane itself.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `indexes`: Index management methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Admin key lookup by resource group (see [`crate::credentials`])
//! - Throttling between calls (see [`crate::throttle`])

pub mod builder;

mod indexes;

use secrecy::SecretString;

use azsearch_config::Config;

use crate::credentials::resolve_api_key;
use crate::error::Result;

/// Search service REST API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use azsearch_client::SearchClient;
/// use secrecy::SecretString;
///
/// let client = SearchClient::builder()
///     .base_url("https://my-svc.search.windows.net".to_string())
///     .api_key(SecretString::new("admin-key".to_string().into()))
///     .build()?;
/// ```
///
/// Use [`SearchClient::connect`] to resolve credentials from a [`Config`] first.
#[derive(Debug)]
pub struct SearchClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_version: String,
    pub(crate) api_key: SecretString,
}

impl SearchClient {
    /// Create a new client builder.
    pub fn builder() -> builder::SearchClientBuilder {
        builder::SearchClientBuilder::new()
    }

    /// Resolve the admin key described by `config` and build a client.
    ///
    /// With a resource-group credential source this makes exactly one
    /// management-plane call; with a direct API key it makes none.
    pub async fn connect(config: &Config) -> Result<Self> {
        let api_key = resolve_api_key(&config.connection, &config.credentials).await?;
        Self::builder()
            .from_config(&config.connection)
            .api_key(api_key)
            .build()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the API version sent with every request.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }
}
