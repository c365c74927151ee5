//! Connection configuration types for azsearch-deploy.
//!
//! Responsibilities:
//! - Define connection settings (endpoints, API version, timeout).
//! - Define the main `Config` structure combining connection and credentials.
//!
//! Does NOT handle:
//! - Configuration loading from env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - Endpoints are stored normalized (no trailing slash).
//! - `timeout: None` means the transport default (no per-request timeout).

use crate::constants::{DEFAULT_API_VERSION, DEFAULT_MANAGEMENT_ENDPOINT, SEARCH_DOMAIN_SUFFIX};
use crate::types::credentials::CredentialSource;
use std::time::Duration;

/// Connection configuration for a search service.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Name of the search service (the `<service>` in `<service>.search.windows.net`).
    pub service_name: String,
    /// Base URL of the search service, e.g. `https://my-svc.search.windows.net`.
    pub search_endpoint: String,
    /// Base URL of the management plane used for admin key lookups.
    pub management_endpoint: String,
    /// Value sent as the `api-version` query parameter.
    pub api_version: String,
    /// Optional per-request timeout.
    pub timeout: Option<Duration>,
}

impl ConnectionConfig {
    /// Build a connection config with default endpoints for the given service.
    pub fn for_service(service_name: impl Into<String>) -> Self {
        let service_name = service_name.into();
        Self {
            search_endpoint: default_search_endpoint(&service_name),
            service_name,
            management_endpoint: DEFAULT_MANAGEMENT_ENDPOINT.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: None,
        }
    }
}

/// Derive the public search endpoint for a service name.
pub fn default_search_endpoint(service_name: &str) -> String {
    format!("https://{}.{}", service_name, SEARCH_DOMAIN_SUFFIX)
}

/// Main configuration: where to connect and how to authenticate.
#[derive(Debug, Clone)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub credentials: CredentialSource,
}
