//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Support loading from environment variables and direct builder methods.
//! - Build the final `Config` and `DeployConfig` from loaded values.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables when called after `from_env()`.
//! - Blank/whitespace-only builder values are treated as unset.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_API_VERSION, DEFAULT_MANAGEMENT_ENDPOINT, DEFAULT_MAX_CALL_COUNT, DEFAULT_PAUSE_SECS,
    MAX_TIMEOUT_SECS,
};
use crate::types::connection::default_search_endpoint;
use crate::types::{
    Config, ConnectionConfig, CredentialSource, DeployConfig, FailurePolicy, ThrottleConfig,
};

/// Configuration loader that builds config from environment variables and overrides.
#[derive(Default)]
pub struct ConfigLoader {
    service_name: Option<String>,
    api_key: Option<SecretString>,
    resource_group: Option<String>,
    subscription_id: Option<String>,
    management_token: Option<SecretString>,
    api_version: Option<String>,
    search_endpoint: Option<String>,
    management_endpoint: Option<String>,
    timeout: Option<Duration>,
    index_folder: Option<PathBuf>,
    max_call_count: Option<u32>,
    pause: Option<Duration>,
    failure_policy: Option<FailurePolicy>,
}

/// Treat blank strings as unset.
fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the search service name.
    pub fn with_service_name(mut self, name: String) -> Self {
        self.service_name = non_blank(name);
        self
    }

    /// Set the admin API key.
    pub fn with_api_key(mut self, key: String) -> Self {
        self.api_key = non_blank(key).map(|k| SecretString::new(k.into()));
        self
    }

    /// Set the resource group used to look up the admin key.
    pub fn with_resource_group(mut self, group: String) -> Self {
        self.resource_group = non_blank(group);
        self
    }

    /// Set the subscription that owns the resource group.
    pub fn with_subscription_id(mut self, subscription: String) -> Self {
        self.subscription_id = non_blank(subscription);
        self
    }

    /// Set the management-plane bearer token.
    pub fn with_management_token(mut self, token: String) -> Self {
        self.management_token = non_blank(token).map(|t| SecretString::new(t.into()));
        self
    }

    /// Set the REST API version.
    pub fn with_api_version(mut self, version: String) -> Self {
        self.api_version = non_blank(version);
        self
    }

    /// Override the search endpoint derived from the service name.
    pub fn with_search_endpoint(mut self, url: String) -> Self {
        self.search_endpoint = non_blank(url);
        self
    }

    /// Override the management endpoint.
    pub fn with_management_endpoint(mut self, url: String) -> Self {
        self.management_endpoint = non_blank(url);
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the folder containing index definitions.
    pub fn with_index_folder(mut self, folder: PathBuf) -> Self {
        self.index_folder = Some(folder);
        self
    }

    /// Set the number of calls allowed before a pause.
    pub fn with_max_call_count(mut self, count: u32) -> Self {
        self.max_call_count = Some(count);
        self
    }

    /// Set the rate-limit pause duration.
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = Some(pause);
        self
    }

    /// Set the per-item failure policy.
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = Some(policy);
        self
    }

    /// Build the connection and credential configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let service_name = self
            .service_name
            .as_deref()
            .map(validate_service_name)
            .transpose()?
            .ok_or(ConfigError::MissingServiceName)?;

        let credentials = match (self.api_key, self.resource_group) {
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingCredentials),
            (None, None) => return Err(ConfigError::MissingCredentials),
            (Some(key), None) => CredentialSource::ApiKey(key),
            (None, Some(name)) => CredentialSource::ResourceGroup {
                name,
                subscription_id: self
                    .subscription_id
                    .ok_or(ConfigError::MissingSubscriptionId)?,
                management_token: self
                    .management_token
                    .ok_or(ConfigError::MissingManagementToken)?,
            },
        };

        let search_endpoint = match self.search_endpoint.as_deref() {
            Some(raw) => validate_and_normalize_url("search_endpoint", raw)?,
            None => default_search_endpoint(&service_name),
        };
        let management_endpoint = validate_and_normalize_url(
            "management_endpoint",
            self.management_endpoint
                .as_deref()
                .unwrap_or(DEFAULT_MANAGEMENT_ENDPOINT),
        )?;

        if let Some(timeout) = self.timeout {
            validate_timeout(timeout)?;
        }

        Ok(Config {
            connection: ConnectionConfig {
                service_name,
                search_endpoint,
                management_endpoint,
                api_version: self
                    .api_version
                    .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
                timeout: self.timeout,
            },
            credentials,
        })
    }

    /// Build the deployment settings from loaded values.
    ///
    /// Must be called before `build()`, which consumes the loader.
    pub fn build_deploy_config(&self) -> Result<DeployConfig, ConfigError> {
        let index_folder = self
            .index_folder
            .clone()
            .ok_or(ConfigError::MissingIndexFolder)?;

        if !index_folder.exists() {
            return Err(ConfigError::IndexFolderNotFound { path: index_folder });
        }
        if !index_folder.is_dir() {
            return Err(ConfigError::IndexFolderNotDirectory { path: index_folder });
        }

        let max_call_count = self.max_call_count.unwrap_or(DEFAULT_MAX_CALL_COUNT);
        if max_call_count == 0 {
            return Err(ConfigError::InvalidMaxCallCount {
                message: "must be at least 1".to_string(),
            });
        }

        let pause = self
            .pause
            .unwrap_or(Duration::from_secs(DEFAULT_PAUSE_SECS));

        Ok(DeployConfig {
            index_folder,
            throttle: ThrottleConfig {
                max_call_count,
                pause,
            },
            failure_policy: self.failure_policy.unwrap_or_default(),
        })
    }

    // Internal setters for use by other loader modules

    pub(crate) fn set_service_name(&mut self, name: Option<String>) {
        self.service_name = name;
    }

    pub(crate) fn set_api_key(&mut self, key: Option<SecretString>) {
        self.api_key = key;
    }

    pub(crate) fn set_resource_group(&mut self, group: Option<String>) {
        self.resource_group = group;
    }

    pub(crate) fn set_subscription_id(&mut self, subscription: Option<String>) {
        self.subscription_id = subscription;
    }

    pub(crate) fn set_management_token(&mut self, token: Option<SecretString>) {
        self.management_token = token;
    }

    pub(crate) fn set_api_version(&mut self, version: Option<String>) {
        self.api_version = version;
    }

    pub(crate) fn set_search_endpoint(&mut self, url: Option<String>) {
        self.search_endpoint = url;
    }

    pub(crate) fn set_management_endpoint(&mut self, url: Option<String>) {
        self.management_endpoint = url;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_index_folder(&mut self, folder: Option<PathBuf>) {
        self.index_folder = folder;
    }

    pub(crate) fn set_max_call_count(&mut self, count: Option<u32>) {
        self.max_call_count = count;
    }

    pub(crate) fn set_pause(&mut self, pause: Option<Duration>) {
        self.pause = pause;
    }

    pub(crate) fn set_failure_policy(&mut self, policy: Option<FailurePolicy>) {
        self.failure_policy = policy;
    }
}

/// Service names are lowercase letters, digits and dashes, not starting or ending with a dash.
fn validate_service_name(raw: &str) -> Result<String, ConfigError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ConfigError::MissingServiceName);
    }

    let valid_chars = name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !valid_chars || name.starts_with('-') || name.ends_with('-') {
        return Err(ConfigError::InvalidValue {
            var: "service_name".into(),
            message: format!(
                "must contain only lowercase letters, digits and dashes, got: {name}"
            ),
        });
    }

    Ok(name.to_string())
}

/// Validates a per-request timeout: greater than zero and at most `MAX_TIMEOUT_SECS`.
fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
    let secs = timeout.as_secs();
    if secs == 0 {
        return Err(ConfigError::InvalidTimeout {
            message: "timeout must be greater than 0 seconds".to_string(),
        });
    }
    if secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidTimeout {
            message: format!(
                "timeout exceeds maximum allowed value of {} seconds",
                MAX_TIMEOUT_SECS
            ),
        });
    }
    Ok(())
}

/// Validates and normalizes an endpoint URL.
///
/// Validation rules:
/// - Parse as an absolute URL
/// - Require scheme is http or https
/// - Require host is present
/// - Normalize by stripping trailing slash
fn validate_and_normalize_url(var: &str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: var.into(),
        message: format!("must be an absolute http(s) URL with a host: {e}"),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: var.into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: var.into(),
            message: "host is required".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
