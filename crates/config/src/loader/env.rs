//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse environment variables for deployment configuration.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::types::FailurePolicy;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parse an environment variable into `T`, mapping parse failures to `InvalidValue`.
fn parse_env<T: FromStr>(key: &str, expected: &str) -> Result<Option<T>, ConfigError> {
    env_var_or_none(key)
        .map(|raw| {
            raw.parse::<T>().map_err(|_| ConfigError::InvalidValue {
                var: key.to_string(),
                message: expected.to_string(),
            })
        })
        .transpose()
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(name) = env_var_or_none("AZSEARCH_SERVICE_NAME") {
        loader.set_service_name(Some(name));
    }
    if let Some(key) = env_var_or_none("AZSEARCH_API_KEY") {
        loader.set_api_key(Some(SecretString::new(key.into())));
    }
    if let Some(group) = env_var_or_none("AZSEARCH_RESOURCE_GROUP") {
        loader.set_resource_group(Some(group));
    }
    if let Some(subscription) = env_var_or_none("AZURE_SUBSCRIPTION_ID") {
        loader.set_subscription_id(Some(subscription));
    }
    if let Some(token) = env_var_or_none("AZURE_ACCESS_TOKEN") {
        loader.set_management_token(Some(SecretString::new(token.into())));
    }
    if let Some(version) = env_var_or_none("AZSEARCH_API_VERSION") {
        loader.set_api_version(Some(version));
    }
    if let Some(endpoint) = env_var_or_none("AZSEARCH_ENDPOINT") {
        loader.set_search_endpoint(Some(endpoint));
    }
    if let Some(endpoint) = env_var_or_none("AZURE_MANAGEMENT_ENDPOINT") {
        loader.set_management_endpoint(Some(endpoint));
    }
    if let Some(secs) = parse_env::<u64>("AZSEARCH_TIMEOUT", "must be a number")? {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(folder) = env_var_or_none("AZSEARCH_INDEX_FOLDER") {
        loader.set_index_folder(Some(PathBuf::from(folder)));
    }
    if let Some(count) = parse_env::<u32>(
        "AZSEARCH_MAX_CALL_COUNT",
        "must be a positive integer",
    )? {
        loader.set_max_call_count(Some(count));
    }
    if let Some(secs) = parse_env::<u64>("AZSEARCH_PAUSE_SECONDS", "must be a number")? {
        loader.set_pause(Some(Duration::from_secs(secs)));
    }
    if let Some(raw) = env_var_or_none("AZSEARCH_FAILURE_POLICY") {
        let policy = raw
            .parse::<FailurePolicy>()
            .map_err(|message| ConfigError::InvalidValue {
                var: "AZSEARCH_FAILURE_POLICY".to_string(),
                message,
            })?;
        loader.set_failure_policy(Some(policy));
    }
    Ok(())
}
