//! Command implementations.

pub mod deploy;
pub mod list;

use anyhow::{Context, Result};
use tracing::info;

use azsearch_client::SearchClient;
use azsearch_config::Config;

/// Resolve credentials and build a client from the given config.
pub async fn connect(config: &Config) -> Result<SearchClient> {
    if let Some(group) = config.credentials.resource_group() {
        info!(
            "Resolving admin key for '{}' in resource group '{}'",
            config.connection.service_name, group
        );
    }
    let client = SearchClient::connect(config)
        .await
        .context("Failed to obtain search service credentials")?;
    info!(
        "Connecting to {} (api-version {})",
        client.base_url(),
        client.api_version()
    );
    Ok(client)
}
