//! Configuration assembly for CLI commands.
//!
//! Responsibilities:
//! - Layer environment variables and CLI flags into a `ConfigLoader`.
//! - Build the connection config and, for `deploy`, the deploy config.
//!
//! Does NOT handle:
//! - `.env` loading (done in `main()` before parsing).
//! - Credential resolution (done by the client when connecting).
//!
//! Invariants:
//! - CLI flags override environment variables.
//! - All validation errors surface before any network call.

use std::time::Duration;

use azsearch_config::{Config, ConfigError, ConfigLoader, DeployConfig};

use crate::args::{Cli, Commands};

/// Validated configuration for the selected command.
pub struct CommandContext {
    pub config: Config,
    /// Present only for `deploy`.
    pub deploy: Option<DeployConfig>,
}

impl CommandContext {
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut loader = ConfigLoader::new().from_env()?;

        if let Some(ref name) = cli.service_name {
            loader = loader.with_service_name(name.clone());
        }
        if let Some(ref key) = cli.api_key {
            loader = loader.with_api_key(key.clone());
        }
        if let Some(ref group) = cli.resource_group {
            loader = loader.with_resource_group(group.clone());
        }
        if let Some(ref subscription) = cli.subscription_id {
            loader = loader.with_subscription_id(subscription.clone());
        }
        if let Some(ref token) = cli.management_token {
            loader = loader.with_management_token(token.clone());
        }
        if let Some(ref version) = cli.api_version {
            loader = loader.with_api_version(version.clone());
        }
        if let Some(ref url) = cli.search_endpoint {
            loader = loader.with_search_endpoint(url.clone());
        }
        if let Some(ref url) = cli.management_endpoint {
            loader = loader.with_management_endpoint(url.clone());
        }
        if let Some(secs) = cli.timeout {
            loader = loader.with_timeout(Duration::from_secs(secs));
        }

        let deploy = match &cli.command {
            Commands::Deploy {
                index_folder,
                max_call_count,
                pause_seconds,
                failure_policy,
            } => {
                if let Some(folder) = index_folder {
                    loader = loader.with_index_folder(folder.clone());
                }
                if let Some(count) = max_call_count {
                    loader = loader.with_max_call_count(*count);
                }
                if let Some(secs) = pause_seconds {
                    loader = loader.with_pause(Duration::from_secs(*secs));
                }
                if let Some(policy) = failure_policy {
                    loader = loader.with_failure_policy((*policy).into());
                }
                // Must be done before loader.build() since build() consumes the loader
                Some(loader.build_deploy_config()?)
            }
            Commands::List => None,
        };

        Ok(Self {
            config: loader.build()?,
            deploy,
        })
    }
}
