//! Admin key resolution.
//!
//! Turns a [`CredentialSource`] into the admin API key sent with every
//! search-plane request. A direct key is used as-is. A resource-group source
//! asks the management plane for the service's admin keys and takes the
//! primary one.
//!
//! # Invariants
//! - At most one management-plane call is made per resolution.
//! - Every failure surfaces as [`ClientError::CredentialResolution`].

use secrecy::SecretString;
use tracing::{debug, info};

use azsearch_config::{ConnectionConfig, CredentialSource};

use crate::client::builder::http_client;
use crate::endpoints::{ServiceResource, list_admin_keys};
use crate::error::{ClientError, Result};

/// Resolve the admin API key for the service described by `connection`.
pub async fn resolve_api_key(
    connection: &ConnectionConfig,
    source: &CredentialSource,
) -> Result<SecretString> {
    match source {
        CredentialSource::ApiKey(key) => {
            debug!("Using API key supplied directly");
            Ok(key.clone())
        }
        CredentialSource::ResourceGroup {
            name,
            subscription_id,
            management_token,
        } => {
            info!(
                service = %connection.service_name,
                resource_group = %name,
                "Looking up admin key through the management plane"
            );
            let http = http_client(connection.timeout)?;
            let resource = ServiceResource {
                subscription_id,
                resource_group: name,
                service_name: &connection.service_name,
            };

            let keys = list_admin_keys(
                &http,
                &connection.management_endpoint,
                management_token,
                resource,
            )
            .await
            .map_err(|e| {
                ClientError::CredentialResolution(format!(
                    "could not list admin keys for '{}' in resource group '{}': {}",
                    connection.service_name, name, e
                ))
            })?;

            keys.primary_key.ok_or_else(|| {
                ClientError::CredentialResolution(format!(
                    "no primary admin key returned for '{}'",
                    connection.service_name
                ))
            })
        }
    }
}
