//! Credential source for the search service admin key.

use secrecy::SecretString;

/// Where the admin API key comes from.
///
/// The two variants are mutually exclusive; the loader rejects
/// configurations that provide both or neither.
#[derive(Debug, Clone)]
pub enum CredentialSource {
    /// Admin API key supplied directly.
    ApiKey(SecretString),
    /// Look up the admin key pair of the service in this resource group.
    ResourceGroup {
        name: String,
        subscription_id: String,
        /// Bearer token for the management plane.
        management_token: SecretString,
    },
}

impl CredentialSource {
    /// True when no management-plane lookup is needed.
    pub fn is_direct(&self) -> bool {
        matches!(self, Self::ApiKey(_))
    }

    /// Resource group name, if this source requires a lookup.
    pub fn resource_group(&self) -> Option<&str> {
        match self {
            Self::ApiKey(_) => None,
            Self::ResourceGroup { name, .. } => Some(name),
        }
    }
}
