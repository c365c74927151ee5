//! Admin key pair returned by the management plane.

use secrecy::SecretString;
use serde::{Deserialize, Deserializer};

/// Response of the `listAdminKeys` operation.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AdminKeys {
    #[serde(default, deserialize_with = "optional_secret")]
    pub primary_key: Option<SecretString>,
    #[serde(default, deserialize_with = "optional_secret")]
    pub secondary_key: Option<SecretString>,
}

/// Deserialize a nullable string straight into a `SecretString`; blank values become `None`.
fn optional_secret<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .filter(|s| !s.trim().is_empty())
        .map(|s| SecretString::new(s.into())))
}
