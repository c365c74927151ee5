//! Management-plane endpoint for search service admin keys.

use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};

use azsearch_config::constants::MANAGEMENT_API_VERSION;

use crate::endpoints::encode_path_segment;
use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::models::AdminKeys;

/// Identifies a search service in the management plane.
#[derive(Debug, Clone, Copy)]
pub struct ServiceResource<'a> {
    pub subscription_id: &'a str,
    pub resource_group: &'a str,
    pub service_name: &'a str,
}

impl ServiceResource<'_> {
    /// Path of the `listAdminKeys` action for this service.
    pub fn admin_keys_path(&self) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Search/searchServices/{}/listAdminKeys",
            encode_path_segment(self.subscription_id),
            encode_path_segment(self.resource_group),
            encode_path_segment(self.service_name),
        )
    }
}

/// Fetch the admin key pair of a search service.
pub async fn list_admin_keys(
    client: &Client,
    management_url: &str,
    bearer_token: &SecretString,
    resource: ServiceResource<'_>,
) -> Result<AdminKeys> {
    let path = resource.admin_keys_path();
    let url = format!("{}{}", management_url, path);

    let builder = client
        .post(&url)
        .bearer_auth(bearer_token.expose_secret())
        .query(&[("api-version", MANAGEMENT_API_VERSION)]);
    let response = send_request(builder, StatusCode::OK, &path, "POST").await?;

    let body = response.text().await?;
    if body.trim().is_empty() {
        return Err(ClientError::InvalidResponse(
            "listAdminKeys returned an empty body".to_string(),
        ));
    }

    serde_json::from_str(&body).map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse admin keys: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_keys_path() {
        let resource = ServiceResource {
            subscription_id: "0000-1111",
            resource_group: "rg-search",
            service_name: "my-svc",
        };
        assert_eq!(
            resource.admin_keys_path(),
            "/subscriptions/0000-1111/resourceGroups/rg-search/providers/Microsoft.Search/searchServices/my-svc/listAdminKeys"
        );
    }
}
