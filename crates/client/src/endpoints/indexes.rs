//! Index management endpoints.

use reqwest::{Client, StatusCode, header::CONTENT_TYPE};
use secrecy::{ExposeSecret, SecretString};

use azsearch_config::constants::API_KEY_HEADER;

use crate::endpoints::encode_path_segment;
use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::models::IndexListResponse;

/// List the names of all indexes, in service order.
pub async fn list_indexes(
    client: &Client,
    base_url: &str,
    api_key: &SecretString,
    api_version: &str,
) -> Result<Vec<String>> {
    let url = format!("{}/indexes", base_url);

    let builder = client
        .get(&url)
        .header(API_KEY_HEADER, api_key.expose_secret())
        .query(&[("api-version", api_version), ("$select", "name")]);
    let response = send_request(builder, StatusCode::OK, "/indexes", "GET").await?;

    let resp: IndexListResponse = response
        .json()
        .await
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse index list: {}", e)))?;

    Ok(resp.into_names())
}

/// Create an index from a raw JSON definition.
pub async fn create_index(
    client: &Client,
    base_url: &str,
    api_key: &SecretString,
    api_version: &str,
    definition: String,
) -> Result<()> {
    let url = format!("{}/indexes", base_url);

    let builder = client
        .post(&url)
        .header(API_KEY_HEADER, api_key.expose_secret())
        .header(CONTENT_TYPE, "application/json")
        .query(&[("api-version", api_version)])
        .body(definition);

    send_request(builder, StatusCode::CREATED, "/indexes", "POST").await?;
    Ok(())
}

/// Delete an index by name.
pub async fn delete_index(
    client: &Client,
    base_url: &str,
    api_key: &SecretString,
    api_version: &str,
    index_name: &str,
) -> Result<()> {
    let path = format!("/indexes/{}", encode_path_segment(index_name));
    let url = format!("{}{}", base_url, path);

    let builder = client
        .delete(&url)
        .header(API_KEY_HEADER, api_key.expose_secret())
        .query(&[("api-version", api_version)]);

    send_request(builder, StatusCode::NO_CONTENT, &path, "DELETE").await?;
    Ok(())
}
