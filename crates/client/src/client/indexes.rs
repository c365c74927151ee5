//! Index management API methods for [`SearchClient`].
//!
//! # What this module handles:
//! - Listing index names
//! - Creating an index from a raw JSON definition
//! - Deleting an index by name
//!
//! # What this module does NOT handle:
//! - Low-level index endpoint HTTP calls (in [`crate::endpoints`])
//! - Throttling (callers consult a [`crate::RateLimiter`] first)

use crate::client::SearchClient;
use crate::endpoints;
use crate::error::Result;

impl SearchClient {
    /// List all index names, in the order the service returns them.
    pub async fn list_indexes(&self) -> Result<Vec<String>> {
        endpoints::list_indexes(&self.http, &self.base_url, &self.api_key, &self.api_version)
            .await
    }

    /// Create an index; `definition` is sent verbatim as the request body.
    pub async fn create_index(&self, definition: String) -> Result<()> {
        endpoints::create_index(
            &self.http,
            &self.base_url,
            &self.api_key,
            &self.api_version,
            definition,
        )
        .await
    }

    /// Delete an index by name.
    pub async fn delete_index(&self, name: &str) -> Result<()> {
        endpoints::delete_index(
            &self.http,
            &self.base_url,
            &self.api_key,
            &self.api_version,
            name,
        )
        .await
    }
}
