//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the search client. All integration tests should use
//! these utilities to ensure consistency.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//!
//! # What this does NOT handle
//! - Mock expectations (use wiremock directly in tests)

use std::path::Path;

#[allow(unused_imports)]
pub use azsearch_client::testing::{load_fixture, load_fixture_text};

#[allow(unused_imports)]
pub use azsearch_client::{SearchClient, endpoints};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use secrecy::SecretString;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-admin-key";
pub const TEST_API_VERSION: &str = "2019-05-06";

#[allow(dead_code)]
pub fn api_key() -> SecretString {
    SecretString::new(TEST_API_KEY.to_string().into())
}

/// Build a client pointed at the mock server.
#[allow(dead_code)]
pub fn search_client(server: &MockServer) -> SearchClient {
    SearchClient::builder()
        .base_url(server.uri())
        .api_key(api_key())
        .api_version(TEST_API_VERSION.to_string())
        .build()
        .expect("client should build")
}

/// Body of a list-indexes response with the given names.
#[allow(dead_code)]
pub fn index_list(names: &[&str]) -> serde_json::Value {
    let value: Vec<_> = names
        .iter()
        .map(|n| serde_json::json!({ "name": n }))
        .collect();
    serde_json::json!({ "value": value })
}

/// Write `content` to `dir/relative`, creating parent directories.
#[allow(dead_code)]
pub fn write_index_file(dir: &Path, relative: &str, content: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dir");
    }
    std::fs::write(path, content).expect("write index file");
}
