//! Shared test utilities for azsearch-deploy integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Clear every variable the binary reads so the host cannot leak in.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - `AZSEARCH_SERVICE_NAME` is set to "test-svc" unless overridden.

use assert_cmd::Command;

pub const TEST_API_KEY: &str = "test-admin-key";

/// Returns a hermetic `azsearch-deploy` command for integration testing.
pub fn deploy_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("azsearch-deploy");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    for (key, _) in std::env::vars() {
        if key.starts_with("AZSEARCH_") || key.starts_with("AZURE_") {
            cmd.env_remove(&key);
        }
    }

    cmd.env("AZSEARCH_SERVICE_NAME", "test-svc");
    cmd.env("RUST_LOG", "info");
    cmd
}

/// Returns a hermetic command pointed at `endpoint` with a direct API key.
#[allow(dead_code)]
pub fn deploy_cmd_with_endpoint(endpoint: &str) -> Command {
    let mut cmd = deploy_cmd();
    cmd.env("AZSEARCH_ENDPOINT", endpoint);
    cmd.env("AZSEARCH_API_KEY", TEST_API_KEY);
    cmd
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
