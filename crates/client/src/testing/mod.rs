//! Testing utilities for search client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use azsearch_client::testing::load_fixture;
//!
//! let fixture = load_fixture("indexes/list_indexes.json");
//! ```

use std::path::{Path, PathBuf};

fn fixture_path(fixture_path: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path)
}

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    serde_json::from_str(&load_fixture_text(fixture_path)).expect("Invalid JSON in fixture")
}

/// Load a fixture file verbatim, for request bodies that must match byte for byte.
///
/// # Panics
/// - If the fixture file cannot be read
pub fn load_fixture_text(path: &str) -> String {
    let full_path = fixture_path(path);
    std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()))
}
