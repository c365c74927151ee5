//! REST API endpoint implementations.
//!
//! Free functions taking a `reqwest::Client` and connection details, so they
//! can be exercised directly against a mock server. [`crate::SearchClient`]
//! wraps them with the stored connection settings.

mod admin_keys;
mod indexes;
mod request;
pub mod url_encoding;

pub use admin_keys::{ServiceResource, list_admin_keys};
pub use indexes::{create_index, delete_index, list_indexes};
pub use request::send_request;
pub use url_encoding::encode_path_segment;
