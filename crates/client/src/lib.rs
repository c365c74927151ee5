//! Search service REST API client.
//!
//! This crate provides a typed client for the index management API of a
//! search service, the management-plane lookup of admin keys, and the
//! deployment run that replaces every index on a service with the
//! definitions found in a folder.

pub mod client;
pub mod credentials;
pub mod deploy;
pub mod discovery;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod throttle;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::SearchClient;
pub use client::builder::SearchClientBuilder;
pub use credentials::resolve_api_key;
pub use deploy::{DeploymentReport, ItemFailure, Stage, deploy};
pub use discovery::{IndexFile, discover_index_files};
pub use error::{ClientError, Result};
pub use models::{AdminKeys, IndexListResponse, IndexSummary, ServiceError, ServiceErrorDetail};
pub use throttle::RateLimiter;
