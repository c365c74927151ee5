//! Data models for search service and management plane responses.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access. Index definitions themselves are never modelled:
//! they travel as raw JSON text from disk to the service.

pub mod admin_keys;
pub mod common;
pub mod indexes;

pub use admin_keys::AdminKeys;
pub use common::{ServiceError, ServiceErrorDetail};
pub use indexes::{IndexListResponse, IndexSummary};
