//! Configuration type definitions for azsearch-deploy.
//!
//! Responsibilities:
//! - Define the search-service connection settings.
//! - Define the credential source (direct API key or resource-group lookup).
//! - Define deployment settings (index folder, throttling, failure policy).
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//! - Credential resolution or any network calls (see client crate).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.
//! - A `CredentialSource` always holds exactly one way to obtain the API key.

pub(crate) mod connection;
mod credentials;
mod deploy;

pub use connection::{Config, ConnectionConfig};
pub use credentials::CredentialSource;
pub use deploy::{DeployConfig, FailurePolicy, ThrottleConfig};
