//! Configuration management for azsearch-deploy.
//!
//! This crate provides types and loaders for the search-service connection,
//! the credential source, and deployment throttling settings. Values come
//! from `.env` files, environment variables, and command-line overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{
    Config, ConnectionConfig, CredentialSource, DeployConfig, FailurePolicy, ThrottleConfig,
};
