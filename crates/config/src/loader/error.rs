//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all pre-flight configuration failures.
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, paths, etc.).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.
//! - Secret values (API keys, tokens) never appear in any message.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
///
/// Every variant is fatal: the deployment stops before any network call.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Search service name is required. Set AZSEARCH_SERVICE_NAME or pass --service-name.")]
    MissingServiceName,

    #[error("Either an API key or a resource group is required (--api-key or --resource-group)")]
    MissingCredentials,

    #[error("An API key and a resource group were both provided; use only one of them")]
    ConflictingCredentials,

    #[error("A subscription id is required to look up admin keys by resource group")]
    MissingSubscriptionId,

    #[error("A management access token is required to look up admin keys by resource group")]
    MissingManagementToken,

    #[error("Index folder is required. Set AZSEARCH_INDEX_FOLDER or pass --index-folder.")]
    MissingIndexFolder,

    #[error("Index folder does not exist: {}", path.display())]
    IndexFolderNotFound { path: PathBuf },

    #[error("Index folder is not a directory: {}", path.display())]
    IndexFolderNotDirectory { path: PathBuf },

    #[error("invalid max call count: {message}")]
    InvalidMaxCallCount { message: String },

    #[error("invalid timeout: {message}")]
    InvalidTimeout { message: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
