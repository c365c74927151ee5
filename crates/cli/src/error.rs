//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ConfigError` and `ClientError` variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-5 are reserved for specific error categories.
//! - Item failures under the `continue` policy never change the exit code.

use azsearch_client::ClientError;
use azsearch_config::ConfigError;
use thiserror::Error;

/// Structured exit codes for azsearch-deploy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed (possibly with tolerated item failures).
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Configuration error - missing or invalid settings, bad `.env` file.
    ///
    /// Scripts should fix the input and not retry.
    ConfigError = 2,

    /// Credential resolution or authentication failure (401/403).
    ///
    /// Scripts should refresh the API key or management token.
    AuthenticationFailed = 3,

    /// Connection error - network, timeout, or DNS failure.
    ///
    /// Scripts may retry later.
    ConnectionError = 4,

    /// The deployment finished with item failures the policy does not tolerate.
    DeploymentFailed = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::CredentialResolution(_) => ExitCode::AuthenticationFailed,
            ClientError::ApiError {
                status: 401 | 403, ..
            } => ExitCode::AuthenticationFailed,

            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,

            ClientError::Discovery { .. } => ExitCode::ConfigError,

            ClientError::ApiError { .. }
            | ClientError::InvalidResponse(_)
            | ClientError::Io { .. } => ExitCode::GeneralError,
        }
    }
}

/// Returned by `deploy` when the failure policy rejects the run.
#[derive(Debug, Error)]
#[error("deployment finished with {failures} failed operation(s){suffix}", suffix = stopped_early(.aborted))]
pub struct DeploymentFailed {
    pub failures: usize,
    pub aborted: bool,
}

fn stopped_early(aborted: &bool) -> &'static str {
    if *aborted { " (stopped early)" } else { "" }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error type is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if cause.downcast_ref::<DeploymentFailed>().is_some() {
                return ExitCode::DeploymentFailed;
            }
            if cause.downcast_ref::<ConfigError>().is_some() {
                return ExitCode::ConfigError;
            }
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
        }

        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::path::PathBuf;

    fn api_error(status: u16) -> ClientError {
        ClientError::ApiError {
            status,
            url: "https://svc.search.windows.net/indexes".to_string(),
            message: "boom".to_string(),
            request_id: None,
        }
    }

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::ConfigError.as_i32(), 2);
        assert_eq!(ExitCode::AuthenticationFailed.as_i32(), 3);
        assert_eq!(ExitCode::ConnectionError.as_i32(), 4);
        assert_eq!(ExitCode::DeploymentFailed.as_i32(), 5);
    }

    #[test]
    fn test_from_client_error_auth() {
        assert_eq!(ExitCode::from(&api_error(401)), ExitCode::AuthenticationFailed);
        assert_eq!(ExitCode::from(&api_error(403)), ExitCode::AuthenticationFailed);
        let err = ClientError::CredentialResolution("no keys".to_string());
        assert_eq!(ExitCode::from(&err), ExitCode::AuthenticationFailed);
    }

    #[test]
    fn test_from_client_error_other_status() {
        assert_eq!(ExitCode::from(&api_error(500)), ExitCode::GeneralError);
        assert_eq!(ExitCode::from(&api_error(404)), ExitCode::GeneralError);
    }

    #[test]
    fn test_from_client_error_discovery() {
        let err = ClientError::Discovery {
            path: PathBuf::from("/missing"),
            message: "No such file or directory".to_string(),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::ConfigError);
    }

    #[test]
    fn test_exit_code_ext_finds_wrapped_errors() {
        let err = anyhow::Error::new(api_error(401)).context("Failed to list indexes");
        assert_eq!(err.exit_code(), ExitCode::AuthenticationFailed);

        let err: anyhow::Result<()> =
            Err(ConfigError::MissingServiceName).context("Failed to build configuration");
        assert_eq!(err.unwrap_err().exit_code(), ExitCode::ConfigError);

        let err = anyhow::Error::new(DeploymentFailed {
            failures: 2,
            aborted: false,
        });
        assert_eq!(err.exit_code(), ExitCode::DeploymentFailed);
    }

    #[test]
    fn test_unknown_error_is_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }

    #[test]
    fn test_deployment_failed_display() {
        let err = DeploymentFailed {
            failures: 1,
            aborted: true,
        };
        assert_eq!(
            err.to_string(),
            "deployment finished with 1 failed operation(s) (stopped early)"
        );
    }
}
