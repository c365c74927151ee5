//! Error types for the search service client.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during search service operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network-level failure talking to the service.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success status returned by the service.
    #[error("API error ({status}) at {url}: {message}{}", .request_id.as_ref().map(|id| format!(" [Request ID: {id}]")).unwrap_or_default())]
    ApiError {
        status: u16,
        url: String,
        message: String,
        request_id: Option<String>,
    },

    /// The admin key could not be obtained from the management plane.
    #[error("Credential resolution failed: {0}")]
    CredentialResolution(String),

    /// Invalid response format from the service.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Walking the index folder failed.
    #[error("Failed to scan {}: {message}", path.display())]
    Discovery { path: PathBuf, message: String },

    /// An index definition file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ClientError {
    /// Check if this error is a transport failure rather than a service response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::HttpError(_))
    }

    /// HTTP status of an API error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error indicates an authentication or authorization failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::CredentialResolution(_) | Self::ApiError {
                status: 401 | 403,
                ..
            }
        )
    }

    /// Best-available detail for per-item reporting.
    ///
    /// API errors report the service's own message; everything else uses Display.
    pub fn detail(&self) -> String {
        match self {
            Self::ApiError {
                status, message, ..
            } => format!("{} ({})", message, status),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16) -> ClientError {
        ClientError::ApiError {
            status,
            url: "https://svc.search.windows.net/indexes/a".to_string(),
            message: "boom".to_string(),
            request_id: None,
        }
    }

    #[test]
    fn test_error_is_auth_error() {
        assert!(api_error(401).is_auth_error());
        assert!(api_error(403).is_auth_error());
        assert!(ClientError::CredentialResolution("no keys".to_string()).is_auth_error());
        assert!(!api_error(500).is_auth_error());
    }

    #[test]
    fn test_status_only_for_api_errors() {
        assert_eq!(api_error(404).status(), Some(404));
        assert_eq!(ClientError::InvalidUrl("x".to_string()).status(), None);
        assert!(!api_error(500).is_transport());
    }

    #[test]
    fn test_display_includes_request_id() {
        let err = ClientError::ApiError {
            status: 400,
            url: "https://svc/indexes".to_string(),
            message: "Invalid index definition".to_string(),
            request_id: Some("abc-123".to_string()),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("API error (400)"));
        assert!(rendered.contains("[Request ID: abc-123]"));
    }

    #[test]
    fn test_detail_prefers_service_message() {
        assert_eq!(api_error(500).detail(), "boom (500)");
    }
}
