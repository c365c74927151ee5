//! Common types shared across API models.
//!
//! The search service and the management plane both report failures as
//! `{"error": {"code": "...", "message": "..."}}`. Every field is optional
//! so that unexpected shapes never break error reporting.

use serde::Deserialize;

/// Error envelope returned with non-success responses.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ServiceError {
    #[serde(default)]
    pub error: Option<ServiceErrorDetail>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ServiceErrorDetail {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ServiceError {
    /// Human-readable message, or `None` when the envelope carries nothing useful.
    pub fn summary(&self) -> Option<String> {
        let detail = self.error.as_ref()?;
        let message = detail
            .message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty());
        let code = detail
            .code
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());

        match (code, message) {
            (Some(code), Some(message)) => Some(format!("{}: {}", code, message)),
            (None, Some(message)) => Some(message.to_string()),
            (Some(code), None) => Some(code.to_string()),
            (None, None) => None,
        }
    }
}

/// Extract the best-available message from an error response body.
///
/// Falls back to the raw body when it is not a recognizable error envelope.
pub fn error_message_from_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "(empty response body)".to_string();
    }

    serde_json::from_str::<ServiceError>(trimmed)
        .ok()
        .and_then(|e| e.summary())
        .unwrap_or_else(|| trimmed.to_string())
}
