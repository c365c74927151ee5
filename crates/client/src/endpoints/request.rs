//! Request execution and status handling.
//!
//! Every endpoint expects exactly one success status (200 list, 201 create,
//! 204 delete). Anything else becomes `ClientError::ApiError` carrying the
//! service's own error message when the body has the usual error envelope.
//! There is no retry here: throttling is the caller's concern.

use reqwest::{RequestBuilder, Response, StatusCode};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::common::error_message_from_body;

/// Headers that carry a request id worth quoting in error reports.
const REQUEST_ID_HEADERS: [&str; 2] = ["request-id", "x-ms-request-id"];

/// Sends a request and checks the response status.
///
/// # Errors
///
/// Returns `ClientError::HttpError` for transport failures and
/// `ClientError::ApiError` when the status differs from `expected`.
pub async fn send_request(
    builder: RequestBuilder,
    expected: StatusCode,
    endpoint: &str,
    method: &str,
) -> Result<Response> {
    let response = builder.send().await?;
    let status = response.status();

    debug!(
        endpoint = endpoint,
        method = method,
        status = status.as_u16(),
        "Received response"
    );

    if status == expected {
        return Ok(response);
    }

    Err(api_error(response, expected).await)
}

/// Convert an unexpected response into `ClientError::ApiError`.
async fn api_error(response: Response, expected: StatusCode) -> ClientError {
    let status = response.status();
    let url = response.url().to_string();
    let request_id = REQUEST_ID_HEADERS.iter().find_map(|name| {
        response
            .headers()
            .get(*name)
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string())
    });

    let message = if status.is_success() {
        format!(
            "unexpected status {} (expected {})",
            status.as_u16(),
            expected.as_u16()
        )
    } else {
        match response.text().await {
            Ok(body) => error_message_from_body(&body),
            Err(_) => "Could not read error response body".to_string(),
        }
    };

    ClientError::ApiError {
        status: status.as_u16(),
        url,
        message,
        request_id,
    }
}
