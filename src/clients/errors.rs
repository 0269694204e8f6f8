//! Error types for HTTP client operations.

use thiserror::Error;

use crate::clients::http_client::REQUEST_TIMEOUT_SECS;
use crate::clients::http_response::HttpResponse;

/// Error raised when the server answers with a non-2xx status code.
///
/// The decoded [`HttpResponse`] envelope is retained so callers can inspect
/// the status code, error string, and any payload the server sent alongside
/// the failure.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{message}")]
pub struct RequestFailedError {
    /// The HTTP status code.
    pub code: u16,
    /// Human-readable failure description.
    pub message: String,
    /// The full response envelope.
    pub response: HttpResponse,
}

/// Errors that can occur during an HTTP request.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HttpError {
    /// The request exceeded the client-side deadline.
    #[error("request timed out after {REQUEST_TIMEOUT_SECS} seconds")]
    Timeout,

    /// The request could not be sent or the connection failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// The request body could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encoding(String),

    /// The response body was not valid JSON.
    #[error("failed to decode response body: {0}")]
    Decoding(String),

    /// The server answered with a non-2xx status code.
    #[error(transparent)]
    RequestFailed(#[from] RequestFailedError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message_names_the_deadline() {
        assert_eq!(
            HttpError::Timeout.to_string(),
            "request timed out after 10 seconds"
        );
    }

    #[test]
    fn test_request_failed_message_passes_through() {
        let error = HttpError::from(RequestFailedError {
            code: 403,
            message: "Request failed with HTTP status code 403. Error: site disabled".to_string(),
            response: HttpResponse::new(None, 403, Some("site disabled".to_string())),
        });
        assert_eq!(
            error.to_string(),
            "Request failed with HTTP status code 403. Error: site disabled"
        );
    }
}
