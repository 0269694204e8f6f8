//! The response envelope shared by every Aisearch endpoint.

use serde::Serialize;
use serde_json::Value;

/// A decoded Aisearch response envelope.
///
/// Every endpoint answers with the same three-part shape: an optional JSON
/// payload, the HTTP status code, and an optional error string. The envelope
/// is kept on errors too, so callers can always inspect what the server
/// actually said.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HttpResponse {
    /// The decoded response body; `None` when the body was empty.
    pub payload: Option<Value>,
    /// The HTTP status code.
    pub code: u16,
    /// The server's error string, when it sent one.
    pub error: Option<String>,
}

impl HttpResponse {
    /// Creates a new response envelope.
    #[must_use]
    pub const fn new(payload: Option<Value>, code: u16, error: Option<String>) -> Self {
        Self {
            payload,
            code,
            error,
        }
    }

    /// Returns `true` when the status code is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_success_covers_whole_2xx_range() {
        for code in [200, 201, 204, 299] {
            assert!(HttpResponse::new(None, code, None).is_success());
        }
        for code in [199, 300, 404, 500] {
            assert!(!HttpResponse::new(None, code, None).is_success());
        }
    }

    #[test]
    fn test_envelope_keeps_payload_and_error() {
        let response = HttpResponse::new(
            Some(json!({"error": "site disabled"})),
            403,
            Some("site disabled".to_string()),
        );
        assert!(!response.is_success());
        assert_eq!(response.error.as_deref(), Some("site disabled"));
        assert_eq!(response.payload, Some(json!({"error": "site disabled"})));
    }
}
