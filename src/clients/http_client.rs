//! HTTP client for Aisearch API communication.
//!
//! This module provides the [`HttpClient`] type that every action goes
//! through. It owns the request deadline, the JSON encode/decode steps, and
//! the translation of non-2xx answers into [`HttpError::RequestFailed`]
//! values that keep the decoded envelope.

use std::time::Duration;

use serde_json::Value;

use crate::clients::errors::{HttpError, RequestFailedError};
use crate::clients::http_response::HttpResponse;

/// Client-side deadline applied to every request, in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP methods supported by the Aisearch API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET.
    Get,
    /// HTTP POST.
    Post,
    /// HTTP PUT.
    Put,
    /// HTTP PATCH.
    Patch,
    /// HTTP DELETE.
    Delete,
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        };
        write!(f, "{s}")
    }
}

fn is_empty_object(value: &Value) -> bool {
    value.as_object().is_some_and(serde_json::Map::is_empty)
}

/// HTTP client for making requests to the Aisearch API.
///
/// The client handles:
/// - A fixed 10 second deadline per request
/// - Default headers including User-Agent and Accept
/// - JSON body encoding and response decoding
/// - Envelope construction for success and failure responses
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// The User-Agent header sent with every request.
    user_agent: String,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new() -> Self {
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("Aisearch SDK v{SDK_VERSION} | Rust {rust_version}");

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, user_agent }
    }

    /// Returns the User-Agent header sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Sends a request to the given absolute URL and decodes the envelope.
    ///
    /// The body, when given, is sent as JSON; `GET` requests and empty JSON
    /// objects never reach the wire. An empty response body decodes to a
    /// `None` payload, which is how `204 No Content` answers arrive.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - The deadline elapses (`Timeout`)
    /// - The request cannot be sent (`Transport`)
    /// - The body cannot be serialized (`Encoding`)
    /// - The response body is not valid JSON (`Decoding`)
    /// - The server answers non-2xx (`RequestFailed`, envelope retained)
    pub async fn request(
        &self,
        url: &str,
        method: HttpMethod,
        body: Option<&Value>,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = match method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
            HttpMethod::Put => self.client.put(url),
            HttpMethod::Patch => self.client.patch(url),
            HttpMethod::Delete => self.client.delete(url),
        };

        builder = builder
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json");

        if method != HttpMethod::Get {
            if let Some(body) = body.filter(|b| !is_empty_object(b)) {
                let encoded = serde_json::to_string(body)
                    .map_err(|e| HttpError::Encoding(e.to_string()))?;
                builder = builder.body(encoded);
            }
        }

        tracing::debug!(%method, url, "sending request");

        let res = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Transport(e.to_string())
            }
        })?;

        let code = res.status().as_u16();
        let text = res.text().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Transport(e.to_string())
            }
        })?;

        let payload = if text.is_empty() {
            None
        } else {
            Some(
                serde_json::from_str::<Value>(&text)
                    .map_err(|e| HttpError::Decoding(e.to_string()))?,
            )
        };

        let error = payload
            .as_ref()
            .and_then(|p| p.get("error"))
            .filter(|v| !v.is_null())
            .map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            });

        let response = HttpResponse::new(payload, code, error);

        if response.is_success() {
            return Ok(response);
        }

        let message = response.error.as_ref().map_or_else(
            || format!("Request failed with HTTP status code {code}."),
            |err| format!("Request failed with HTTP status code {code}. Error: {err}"),
        );

        Err(HttpError::RequestFailed(RequestFailedError {
            code,
            message,
            response,
        }))
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new();
        assert!(client.user_agent().starts_with("Aisearch SDK v"));
        assert!(client.user_agent().contains("Rust"));
    }

    #[test]
    fn test_method_display_is_upper_case() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
