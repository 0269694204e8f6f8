//! Error types for the Aisearch API SDK.
//!
//! This module contains the configuration error type and the top-level
//! [`Error`] that action methods return.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Action methods return `Result<_, Error>`, where the
//! variants distinguish transport failures from malformed success payloads.
//!
//! # Example
//!
//! ```rust
//! use aisearch_api::{ClientToken, ConfigError};
//!
//! let result = ClientToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientToken)));
//! ```

use thiserror::Error;

use crate::clients::HttpError;
use crate::models::HydrationError;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Client token cannot be empty.
    #[error("Client token cannot be empty. Please provide a valid Aisearch client token.")]
    EmptyClientToken,

    /// Site id must be a positive integer.
    #[error("Invalid site id. The site id must be a positive integer.")]
    InvalidSiteId,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// API URL is invalid.
    #[error("Invalid API URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.aisearch.app').")]
    InvalidApiUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}

/// Errors that action methods can return.
///
/// Hard transport failures (timeouts, connection errors, undecodable bodies)
/// surface as [`Error::Http`]. A successful response whose payload does not
/// match the expected model shape surfaces as [`Error::Hydration`]. Non-2xx
/// server answers are not an `Error` at all for read operations; they leave
/// the model unset and keep the envelope on the action.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The request itself failed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response payload did not match the expected model shape.
    #[error(transparent)]
    Hydration(#[from] HydrationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_client_token_error_message() {
        let error = ConfigError::EmptyClientToken;
        let message = error.to_string();
        assert!(message.contains("Client token cannot be empty"));
        assert!(message.contains("valid Aisearch client token"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "site_id" };
        let message = error.to_string();
        assert!(message.contains("site_id"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::InvalidSiteId;
        let _: &dyn std::error::Error = &error;
    }

    #[test]
    fn test_error_wraps_http_and_hydration() {
        let http: Error = HttpError::Timeout.into();
        assert!(matches!(http, Error::Http(_)));

        let hydration: Error = HydrationError::MissingField { field: "id" }.into();
        assert_eq!(
            hydration.to_string(),
            "response is missing required field 'id'"
        );
    }
}
