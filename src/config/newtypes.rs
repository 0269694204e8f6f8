//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around the two credentials every
//! request carries. Invalid values are rejected on construction with clear
//! error messages.

use crate::error::ConfigError;
use serde::Serialize;
use std::fmt;

/// A validated Aisearch site identifier.
///
/// The site id is a positive integer embedded in every request URL
/// (`/sites/{site_id}/v1/...`). Zero is rejected on construction so a
/// forgotten id cannot silently address a nonexistent site.
///
/// # Example
///
/// ```rust
/// use aisearch_api::SiteId;
///
/// let site = SiteId::new(42).unwrap();
/// assert_eq!(site.get(), 42);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SiteId(u64);

impl SiteId {
    /// Creates a new validated site id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSiteId`] if the id is zero.
    pub const fn new(id: u64) -> Result<Self, ConfigError> {
        if id == 0 {
            return Err(ConfigError::InvalidSiteId);
        }
        Ok(Self(id))
    }

    /// Returns the numeric site id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated Aisearch client token.
///
/// The token identifies the storefront integration and is sent as the
/// `client-token` query parameter on every request. Its value is masked in
/// debug output to keep it out of logs.
///
/// # Example
///
/// ```rust
/// use aisearch_api::ClientToken;
///
/// let token = ClientToken::new("my-client-token").unwrap();
/// assert_eq!(token.as_ref(), "my-client-token");
/// assert_eq!(format!("{token:?}"), "ClientToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct ClientToken(String);

impl ClientToken {
    /// Creates a new validated client token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyClientToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for ClientToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientToken(*****)")
    }
}
