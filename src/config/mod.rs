//! Configuration types for the Aisearch API SDK.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`AisearchConfig`]: The main configuration struct holding all SDK settings
//! - [`AisearchConfigBuilder`]: A builder for constructing [`AisearchConfig`] instances
//! - [`SiteId`]: A validated site identifier newtype
//! - [`ClientToken`]: A validated client token newtype with masked debug output
//!
//! # Example
//!
//! ```rust
//! use aisearch_api::{AisearchConfig, ClientToken, SiteId};
//!
//! let config = AisearchConfig::builder()
//!     .site_id(SiteId::new(42).unwrap())
//!     .client_token(ClientToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url(), "https://api.aisearch.app/sites/42/v1");
//! ```

mod newtypes;

pub use newtypes::{ClientToken, SiteId};

use crate::error::ConfigError;

/// The hosted Aisearch API origin, used when no override is configured.
pub const DEFAULT_API_URL: &str = "https://api.aisearch.app";

/// The API version segment appended to every base URL.
pub const API_VERSION: &str = "v1";

/// Configuration for the Aisearch API SDK.
///
/// This struct holds the site identity and credentials needed for SDK
/// operations, plus an optional API origin override for self-hosted or
/// staging deployments.
///
/// # Thread Safety
///
/// `AisearchConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct AisearchConfig {
    site_id: SiteId,
    client_token: ClientToken,
    api_url: String,
}

impl AisearchConfig {
    /// Creates a new builder for constructing an `AisearchConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use aisearch_api::{AisearchConfig, ClientToken, SiteId};
    ///
    /// let config = AisearchConfig::builder()
    ///     .site_id(SiteId::new(1).unwrap())
    ///     .client_token(ClientToken::new("token").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> AisearchConfigBuilder {
        AisearchConfigBuilder::new()
    }

    /// Returns the site id.
    #[must_use]
    pub const fn site_id(&self) -> SiteId {
        self.site_id
    }

    /// Returns the client token.
    #[must_use]
    pub const fn client_token(&self) -> &ClientToken {
        &self.client_token
    }

    /// Returns the configured API origin.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Returns the versioned base URL every endpoint path is appended to.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("{}/sites/{}/{API_VERSION}", self.api_url, self.site_id)
    }
}

// Verify AisearchConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AisearchConfig>();
};

/// Builder for constructing [`AisearchConfig`] instances.
///
/// Required fields are `site_id` and `client_token`; `api_url` defaults to
/// the hosted service origin.
///
/// # Example
///
/// ```rust
/// use aisearch_api::{AisearchConfig, ClientToken, SiteId};
///
/// let config = AisearchConfig::builder()
///     .site_id(SiteId::new(1).unwrap())
///     .client_token(ClientToken::new("token").unwrap())
///     .api_url("https://staging.aisearch.app")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct AisearchConfigBuilder {
    site_id: Option<SiteId>,
    client_token: Option<ClientToken>,
    api_url: Option<String>,
}

impl AisearchConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the site id (required).
    #[must_use]
    pub const fn site_id(mut self, site_id: SiteId) -> Self {
        self.site_id = Some(site_id);
        self
    }

    /// Sets the client token (required).
    #[must_use]
    pub fn client_token(mut self, token: ClientToken) -> Self {
        self.client_token = Some(token);
        self
    }

    /// Overrides the API origin, e.g. for a staging deployment.
    ///
    /// A trailing `/` is trimmed so base URL construction never doubles the
    /// separator. The value is validated in [`Self::build`].
    #[must_use]
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Builds the [`AisearchConfig`], validating that required fields are
    /// set and that any API origin override is an http(s) URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `site_id` or
    /// `client_token` are not set, and [`ConfigError::InvalidApiUrl`] if the
    /// origin override carries no http(s) scheme.
    pub fn build(self) -> Result<AisearchConfig, ConfigError> {
        let site_id = self
            .site_id
            .ok_or(ConfigError::MissingRequiredField { field: "site_id" })?;
        let client_token = self
            .client_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "client_token",
            })?;

        let api_url = match self.api_url {
            None => DEFAULT_API_URL.to_string(),
            Some(url) => {
                let trimmed = url.trim_end_matches('/');
                if !trimmed.starts_with("https://") && !trimmed.starts_with("http://") {
                    return Err(ConfigError::InvalidApiUrl { url });
                }
                trimmed.to_string()
            }
        };

        Ok(AisearchConfig {
            site_id,
            client_token,
            api_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> AisearchConfigBuilder {
        AisearchConfig::builder()
            .site_id(SiteId::new(42).unwrap())
            .client_token(ClientToken::new("token").unwrap())
    }

    #[test]
    fn test_builder_requires_site_id() {
        let result = AisearchConfig::builder()
            .client_token(ClientToken::new("token").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "site_id" })
        ));
    }

    #[test]
    fn test_builder_requires_client_token() {
        let result = AisearchConfig::builder()
            .site_id(SiteId::new(42).unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "client_token"
            })
        ));
    }

    #[test]
    fn test_base_url_uses_hosted_origin_by_default() {
        let config = builder().build().unwrap();
        assert_eq!(config.base_url(), "https://api.aisearch.app/sites/42/v1");
    }

    #[test]
    fn test_api_url_override_trims_trailing_slash() {
        let config = builder()
            .api_url("https://staging.aisearch.app/")
            .build()
            .unwrap();
        assert_eq!(config.api_url(), "https://staging.aisearch.app");
        assert_eq!(
            config.base_url(),
            "https://staging.aisearch.app/sites/42/v1"
        );
    }

    #[test]
    fn test_api_url_override_requires_http_scheme() {
        let result = builder().api_url("ftp://wrong").build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidApiUrl { .. })
        ));
    }
}
