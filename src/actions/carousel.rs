//! Carousel recommendation action.

use crate::actions::{encode_params, soften};
use crate::clients::{HttpClient, HttpMethod, HttpResponse};
use crate::config::AisearchConfig;
use crate::error::Error;
use crate::models::Carousel;

/// Parameters for the carousel recommendation endpoint.
///
/// The carousel is scoped by where it is shown: a category page sets the
/// category fields, a brand page the brand fields. Zero ids and empty
/// strings are omitted from the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarouselParams {
    user_id: String,
    category_id: u64,
    category_remote_key: String,
    brand_id: u64,
    brand_remote_key: String,
    brand_name: String,
    segments: String,
    negative_segments: String,
}

impl CarouselParams {
    /// Creates empty parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the user identifier (required by the endpoint).
    #[must_use]
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Scopes the carousel to a category id.
    #[must_use]
    pub const fn category_id(mut self, category_id: u64) -> Self {
        self.category_id = category_id;
        self
    }

    /// Scopes the carousel to a category by its external key.
    #[must_use]
    pub fn category_remote_key(mut self, key: impl Into<String>) -> Self {
        self.category_remote_key = key.into();
        self
    }

    /// Scopes the carousel to a brand id.
    #[must_use]
    pub const fn brand_id(mut self, brand_id: u64) -> Self {
        self.brand_id = brand_id;
        self
    }

    /// Scopes the carousel to a brand by its external key.
    #[must_use]
    pub fn brand_remote_key(mut self, key: impl Into<String>) -> Self {
        self.brand_remote_key = key.into();
        self
    }

    /// Scopes the carousel to a brand by name.
    #[must_use]
    pub fn brand_name(mut self, brand_name: impl Into<String>) -> Self {
        self.brand_name = brand_name.into();
        self
    }

    /// Sets the segments parameter.
    #[must_use]
    pub fn segments(mut self, segments: impl Into<String>) -> Self {
        self.segments = segments.into();
        self
    }

    /// Sets the negative segments parameter.
    #[must_use]
    pub fn negative_segments(mut self, negative_segments: impl Into<String>) -> Self {
        self.negative_segments = negative_segments.into();
        self
    }

    pub(crate) fn to_params(&self, config: &AisearchConfig) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("client-token", config.client_token().as_ref().to_string()),
            ("user_id", self.user_id.clone()),
        ];
        if !self.segments.is_empty() {
            params.push(("segments", self.segments.clone()));
        }
        if !self.negative_segments.is_empty() {
            params.push(("negative_segments", self.negative_segments.clone()));
        }
        if self.category_id != 0 {
            params.push(("category_id", self.category_id.to_string()));
        }
        if !self.category_remote_key.is_empty() {
            params.push(("category_remote_key", self.category_remote_key.clone()));
        }
        if self.brand_id != 0 {
            params.push(("brand_id", self.brand_id.to_string()));
        }
        if !self.brand_remote_key.is_empty() {
            params.push(("brand_remote_key", self.brand_remote_key.clone()));
        }
        if !self.brand_name.is_empty() {
            params.push(("brand_name", self.brand_name.clone()));
        }
        params
    }
}

/// Action for the `/recommendation/carousel` endpoint.
#[derive(Debug)]
pub struct CarouselAction {
    config: AisearchConfig,
    client: HttpClient,
    params: CarouselParams,
    response: Option<HttpResponse>,
    result: Option<Carousel>,
}

impl CarouselAction {
    /// Creates the action.
    #[must_use]
    pub fn new(config: AisearchConfig, params: CarouselParams) -> Self {
        Self {
            config,
            client: HttpClient::new(),
            params,
            response: None,
            result: None,
        }
    }

    /// Returns the parameters this action was built with.
    #[must_use]
    pub const fn params(&self) -> &CarouselParams {
        &self.params
    }

    /// Returns the last response envelope, if a fetch has happened.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponse> {
        self.response.as_ref()
    }

    /// Returns the last hydrated result; `None` after a soft failure.
    #[must_use]
    pub const fn result(&self) -> Option<&Carousel> {
        self.result.as_ref()
    }

    fn build_url(&self) -> String {
        format!(
            "{}/recommendation/carousel?{}",
            self.config.base_url(),
            encode_params(&self.params.to_params(&self.config))
        )
    }

    /// Fetches the carousel.
    ///
    /// A 200 answer hydrates into [`Carousel`]; any other status clears the
    /// result and keeps the envelope (soft failure).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on transport failure or when a 200 payload does not
    /// match the expected shape.
    pub async fn get(&mut self) -> Result<Option<&Carousel>, Error> {
        let url = self.build_url();
        let response = soften(self.client.request(&url, HttpMethod::Get, None).await)?;

        self.response = Some(response);
        self.result = None;
        if let Some(response) = self.response.as_ref() {
            if response.code == 200 {
                if let Some(payload) = response.payload.as_ref() {
                    self.result = Some(Carousel::from_value(payload)?);
                }
            }
        }
        Ok(self.result.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClientToken, SiteId};

    fn config() -> AisearchConfig {
        AisearchConfig::builder()
            .site_id(SiteId::new(42).unwrap())
            .client_token(ClientToken::new("tok").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_zero_ids_are_omitted() {
        let params = CarouselParams::new().user_id("visitor-1").to_params(&config());
        assert!(!params.iter().any(|(key, _)| *key == "category_id"));
        assert!(!params.iter().any(|(key, _)| *key == "brand_id"));
    }

    #[test]
    fn test_scoping_fields_appear_when_set() {
        let params = CarouselParams::new()
            .user_id("visitor-1")
            .category_id(12)
            .brand_name("Acme")
            .to_params(&config());
        assert!(params
            .iter()
            .any(|(key, value)| *key == "category_id" && value == "12"));
        assert!(params
            .iter()
            .any(|(key, value)| *key == "brand_name" && value == "Acme"));
    }

    #[test]
    fn test_build_url_targets_recommendation_carousel() {
        let action = CarouselAction::new(config(), CarouselParams::new().user_id("visitor-1"));
        let url = action.build_url();
        assert!(url.starts_with("https://api.aisearch.app/sites/42/v1/recommendation/carousel?"));
    }
}
