//! Search recommendation action.

use crate::actions::{encode_params, soften};
use crate::clients::{HttpClient, HttpMethod, HttpResponse};
use crate::config::AisearchConfig;
use crate::error::Error;
use crate::models::SearchRecommendation;

/// Parameters for the search recommendation endpoint.
///
/// `product-limit` caps how many products each recommendation block carries;
/// the server default of 5 is also the builder default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRecommendationParams {
    user_id: String,
    product_limit: u32,
    segments: String,
    negative_segments: String,
}

impl Default for SearchRecommendationParams {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            product_limit: 5,
            segments: String::new(),
            negative_segments: String::new(),
        }
    }
}

impl SearchRecommendationParams {
    /// Creates parameters with the default product limit of 5.
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

    /// Sets the per-block product limit.
    #[must_use]
    pub const fn product_limit(mut self, product_limit: u32) -> Self {
        self.product_limit = product_limit;
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
        if self.product_limit != 0 {
            params.push(("product-limit", self.product_limit.to_string()));
        }
        if !self.segments.is_empty() {
            params.push(("segments", self.segments.clone()));
        }
        if !self.negative_segments.is_empty() {
            params.push(("negative_segments", self.negative_segments.clone()));
        }
        params
    }
}

/// Action for the `/search/recommendation` endpoint.
#[derive(Debug)]
pub struct SearchRecommendationAction {
    config: AisearchConfig,
    client: HttpClient,
    params: SearchRecommendationParams,
    response: Option<HttpResponse>,
    result: Option<SearchRecommendation>,
}

impl SearchRecommendationAction {
    /// Creates the action.
    #[must_use]
    pub fn new(config: AisearchConfig, params: SearchRecommendationParams) -> Self {
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
    pub const fn params(&self) -> &SearchRecommendationParams {
        &self.params
    }

    /// Returns the last response envelope, if a fetch has happened.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponse> {
        self.response.as_ref()
    }

    /// Returns the last hydrated result; `None` after a soft failure.
    #[must_use]
    pub const fn result(&self) -> Option<&SearchRecommendation> {
        self.result.as_ref()
    }

    fn build_url(&self) -> String {
        format!(
            "{}/search/recommendation?{}",
            self.config.base_url(),
            encode_params(&self.params.to_params(&self.config))
        )
    }

    /// Fetches the recommendations.
    ///
    /// A 200 answer hydrates into [`SearchRecommendation`]; any other status
    /// clears the result and keeps the envelope (soft failure).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on transport failure or when a 200 payload does not
    /// match the expected shape.
    pub async fn get(&mut self) -> Result<Option<&SearchRecommendation>, Error> {
        let url = self.build_url();
        let response = soften(self.client.request(&url, HttpMethod::Get, None).await)?;

        self.response = Some(response);
        self.result = None;
        if let Some(response) = self.response.as_ref() {
            if response.code == 200 {
                if let Some(payload) = response.payload.as_ref() {
                    self.result = Some(SearchRecommendation::from_value(payload)?);
                }
            }
        }
        Ok(self.result.as_ref())
    }
}
