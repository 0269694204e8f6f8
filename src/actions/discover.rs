//! Discover recommendation action with cursor pagination.

use crate::actions::{encode_params, soften};
use crate::clients::{HttpClient, HttpMethod, HttpResponse};
use crate::config::AisearchConfig;
use crate::error::Error;
use crate::models::Discover;

/// Parameters for the discover recommendation endpoint.
///
/// There is no `after` field here: the continuation cursor is server-issued
/// state owned by [`DiscoverAction`], not a caller-settable parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverParams {
    user_id: String,
    limit: u32,
    segments: String,
    negative_segments: String,
}

impl Default for DiscoverParams {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            limit: 30,
            segments: String::new(),
            negative_segments: String::new(),
        }
    }
}

impl DiscoverParams {
    /// Creates parameters with the default limit of 30.
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

    /// Sets the page size.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
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
        if self.limit != 0 {
            params.push(("limit", self.limit.to_string()));
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

/// Action for the `/recommendation/discover` endpoint, paginated by cursor.
///
/// Pagination is continuation-based: the hydrated result carries a complete
/// server-issued next-request URL which the action stores and later uses
/// verbatim instead of building a fresh query string. This asymmetry with
/// the page-number protocol of [`crate::SearchQueryAction`] is part of the
/// API contract, not an accident.
#[derive(Debug)]
pub struct DiscoverAction {
    config: AisearchConfig,
    client: HttpClient,
    params: DiscoverParams,
    after: String,
    response: Option<HttpResponse>,
    result: Option<Discover>,
}

impl DiscoverAction {
    /// Creates the action; an empty cursor means "first page".
    #[must_use]
    pub fn new(config: AisearchConfig, params: DiscoverParams) -> Self {
        Self {
            config,
            client: HttpClient::new(),
            params,
            after: String::new(),
            response: None,
            result: None,
        }
    }

    /// Returns the parameters this action was built with.
    #[must_use]
    pub const fn params(&self) -> &DiscoverParams {
        &self.params
    }

    /// Returns the current continuation cursor; empty means "first page".
    #[must_use]
    pub fn after(&self) -> &str {
        &self.after
    }

    /// Returns the last response envelope, if a fetch has happened.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponse> {
        self.response.as_ref()
    }

    /// Returns the last hydrated result; `None` after a soft failure.
    #[must_use]
    pub const fn result(&self) -> Option<&Discover> {
        self.result.as_ref()
    }

    fn build_url(&self) -> String {
        format!(
            "{}/recommendation/discover?{}",
            self.config.base_url(),
            encode_params(&self.params.to_params(&self.config))
        )
    }

    /// Fetches the current page.
    ///
    /// A non-empty cursor is the literal request URL; otherwise the URL is
    /// built from the parameters. A 200 answer hydrates into [`Discover`];
    /// any other status clears the result and keeps the envelope (soft
    /// failure).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on transport failure or when a 200 payload does not
    /// match the expected shape.
    pub async fn get(&mut self) -> Result<Option<&Discover>, Error> {
        let url = if self.after.is_empty() {
            self.build_url()
        } else {
            self.after.clone()
        };
        let response = soften(self.client.request(&url, HttpMethod::Get, None).await)?;

        self.response = Some(response);
        self.result = None;
        if let Some(response) = self.response.as_ref() {
            if response.code == 200 {
                if let Some(payload) = response.payload.as_ref() {
                    self.result = Some(Discover::from_value(payload)?);
                }
            }
        }
        Ok(self.result.as_ref())
    }

    /// Clears the cursor and fetches the first page.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on transport failure or a malformed 200 payload.
    pub async fn first(&mut self) -> Result<Option<&Discover>, Error> {
        self.after.clear();
        self.get().await
    }

    /// Returns `true` when the last result's cursor announces another page.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.result
            .as_ref()
            .and_then(|result| result.page.as_ref())
            .is_some_and(|page| page.has_next)
    }

    /// Adopts the cursor's continuation URL and fetches, or returns
    /// `Ok(None)` without issuing a request when no further page exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on transport failure or a malformed 200 payload.
    pub async fn next(&mut self) -> Result<Option<&Discover>, Error> {
        let Some(after) = self
            .result
            .as_ref()
            .and_then(|result| result.page.as_ref())
            .filter(|page| page.has_next)
            .map(|page| page.after.clone())
        else {
            return Ok(None);
        };
        self.after = after;
        self.get().await
    }
}
