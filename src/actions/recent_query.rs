//! Recent query deletion action.

use serde_json::json;

use crate::actions::{encode_params, soften};
use crate::clients::{HttpClient, HttpMethod, HttpResponse};
use crate::config::AisearchConfig;
use crate::error::Error;

/// Parameters for deleting one entry from a user's recent queries.
///
/// The query being deleted travels in the DELETE request body, not the query
/// string; the URL carries only the identity parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentQueryDeleteParams {
    query: String,
    user_id: String,
}

impl RecentQueryDeleteParams {
    /// Creates empty parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the query string to delete.
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Sets the user whose recent list is being edited.
    #[must_use]
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub(crate) fn to_params(&self, config: &AisearchConfig) -> Vec<(&'static str, String)> {
        vec![
            ("client-token", config.client_token().as_ref().to_string()),
            ("user_id", self.user_id.clone()),
        ]
    }
}

/// Action for `DELETE /search/query/recent`.
#[derive(Debug)]
pub struct RecentQueryDeleteAction {
    config: AisearchConfig,
    client: HttpClient,
    params: RecentQueryDeleteParams,
    response: Option<HttpResponse>,
}

impl RecentQueryDeleteAction {
    /// Creates the action.
    #[must_use]
    pub fn new(config: AisearchConfig, params: RecentQueryDeleteParams) -> Self {
        Self {
            config,
            client: HttpClient::new(),
            params,
            response: None,
        }
    }

    /// Returns the parameters this action was built with.
    #[must_use]
    pub const fn params(&self) -> &RecentQueryDeleteParams {
        &self.params
    }

    /// Returns the last response envelope, if the delete has run.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponse> {
        self.response.as_ref()
    }

    fn build_url(&self) -> String {
        format!(
            "{}/search/query/recent?{}",
            self.config.base_url(),
            encode_params(&self.params.to_params(&self.config))
        )
    }

    /// Deletes the recent query.
    ///
    /// Returns `true` only for a `204 No Content` answer. Any other status
    /// is a plain `false` with the envelope retained, never an error from
    /// the status alone.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on transport failure (timeout, connection error, or
    /// an undecodable response body).
    pub async fn delete(&mut self) -> Result<bool, Error> {
        let url = self.build_url();
        let body = json!({ "query": self.params.query });
        let response = soften(
            self.client
                .request(&url, HttpMethod::Delete, Some(&body))
                .await,
        )?;

        self.response = Some(response);
        Ok(self
            .response
            .as_ref()
            .is_some_and(|response| response.code == 204))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClientToken, SiteId};

    #[test]
    fn test_build_url_carries_identity_but_not_the_query() {
        let config = AisearchConfig::builder()
            .site_id(SiteId::new(42).unwrap())
            .client_token(ClientToken::new("tok").unwrap())
            .build()
            .unwrap();
        let action = RecentQueryDeleteAction::new(
            config,
            RecentQueryDeleteParams::new()
                .user_id("visitor-1")
                .query("boots"),
        );
        let url = action.build_url();
        assert!(url.starts_with("https://api.aisearch.app/sites/42/v1/search/query/recent?"));
        assert!(url.contains("user_id=visitor-1"));
        assert!(!url.contains("boots"));
    }
}
