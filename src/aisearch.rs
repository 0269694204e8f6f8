//! The SDK entry point.

use crate::actions::{
    CarouselAction, CarouselParams, DiscoverAction, DiscoverParams, RecentQueryDeleteAction,
    RecentQueryDeleteParams, SearchQueryAction, SearchQueryParams, SearchRecommendationAction,
    SearchRecommendationParams, SettingsAction,
};
use crate::config::AisearchConfig;

/// Main SDK client for the Aisearch API.
///
/// `Aisearch` holds the configuration and hands out one action per endpoint;
/// each action carries its own copy of the configuration, so actions are
/// independent and may run concurrently.
///
/// # Example
///
/// ```rust,ignore
/// use aisearch_api::{Aisearch, AisearchConfig, ClientToken, SearchQueryParams, SiteId};
///
/// let config = AisearchConfig::builder()
///     .site_id(SiteId::new(42)?)
///     .client_token(ClientToken::new("my-token")?)
///     .build()?;
/// let aisearch = Aisearch::new(config);
///
/// let mut search = aisearch.search_query(
///     SearchQueryParams::new().user_id("visitor-1").query("boots"),
/// );
/// if let Some(result) = search.first().await? {
///     println!("{} products", result.count);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Aisearch {
    config: AisearchConfig,
}

impl Aisearch {
    /// Creates the SDK client from a validated configuration.
    #[must_use]
    pub const fn new(config: AisearchConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &AisearchConfig {
        &self.config
    }

    /// Creates a search query action.
    #[must_use]
    pub fn search_query(&self, params: SearchQueryParams) -> SearchQueryAction {
        SearchQueryAction::new(self.config.clone(), params)
    }

    /// Creates a search recommendation action.
    #[must_use]
    pub fn search_recommendation(
        &self,
        params: SearchRecommendationParams,
    ) -> SearchRecommendationAction {
        SearchRecommendationAction::new(self.config.clone(), params)
    }

    /// Creates a carousel recommendation action.
    #[must_use]
    pub fn carousel(&self, params: CarouselParams) -> CarouselAction {
        CarouselAction::new(self.config.clone(), params)
    }

    /// Creates a discover recommendation action.
    #[must_use]
    pub fn discover(&self, params: DiscoverParams) -> DiscoverAction {
        DiscoverAction::new(self.config.clone(), params)
    }

    /// Creates a settings action.
    #[must_use]
    pub fn settings(&self) -> SettingsAction {
        SettingsAction::new(self.config.clone())
    }

    /// Creates a recent query deletion action.
    #[must_use]
    pub fn delete_recent_query(&self, params: RecentQueryDeleteParams) -> RecentQueryDeleteAction {
        RecentQueryDeleteAction::new(self.config.clone(), params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClientToken, SiteId};

    #[test]
    fn test_actions_share_the_configuration() {
        let config = AisearchConfig::builder()
            .site_id(SiteId::new(42).unwrap())
            .client_token(ClientToken::new("tok").unwrap())
            .build()
            .unwrap();
        let aisearch = Aisearch::new(config);

        assert_eq!(aisearch.config().site_id().get(), 42);
        let action = aisearch.search_query(SearchQueryParams::new());
        assert_eq!(action.page(), 1);
    }
}
