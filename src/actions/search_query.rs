//! Search query action with offset pagination.

use std::collections::BTreeMap;
use std::fmt;

use crate::actions::{encode_params, soften};
use crate::clients::{HttpClient, HttpMethod, HttpResponse};
use crate::config::AisearchConfig;
use crate::error::Error;
use crate::models::SearchResult;

/// Sort orders accepted by the search query endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOption {
    /// Relevance order, the server default.
    #[default]
    Relevance,
    /// Ascending price.
    PriceAsc,
    /// Descending price.
    PriceDesc,
    /// Ascending name.
    NameAsc,
    /// Descending name.
    NameDesc,
    /// Oldest first.
    CreatedAtAsc,
    /// Newest first.
    CreatedAtDesc,
}

impl SortOption {
    /// Returns the wire value; relevance is the empty string and is omitted
    /// from the query string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "",
            Self::PriceAsc => "price",
            Self::PriceDesc => "-price",
            Self::NameAsc => "name",
            Self::NameDesc => "-name",
            Self::CreatedAtAsc => "created_at",
            Self::CreatedAtDesc => "-created_at",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response sections the search query endpoint can expand inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expand {
    /// Full product records.
    Product,
    /// The filter block with facets and price range.
    Filter,
    /// Popular categories for the query.
    PopularCategories,
    /// The embedded recommendation bundle.
    Recommendation,
}

impl Expand {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Filter => "filter",
            Self::PopularCategories => "popularCategories",
            Self::Recommendation => "recommendation",
        }
    }

    /// All sections, the default expansion set.
    pub const ALL: [Self; 4] = [
        Self::Product,
        Self::Filter,
        Self::PopularCategories,
        Self::Recommendation,
    ];
}

/// Parameters for the search query endpoint.
///
/// Built with consuming setters; the resulting value is immutable and the
/// action uses it as-is for every fetch. Optional parameters are omitted
/// from the query string when empty (strings) or zero (numbers); required
/// parameters (`client-token`, `user_id`) are always present.
///
/// # Example
///
/// ```rust
/// use aisearch_api::{Expand, SearchQueryParams, SortOption};
///
/// let params = SearchQueryParams::new()
///     .user_id("visitor-1")
///     .query("red shoes")
///     .limit(10)
///     .sort(SortOption::PriceAsc)
///     .add_attribute(7, 71)
///     .add_attribute(7, 72);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQueryParams {
    query: String,
    user_id: String,
    limit: u32,
    sort: SortOption,
    expand: Vec<Expand>,
    attributes: BTreeMap<u64, Vec<u64>>,
    min_price: f64,
    max_price: f64,
    segments: String,
    negative_segments: String,
}

impl Default for SearchQueryParams {
    fn default() -> Self {
        Self {
            query: String::new(),
            user_id: String::new(),
            limit: 30,
            sort: SortOption::Relevance,
            expand: Expand::ALL.to_vec(),
            attributes: BTreeMap::new(),
            min_price: 0.0,
            max_price: 0.0,
            segments: String::new(),
            negative_segments: String::new(),
        }
    }
}

impl SearchQueryParams {
    /// Creates parameters with the defaults: limit 30, relevance sort, all
    /// response sections expanded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search query string.
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
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

    /// Sets the sort order.
    #[must_use]
    pub const fn sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Replaces the set of expanded response sections.
    #[must_use]
    pub fn expand(mut self, expand: impl Into<Vec<Expand>>) -> Self {
        self.expand = expand.into();
        self
    }

    /// Sets the minimum price filter; zero means unfiltered.
    #[must_use]
    pub const fn min_price(mut self, min_price: f64) -> Self {
        self.min_price = min_price;
        self
    }

    /// Sets the maximum price filter; zero means unfiltered.
    #[must_use]
    pub const fn max_price(mut self, max_price: f64) -> Self {
        self.max_price = max_price;
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

    /// Selects a filter attribute child under the given parent.
    ///
    /// Each parent's children form a set in insertion order: adding a child
    /// that is already selected is a silent no-op.
    #[must_use]
    pub fn add_attribute(mut self, parent_id: u64, child_id: u64) -> Self {
        let children = self.attributes.entry(parent_id).or_default();
        if !children.contains(&child_id) {
            children.push(child_id);
        }
        self
    }

    /// Deselects a filter attribute child; removing a parent's last child
    /// drops the parent entirely.
    #[must_use]
    pub fn remove_attribute(mut self, parent_id: u64, child_id: u64) -> Self {
        if let Some(children) = self.attributes.get_mut(&parent_id) {
            children.retain(|&id| id != child_id);
            if children.is_empty() {
                self.attributes.remove(&parent_id);
            }
        }
        self
    }

    /// Deselects every child of the given parent.
    #[must_use]
    pub fn remove_attribute_parent(mut self, parent_id: u64) -> Self {
        self.attributes.remove(&parent_id);
        self
    }

    /// Deselects all filter attributes.
    #[must_use]
    pub fn clear_attributes(mut self) -> Self {
        self.attributes.clear();
        self
    }

    /// Serializes the selections as `"<parent>:<c1>,<c2>"` joined by `"|"`,
    /// parents in ascending id order, children in insertion order.
    fn serialize_attributes(&self) -> String {
        self.attributes
            .iter()
            .map(|(parent_id, children)| {
                let joined = children
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                format!("{parent_id}:{joined}")
            })
            .collect::<Vec<_>>()
            .join("|")
    }

    /// Flattens the parameters for the given page into wire key/value pairs.
    pub(crate) fn to_params(
        &self,
        config: &AisearchConfig,
        page: i64,
    ) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("client-token", config.client_token().as_ref().to_string()),
            ("user_id", self.user_id.clone()),
        ];
        if !self.query.is_empty() {
            params.push(("query", self.query.clone()));
        }
        if !self.expand.is_empty() {
            let joined = self
                .expand
                .iter()
                .map(|e| e.as_str())
                .collect::<Vec<_>>()
                .join(",");
            params.push(("expand", joined));
        }
        if self.limit != 0 {
            params.push(("limit", self.limit.to_string()));
        }
        if page != 0 {
            params.push(("page", page.to_string()));
        }
        if !self.sort.as_str().is_empty() {
            params.push(("sort", self.sort.as_str().to_string()));
        }
        if !self.attributes.is_empty() {
            params.push(("attributes", self.serialize_attributes()));
        }
        if self.min_price != 0.0 {
            params.push(("min_price", self.min_price.to_string()));
        }
        if self.max_price != 0.0 {
            params.push(("max_price", self.max_price.to_string()));
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

/// Action for the `/search/query` endpoint, paginated by page number.
///
/// Pagination is offset-based: the hydrated result carries a 1-based `next`
/// page number which the action feeds back into a freshly built query
/// string. [`Self::next`] returns `Ok(None)` without touching the network
/// once the cursor is exhausted.
///
/// # Example
///
/// ```rust,ignore
/// let aisearch = Aisearch::new(config);
/// let mut action = aisearch.search_query(
///     SearchQueryParams::new().user_id("visitor-1").query("boots"),
/// );
///
/// action.first().await?;
/// while action.has_next() {
///     if action.next().await?.is_none() {
///         break;
///     }
/// }
/// ```
#[derive(Debug)]
pub struct SearchQueryAction {
    config: AisearchConfig,
    client: HttpClient,
    params: SearchQueryParams,
    page: i64,
    response: Option<HttpResponse>,
    result: Option<SearchResult>,
}

impl SearchQueryAction {
    /// Creates the action; the first fetch targets page 1.
    #[must_use]
    pub fn new(config: AisearchConfig, params: SearchQueryParams) -> Self {
        Self {
            config,
            client: HttpClient::new(),
            params,
            page: 1,
            response: None,
            result: None,
        }
    }

    /// Returns the parameters this action was built with.
    #[must_use]
    pub const fn params(&self) -> &SearchQueryParams {
        &self.params
    }

    /// Returns the current page number.
    #[must_use]
    pub const fn page(&self) -> i64 {
        self.page
    }

    /// Returns the last response envelope, if a fetch has happened.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponse> {
        self.response.as_ref()
    }

    /// Returns the last hydrated result; `None` after a soft failure.
    #[must_use]
    pub const fn result(&self) -> Option<&SearchResult> {
        self.result.as_ref()
    }

    fn build_url(&self) -> String {
        format!(
            "{}/search/query?{}",
            self.config.base_url(),
            encode_params(&self.params.to_params(&self.config, self.page))
        )
    }

    /// Fetches the current page.
    ///
    /// A 200 answer hydrates into [`SearchResult`]; any other status clears
    /// the result and keeps the envelope (soft failure).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on transport failure or when a 200 payload does not
    /// match the expected shape.
    pub async fn get(&mut self) -> Result<Option<&SearchResult>, Error> {
        let url = self.build_url();
        let response = soften(self.client.request(&url, HttpMethod::Get, None).await)?;

        self.response = Some(response);
        self.result = None;
        if let Some(response) = self.response.as_ref() {
            if response.code == 200 {
                if let Some(payload) = response.payload.as_ref() {
                    self.result = Some(SearchResult::from_value(payload)?);
                }
            }
        }
        Ok(self.result.as_ref())
    }

    /// Resets to page 1 and fetches.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on transport failure or a malformed 200 payload.
    pub async fn first(&mut self) -> Result<Option<&SearchResult>, Error> {
        self.page = 1;
        self.get().await
    }

    /// Returns `true` when the last result's page cursor points past the
    /// current page.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.result
            .as_ref()
            .and_then(|result| result.page.as_ref())
            .is_some_and(crate::models::Page::has_next)
    }

    /// Advances to the cursor's next page and fetches, or returns `Ok(None)`
    /// without issuing a request when no further page exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on transport failure or a malformed 200 payload.
    pub async fn next(&mut self) -> Result<Option<&SearchResult>, Error> {
        let Some(next) = self
            .result
            .as_ref()
            .and_then(|result| result.page.as_ref())
            .filter(|page| page.has_next())
            .map(|page| page.next)
        else {
            return Ok(None);
        };
        self.page = next;
        self.get().await
    }
}
