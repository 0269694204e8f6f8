//! Search result model and its recommendation bundle.
//!
//! [`SearchResult`] is the hydrated form of a `/search/query` response. The
//! optional sub-objects (`page`, `filter`, `recommendation`) are omitted from
//! the result when the raw field is absent or `null`, never populated with
//! empty defaults.

use serde::Serialize;
use serde_json::Value;

use super::attribute::{AttributeChild, AttributeParent};
use super::category::PopularCategory;
use super::coerce;
use super::filter::Filter;
use super::page::Page;
use super::product::Product;
use super::HydrationError;

/// A child attribute inside the relating block (no result count).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatingAttributeChild {
    /// The unique attribute identifier.
    pub id: u64,
    /// Lookup key into the owning parent.
    pub parent_id: u64,
    /// The attribute group this child belongs to.
    pub group_id: u64,
    /// Display order position.
    pub position: i64,
    /// The display name.
    pub name: String,
    /// The label shown in filter UIs.
    pub filter_label: String,
    /// Color code for swatch rendering, when applicable.
    pub color_code: String,
}

impl RelatingAttributeChild {
    /// Hydrates a relating child attribute from one JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`HydrationError`] when a required field is absent or `null`.
    pub fn from_value(value: &Value) -> Result<Self, HydrationError> {
        Ok(Self {
            id: coerce::uint(coerce::require(value, "id")?),
            parent_id: coerce::uint(coerce::require(value, "parent_id")?),
            group_id: coerce::uint(coerce::require(value, "group_id")?),
            position: coerce::int(coerce::require(value, "position")?),
            name: coerce::string(coerce::require(value, "name")?),
            filter_label: coerce::string(coerce::require(value, "filter_label")?),
            color_code: coerce::string(coerce::require(value, "color_code")?),
        })
    }
}

/// A parent attribute inside the relating block, owning its children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatingAttributeParent {
    /// The unique attribute identifier.
    pub id: u64,
    /// The display name.
    pub name: String,
    /// The label shown in filter UIs.
    pub filter_label: String,
    /// The filter widget type.
    pub filter_type: String,
    /// Whether the attribute appears in full search results.
    pub show_in_full_search: bool,
    /// Whether the attribute appears in recommendations.
    pub show_in_recommendation: bool,
    /// The title used when shown in recommendations.
    pub recommendation_title: String,
    /// Whether the attribute is a product option.
    pub is_option: bool,
    /// The child attributes, hydrated before the parent.
    pub children: Vec<RelatingAttributeChild>,
}

impl RelatingAttributeParent {
    /// Hydrates a relating parent attribute from one JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`HydrationError`] when a required field is absent or `null`,
    /// or when a child fails to hydrate.
    pub fn from_value(value: &Value) -> Result<Self, HydrationError> {
        let children = coerce::require_array(value, "children")?
            .iter()
            .map(RelatingAttributeChild::from_value)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: coerce::uint(coerce::require(value, "id")?),
            name: coerce::string(coerce::require(value, "name")?),
            filter_label: coerce::string(coerce::require(value, "filter_label")?),
            filter_type: coerce::string(coerce::require(value, "filter_type")?),
            show_in_full_search: coerce::boolean(coerce::require(value, "show_in_full_search")?),
            show_in_recommendation: coerce::boolean(coerce::require(
                value,
                "show_in_recommendation",
            )?),
            recommendation_title: coerce::string(coerce::require(value, "recommendation_title")?),
            is_option: coerce::boolean(coerce::require(value, "is_option")?),
            children,
        })
    }
}

/// A redirect rule attached to recommendation pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRedirect {
    /// The unique redirect identifier.
    pub id: u64,
    /// The display name.
    pub name: String,
    /// The target URL.
    pub url: String,
    /// Whether the redirect fires automatically.
    pub auto_redirect: bool,
    /// Display order position.
    pub position: i64,
    /// The redirect kind, from the API's `type` field.
    pub kind: String,
    /// Opaque detail payload, passed through untyped.
    pub detail: Value,
    /// Creation timestamp, as sent by the API.
    pub created_at: String,
    /// Last update timestamp, as sent by the API.
    pub updated_at: String,
}

impl PageRedirect {
    /// Hydrates a page redirect from one JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`HydrationError`] when a required field is absent or `null`.
    pub fn from_value(value: &Value) -> Result<Self, HydrationError> {
        Ok(Self {
            id: coerce::uint(coerce::require(value, "id")?),
            name: coerce::string(coerce::require(value, "name")?),
            url: coerce::string(coerce::require(value, "url")?),
            auto_redirect: coerce::boolean(coerce::require(value, "auto_redirect")?),
            position: coerce::int(coerce::require(value, "position")?),
            kind: coerce::string(coerce::require(value, "type")?),
            detail: coerce::opaque(value, "detail"),
            created_at: coerce::string(coerce::require(value, "created_at")?),
            updated_at: coerce::string(coerce::require(value, "updated_at")?),
        })
    }
}

/// The relating block: attributes and page redirects tied to the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Relating {
    /// Related filter attributes.
    pub attributes: Vec<RelatingAttributeParent>,
    /// Redirect rules matching the query.
    pub page_redirects: Vec<PageRedirect>,
}

/// The recommendation bundle embedded in a search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationBundle {
    /// Related attributes and redirects.
    pub relating: Relating,
    /// Autocomplete suggestions, passed through untyped.
    pub autocomplete: Vec<Value>,
}

impl RecommendationBundle {
    /// Hydrates the recommendation bundle from one JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`HydrationError`] when a required field is absent or `null`,
    /// or when a nested record fails to hydrate.
    pub fn from_value(value: &Value) -> Result<Self, HydrationError> {
        let relating_value = coerce::require(value, "relating")?;
        let attributes = coerce::require_array(relating_value, "attributes")?
            .iter()
            .map(RelatingAttributeParent::from_value)
            .collect::<Result<Vec<_>, _>>()?;
        let page_redirects = coerce::require_array(relating_value, "pageRedirects")?
            .iter()
            .map(PageRedirect::from_value)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            relating: Relating {
                attributes,
                page_redirects,
            },
            autocomplete: coerce::optional_array(value, "autocomplete").to_vec(),
        })
    }
}

/// The hydrated form of a `/search/query` response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    /// The response status string.
    pub status: String,
    /// Total number of matching products.
    pub count: i64,
    /// The matching products, variants hydrated first.
    pub products: Vec<Product>,
    /// Offset pagination cursor; absent when the server sent none.
    pub page: Option<Page>,
    /// Flat list of parent attributes for the result set.
    pub attribute_parents: Vec<AttributeParent>,
    /// Flat list of child attributes for the result set.
    pub attributes: Vec<AttributeChild>,
    /// The user's recent queries.
    pub recent: Vec<String>,
    /// The query string echoed by the server.
    pub query: String,
    /// Filter facets and selection state; absent when the server sent none.
    pub filter: Option<Filter>,
    /// Popular categories for the query.
    pub popular_categories: Vec<PopularCategory>,
    /// Embedded recommendations; absent when the server sent none.
    pub recommendation: Option<RecommendationBundle>,
}

impl SearchResult {
    /// Hydrates a search result from the decoded response payload.
    ///
    /// # Errors
    ///
    /// Returns [`HydrationError`] when a required field is absent or `null`,
    /// or when a nested record fails to hydrate.
    pub fn from_value(value: &Value) -> Result<Self, HydrationError> {
        Ok(Self {
            status: coerce::string(coerce::require(value, "status")?),
            count: coerce::int(coerce::require(value, "count")?),
            products: Product::from_values(coerce::require_array(value, "products")?)?,
            page: coerce::optional(value, "page")
                .map(Page::from_value)
                .transpose()?,
            attribute_parents: AttributeParent::from_values(coerce::require_array(
                value,
                "attribute_parents",
            )?)?,
            attributes: AttributeChild::from_values(coerce::require_array(value, "attributes")?)?,
            recent: coerce::string_list(value, "recent"),
            query: coerce::optional(value, "query").map_or_else(String::new, coerce::string),
            filter: coerce::optional(value, "filter")
                .map(Filter::from_value)
                .transpose()?,
            popular_categories: PopularCategory::from_values(coerce::require_array(
                value,
                "popularCategories",
            )?)?,
            recommendation: coerce::optional(value, "recommendation")
                .map(RecommendationBundle::from_value)
                .transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_result() -> Value {
        json!({
            "status": "ok",
            "count": 0,
            "products": [],
            "attribute_parents": [],
            "attributes": [],
            "recent": ["laptop", "shoes"],
            "query": "laptop",
            "popularCategories": []
        })
    }

    #[test]
    fn test_optional_sub_objects_are_omitted_not_defaulted() {
        let result = SearchResult::from_value(&minimal_result()).unwrap();
        assert!(result.page.is_none());
        assert!(result.filter.is_none());
        assert!(result.recommendation.is_none());
        assert_eq!(result.recent, vec!["laptop", "shoes"]);
    }

    #[test]
    fn test_null_page_is_treated_as_absent() {
        let mut value = minimal_result();
        value["page"] = Value::Null;
        let result = SearchResult::from_value(&value).unwrap();
        assert!(result.page.is_none());
    }

    #[test]
    fn test_page_hydrates_when_present() {
        let mut value = minimal_result();
        value["page"] = json!({"count": 90, "next": 2});
        let result = SearchResult::from_value(&value).unwrap();
        assert_eq!(result.page, Some(Page { count: 90, next: 2 }));
    }

    #[test]
    fn test_missing_products_fails_fast() {
        let mut value = minimal_result();
        value.as_object_mut().unwrap().remove("products");
        assert_eq!(
            SearchResult::from_value(&value),
            Err(HydrationError::MissingField { field: "products" })
        );
    }

    #[test]
    fn test_recommendation_bundle_hydrates_redirects() {
        let mut value = minimal_result();
        value["recommendation"] = json!({
            "relating": {
                "attributes": [],
                "pageRedirects": [{
                    "id": 1,
                    "name": "Sale",
                    "url": "https://shop/sale",
                    "auto_redirect": "1",
                    "position": 1,
                    "type": "campaign",
                    "detail": {"banner": "summer"},
                    "created_at": "2024-01-01T00:00:00Z",
                    "updated_at": "2024-02-01T00:00:00Z"
                }]
            },
            "autocomplete": ["sale shoes"]
        });
        let result = SearchResult::from_value(&value).unwrap();
        let bundle = result.recommendation.unwrap();
        assert_eq!(bundle.relating.page_redirects.len(), 1);
        assert!(bundle.relating.page_redirects[0].auto_redirect);
        assert_eq!(bundle.relating.page_redirects[0].kind, "campaign");
        assert_eq!(bundle.autocomplete, vec![json!("sale shoes")]);
    }

    #[test]
    fn test_hydration_is_idempotent() {
        let mut value = minimal_result();
        value["page"] = json!({"count": 90, "next": 2});
        let first = SearchResult::from_value(&value).unwrap();
        let second = SearchResult::from_value(&value).unwrap();
        assert_eq!(first, second);
    }
}
