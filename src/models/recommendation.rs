//! Recommendation response models.
//!
//! Three endpoints share these types: `/search/recommendation` hydrates
//! [`SearchRecommendation`], `/recommendation/carousel` hydrates
//! [`Carousel`], and `/recommendation/discover` hydrates [`Discover`].
//!
//! The call-to-action types ([`Cta`], [`CtaMessage`]) are shared with the
//! settings endpoint; the payloads are identical in both places.

use serde::Serialize;
use serde_json::Value;

use super::attribute::{AttributeChild, AttributeParent};
use super::category::PopularCategory;
use super::coerce;
use super::page::DiscoverPage;
use super::product::Product;
use super::HydrationError;

/// A single call-to-action message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CtaMessage {
    /// The unique message identifier.
    pub id: u64,
    /// The message text.
    pub message: String,
}

impl CtaMessage {
    /// Hydrates a call-to-action message from one JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`HydrationError`] when `id` or `message` is absent or `null`.
    pub fn from_value(value: &Value) -> Result<Self, HydrationError> {
        Ok(Self {
            id: coerce::uint(coerce::require(value, "id")?),
            message: coerce::string(coerce::require(value, "message")?),
        })
    }
}

/// Call-to-action block: messages rotated while the user is typing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cta {
    /// The typing messages, in display order.
    pub typing: Vec<CtaMessage>,
}

impl Cta {
    /// Hydrates the call-to-action block from one JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`HydrationError`] when `typing` is absent or not an array,
    /// or when a message fails to hydrate.
    pub fn from_value(value: &Value) -> Result<Self, HydrationError> {
        let typing = coerce::require_array(value, "typing")?
            .iter()
            .map(CtaMessage::from_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { typing })
    }
}

/// Interest-based recommendations: what the user clicked and what follows
/// from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interests {
    /// Products the user clicked.
    pub clicks: Vec<Product>,
    /// Products recommended from those clicks.
    pub products: Vec<Product>,
}

impl Interests {
    /// Hydrates the interests block from one JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`HydrationError`] when a nested product fails to hydrate.
    pub fn from_value(value: &Value) -> Result<Self, HydrationError> {
        Ok(Self {
            clicks: Product::from_values(coerce::optional_array(value, "clicks"))?,
            products: Product::from_values(coerce::optional_array(value, "products"))?,
        })
    }
}

/// Popularity-based recommendations: searches, categories, and products.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Popular {
    /// Popular search terms.
    pub searches: Vec<String>,
    /// Popular categories.
    pub categories: Vec<PopularCategory>,
    /// Popular products.
    pub products: Vec<Product>,
}

impl Popular {
    /// Hydrates the popular block from one JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`HydrationError`] when a nested record fails to hydrate.
    pub fn from_value(value: &Value) -> Result<Self, HydrationError> {
        Ok(Self {
            searches: coerce::string_list(value, "searches"),
            categories: PopularCategory::from_values(coerce::optional_array(value, "categories"))?,
            products: Product::from_values(coerce::optional_array(value, "products"))?,
        })
    }
}

/// The hydrated form of a `/search/recommendation` response.
///
/// The `interests`, `popular`, and `cta` sub-objects are omitted when the
/// server does not send them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRecommendation {
    /// Flat list of parent attributes.
    pub attribute_parents: Vec<AttributeParent>,
    /// Flat list of child attributes.
    pub attributes: Vec<AttributeChild>,
    /// Interest-based recommendations, when present.
    pub interests: Option<Interests>,
    /// Popularity-based recommendations, when present.
    pub popular: Option<Popular>,
    /// Call-to-action messages, when present.
    pub cta: Option<Cta>,
    /// The user's recent queries.
    pub recent: Vec<String>,
}

impl SearchRecommendation {
    /// Hydrates a search recommendation from the decoded response payload.
    ///
    /// # Errors
    ///
    /// Returns [`HydrationError`] when a nested record fails to hydrate.
    pub fn from_value(value: &Value) -> Result<Self, HydrationError> {
        Ok(Self {
            attribute_parents: AttributeParent::from_values(coerce::optional_array(
                value,
                "attribute_parents",
            ))?,
            attributes: AttributeChild::from_values(coerce::optional_array(value, "attributes"))?,
            interests: coerce::optional(value, "interests")
                .map(Interests::from_value)
                .transpose()?,
            popular: coerce::optional(value, "popular")
                .map(Popular::from_value)
                .transpose()?,
            cta: coerce::optional(value, "cta")
                .map(Cta::from_value)
                .transpose()?,
            recent: coerce::string_list(value, "recent"),
        })
    }
}

/// The hydrated form of a `/recommendation/carousel` response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Carousel {
    /// Flat list of child attributes.
    pub attributes: Vec<AttributeChild>,
    /// Flat list of parent attributes.
    pub attribute_parents: Vec<AttributeParent>,
    /// The recommended products.
    pub products: Vec<Product>,
    /// Whether the recommendations were personalized for the user.
    pub personalized: bool,
}

impl Carousel {
    /// Hydrates a carousel from the decoded response payload.
    ///
    /// # Errors
    ///
    /// Returns [`HydrationError`] when a required field is absent or `null`,
    /// or when a nested record fails to hydrate.
    pub fn from_value(value: &Value) -> Result<Self, HydrationError> {
        Ok(Self {
            attributes: AttributeChild::from_values(coerce::require_array(value, "attributes")?)?,
            attribute_parents: AttributeParent::from_values(coerce::require_array(
                value,
                "attribute_parents",
            )?)?,
            products: Product::from_values(coerce::require_array(value, "products")?)?,
            personalized: coerce::boolean(coerce::require(value, "personalized")?),
        })
    }
}

/// The hydrated form of a `/recommendation/discover` response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Discover {
    /// Flat list of child attributes.
    pub attributes: Vec<AttributeChild>,
    /// Flat list of parent attributes.
    pub attribute_parents: Vec<AttributeParent>,
    /// The recommended products.
    pub products: Vec<Product>,
    /// Total number of recommendations available.
    pub count: i64,
    /// Continuation cursor; absent when the server sent none.
    pub page: Option<DiscoverPage>,
}

impl Discover {
    /// Hydrates a discover page from the decoded response payload.
    ///
    /// # Errors
    ///
    /// Returns [`HydrationError`] when a required field is absent or `null`,
    /// or when a nested record fails to hydrate.
    pub fn from_value(value: &Value) -> Result<Self, HydrationError> {
        Ok(Self {
            attributes: AttributeChild::from_values(coerce::require_array(value, "attributes")?)?,
            attribute_parents: AttributeParent::from_values(coerce::require_array(
                value,
                "attribute_parents",
            )?)?,
            products: Product::from_values(coerce::require_array(value, "products")?)?,
            count: coerce::int(coerce::require(value, "count")?),
            page: coerce::optional(value, "page")
                .map(DiscoverPage::from_value)
                .transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_recommendation_omits_absent_blocks() {
        let rec = SearchRecommendation::from_value(&json!({
            "attribute_parents": [],
            "attributes": [],
            "recent": ["boots"]
        }))
        .unwrap();
        assert!(rec.interests.is_none());
        assert!(rec.popular.is_none());
        assert!(rec.cta.is_none());
        assert_eq!(rec.recent, vec!["boots"]);
    }

    #[test]
    fn test_cta_messages_hydrate_in_order() {
        let cta = Cta::from_value(&json!({
            "typing": [
                {"id": 1, "message": "Try searching for boots"},
                {"id": "2", "message": "Free shipping over 50"}
            ]
        }))
        .unwrap();
        assert_eq!(cta.typing.len(), 2);
        assert_eq!(cta.typing[1].id, 2);
        assert_eq!(cta.typing[1].message, "Free shipping over 50");
    }

    #[test]
    fn test_carousel_coerces_personalized_flag() {
        let carousel = Carousel::from_value(&json!({
            "attributes": [],
            "attribute_parents": [],
            "products": [],
            "personalized": "yes"
        }))
        .unwrap();
        assert!(carousel.personalized);
    }

    #[test]
    fn test_discover_page_is_optional() {
        let discover = Discover::from_value(&json!({
            "attributes": [],
            "attribute_parents": [],
            "products": [],
            "count": 0
        }))
        .unwrap();
        assert!(discover.page.is_none());

        let discover = Discover::from_value(&json!({
            "attributes": [],
            "attribute_parents": [],
            "products": [],
            "count": 60,
            "page": {"limit": 30, "count": 30, "has_next": true, "after": "https://next"}
        }))
        .unwrap();
        assert_eq!(discover.page.unwrap().after, "https://next");
    }

    #[test]
    fn test_popular_block_defaults_missing_lists() {
        let popular = Popular::from_value(&json!({"searches": ["sale"]})).unwrap();
        assert_eq!(popular.searches, vec!["sale"]);
        assert!(popular.categories.is_empty());
        assert!(popular.products.is_empty());
    }
}
