//! Filter models: available filter attributes, price range, and the echoed
//! selection index.
//!
//! The selection index maps parent-attribute ids to the child ids the query
//! selected; the server echoes it back alongside the available attributes so
//! UIs can render checked states without re-deriving them. It is consulted
//! only through [`Filter::is_selected`] and [`Filter::count_selected`].

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::coerce;
use super::HydrationError;

/// A child attribute inside a filter facet, with its result count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterAttributeChild {
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
    /// Number of matching items carrying this attribute.
    pub count: i64,
}

impl FilterAttributeChild {
    /// Hydrates a filter child from one JSON object.
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
            count: coerce::int(coerce::require(value, "count")?),
        })
    }
}

/// A filter facet: a parent attribute owning its child values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterAttributeParent {
    /// The unique attribute identifier.
    pub id: u64,
    /// The display name.
    pub name: String,
    /// The label shown in filter UIs.
    pub filter_label: String,
    /// The filter widget type.
    pub filter_type: String,
    /// Whether the facet appears in full search results.
    pub show_in_full_search: bool,
    /// Whether the facet appears in recommendations.
    pub show_in_recommendation: bool,
    /// The title used when shown in recommendations.
    pub recommendation_title: String,
    /// Whether the attribute is a product option.
    pub is_option: bool,
    /// The facet's child values, children hydrated before the parent.
    pub children: Vec<FilterAttributeChild>,
}

impl FilterAttributeParent {
    /// Hydrates a filter facet from one JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`HydrationError`] when a required field is absent or `null`,
    /// or when a child fails to hydrate.
    pub fn from_value(value: &Value) -> Result<Self, HydrationError> {
        let children = coerce::require_array(value, "children")?
            .iter()
            .map(FilterAttributeChild::from_value)
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

/// The price range a result set spans.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterPrice {
    /// The minimum price in the result set.
    pub min: f64,
    /// The maximum price in the result set.
    pub max: f64,
}

impl FilterPrice {
    /// Hydrates a price range from one JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`HydrationError`] when `min` or `max` is absent or `null`.
    pub fn from_value(value: &Value) -> Result<Self, HydrationError> {
        Ok(Self {
            min: coerce::float(coerce::require(value, "min")?),
            max: coerce::float(coerce::require(value, "max")?),
        })
    }
}

/// The filter block of a search result: available facets, price range, and
/// the selection index echoed from the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Filter {
    /// The available filter facets.
    pub attributes: Vec<FilterAttributeParent>,
    /// The price range of the result set.
    pub price: FilterPrice,
    // Selection state is query-derived, not part of the facet data; it is
    // only exposed through is_selected/count_selected.
    selected: BTreeMap<u64, Vec<u64>>,
}

impl Filter {
    /// Hydrates the filter block from one JSON object.
    ///
    /// The `selected` object maps parent ids (JSON object keys, so strings)
    /// to arrays of child ids; unparsable keys are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`HydrationError`] when a required field is absent or `null`,
    /// or when a facet fails to hydrate.
    pub fn from_value(value: &Value) -> Result<Self, HydrationError> {
        let attributes = coerce::require_array(value, "attributes")?
            .iter()
            .map(FilterAttributeParent::from_value)
            .collect::<Result<Vec<_>, _>>()?;

        let mut selected = BTreeMap::new();
        if let Some(map) = coerce::optional(value, "selected").and_then(Value::as_object) {
            for (key, children) in map {
                let Ok(parent_id) = key.parse::<u64>() else {
                    continue;
                };
                let child_ids = children
                    .as_array()
                    .map(|list| list.iter().map(coerce::uint).collect())
                    .unwrap_or_default();
                selected.insert(parent_id, child_ids);
            }
        }

        Ok(Self {
            attributes,
            price: FilterPrice::from_value(coerce::require(value, "price")?)?,
            selected,
        })
    }

    /// Returns `true` when the given child is selected under the given
    /// parent in the query that produced this filter.
    #[must_use]
    pub fn is_selected(&self, parent_id: u64, child_id: u64) -> bool {
        self.selected
            .get(&parent_id)
            .is_some_and(|children| children.contains(&child_id))
    }

    /// Returns the total number of selected child attributes across all
    /// parents.
    #[must_use]
    pub fn count_selected(&self) -> usize {
        self.selected.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filter_json() -> Value {
        json!({
            "selected": {"7": [71, 72], "9": [90]},
            "attributes": [{
                "id": 7,
                "name": "Color",
                "filter_label": "Color",
                "filter_type": "swatch",
                "show_in_full_search": true,
                "show_in_recommendation": false,
                "recommendation_title": "",
                "is_option": 0,
                "children": [{
                    "id": 71,
                    "parent_id": 7,
                    "group_id": 1,
                    "position": 1,
                    "name": "Red",
                    "filter_label": "Red",
                    "color_code": "#f00",
                    "count": "12"
                }]
            }],
            "price": {"min": "10.5", "max": 99}
        })
    }

    #[test]
    fn test_filter_hydrates_facets_and_price() {
        let filter = Filter::from_value(&filter_json()).unwrap();
        assert_eq!(filter.attributes.len(), 1);
        assert_eq!(filter.attributes[0].children[0].count, 12);
        assert!((filter.price.min - 10.5).abs() < f64::EPSILON);
        assert!((filter.price.max - 99.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_selection_index_queries() {
        let filter = Filter::from_value(&filter_json()).unwrap();
        assert!(filter.is_selected(7, 71));
        assert!(filter.is_selected(7, 72));
        assert!(filter.is_selected(9, 90));
        assert!(!filter.is_selected(7, 99));
        assert!(!filter.is_selected(8, 71));
        assert_eq!(filter.count_selected(), 3);
    }

    #[test]
    fn test_absent_selection_index_means_nothing_selected() {
        let mut value = filter_json();
        value.as_object_mut().unwrap().remove("selected");
        let filter = Filter::from_value(&value).unwrap();
        assert_eq!(filter.count_selected(), 0);
        assert!(!filter.is_selected(7, 71));
    }

    #[test]
    fn test_missing_price_fails_fast() {
        let mut value = filter_json();
        value.as_object_mut().unwrap().remove("price");
        assert_eq!(
            Filter::from_value(&value),
            Err(HydrationError::MissingField { field: "price" })
        );
    }
}
