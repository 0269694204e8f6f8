//! Attribute taxonomy models.
//!
//! Attribute parents group child attributes (e.g. "Color" → "Red", "Blue").
//! The child's `parent_id` is a lookup key back into the parent list, not an
//! ownership edge; both lists arrive flat in the response.

use serde::Serialize;
use serde_json::Value;

use super::coerce;
use super::HydrationError;

/// A parent attribute describing a filterable dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeParent {
    /// The unique attribute identifier.
    pub id: u64,
    /// The attribute group this parent belongs to.
    pub group_id: u64,
    /// Display order position.
    pub position: i64,
    /// The display name.
    pub name: String,
    /// The normalized name.
    pub regular_name: String,
    /// The label shown in filter UIs.
    pub filter_label: String,
    /// The filter widget type (e.g. checkbox, color swatch).
    pub filter_type: String,
    /// The key referencing the attribute in an external system.
    pub remote_key: String,
    /// Whether the attribute appears in full search results.
    pub show_in_full_search: bool,
    /// Whether the attribute appears in recommendations.
    pub show_in_recommendation: bool,
    /// The title used when shown in recommendations.
    pub recommendation_title: String,
    /// Whether the attribute is a product option.
    pub is_option: bool,
    /// Creation timestamp, as sent by the API.
    pub created_at: String,
    /// Last update timestamp, as sent by the API.
    pub updated_at: String,
}

impl AttributeParent {
    /// Hydrates a parent attribute from one JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`HydrationError`] when a required field is absent or `null`.
    pub fn from_value(value: &Value) -> Result<Self, HydrationError> {
        Ok(Self {
            id: coerce::uint(coerce::require(value, "id")?),
            group_id: coerce::uint(coerce::require(value, "group_id")?),
            position: coerce::int(coerce::require(value, "position")?),
            name: coerce::string(coerce::require(value, "name")?),
            regular_name: coerce::string(coerce::require(value, "regular_name")?),
            filter_label: coerce::string(coerce::require(value, "filter_label")?),
            filter_type: coerce::string(coerce::require(value, "filter_type")?),
            remote_key: coerce::string(coerce::require(value, "remote_key")?),
            show_in_full_search: coerce::boolean(coerce::require(value, "show_in_full_search")?),
            show_in_recommendation: coerce::boolean(coerce::require(
                value,
                "show_in_recommendation",
            )?),
            recommendation_title: coerce::string(coerce::require(value, "recommendation_title")?),
            is_option: coerce::boolean(coerce::require(value, "is_option")?),
            created_at: coerce::string(coerce::require(value, "created_at")?),
            updated_at: coerce::string(coerce::require(value, "updated_at")?),
        })
    }

    pub(crate) fn from_values(values: &[Value]) -> Result<Vec<Self>, HydrationError> {
        values.iter().map(Self::from_value).collect()
    }
}

/// A child attribute value under an [`AttributeParent`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeChild {
    /// The unique attribute identifier.
    pub id: u64,
    /// Lookup key into the parent attribute list.
    pub parent_id: u64,
    /// The attribute group this child belongs to.
    pub group_id: u64,
    /// Display order position.
    pub position: i64,
    /// The display name.
    pub name: String,
    /// The normalized name.
    pub regular_name: String,
    /// The label shown in filter UIs.
    pub filter_label: String,
    /// Color code for swatch rendering, when applicable.
    pub color_code: String,
    /// The key referencing the attribute in an external system.
    pub remote_key: String,
    /// Creation timestamp, as sent by the API.
    pub created_at: String,
    /// Last update timestamp, as sent by the API.
    pub updated_at: String,
}

impl AttributeChild {
    /// Hydrates a child attribute from one JSON object.
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
            regular_name: coerce::string(coerce::require(value, "regular_name")?),
            filter_label: coerce::string(coerce::require(value, "filter_label")?),
            color_code: coerce::string(coerce::require(value, "color_code")?),
            remote_key: coerce::string(coerce::require(value, "remote_key")?),
            created_at: coerce::string(coerce::require(value, "created_at")?),
            updated_at: coerce::string(coerce::require(value, "updated_at")?),
        })
    }

    pub(crate) fn from_values(values: &[Value]) -> Result<Vec<Self>, HydrationError> {
        values.iter().map(Self::from_value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parent_coerces_truthy_flags() {
        let value = json!({
            "id": "7",
            "group_id": 2,
            "position": 1,
            "name": "Color",
            "regular_name": "color",
            "filter_label": "Color",
            "filter_type": "swatch",
            "remote_key": "color",
            "show_in_full_search": 1,
            "show_in_recommendation": "",
            "recommendation_title": "Popular colors",
            "is_option": true,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-02-01T00:00:00Z"
        });
        let parent = AttributeParent::from_value(&value).unwrap();
        assert_eq!(parent.id, 7);
        assert!(parent.show_in_full_search);
        assert!(!parent.show_in_recommendation);
        assert!(parent.is_option);
    }

    #[test]
    fn test_child_carries_parent_lookup_key() {
        let value = json!({
            "id": 71,
            "parent_id": 7,
            "group_id": 2,
            "position": 3,
            "name": "Red",
            "regular_name": "red",
            "filter_label": "Red",
            "color_code": "#ff0000",
            "remote_key": "red",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-02-01T00:00:00Z"
        });
        let child = AttributeChild::from_value(&value).unwrap();
        assert_eq!(child.parent_id, 7);
        assert_eq!(child.color_code, "#ff0000");
    }

    #[test]
    fn test_missing_field_reports_field_name() {
        let value = json!({"id": 1});
        assert_eq!(
            AttributeChild::from_value(&value),
            Err(HydrationError::MissingField { field: "parent_id" })
        );
    }
}
