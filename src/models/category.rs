//! Popular category model.

use serde::Serialize;
use serde_json::Value;

use super::coerce;
use super::HydrationError;

/// A category surfaced as popular in search or recommendation responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopularCategory {
    /// The unique category identifier.
    pub id: u64,
    /// The display name.
    pub name: String,
    /// The category image URL.
    pub image_url: String,
    /// The category page URL.
    pub url: String,
    /// Opaque merchant-defined payload, passed through untyped.
    pub custom: Value,
    /// Display order position.
    pub position: i64,
    /// Creation timestamp, as sent by the API.
    pub created_at: String,
    /// Last update timestamp, as sent by the API.
    pub updated_at: String,
}

impl PopularCategory {
    /// Hydrates a popular category from one JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`HydrationError`] when a required field is absent or `null`.
    pub fn from_value(value: &Value) -> Result<Self, HydrationError> {
        Ok(Self {
            id: coerce::uint(coerce::require(value, "id")?),
            name: coerce::string(coerce::require(value, "name")?),
            image_url: coerce::string(coerce::require(value, "image_url")?),
            url: coerce::string(coerce::require(value, "url")?),
            custom: coerce::opaque(value, "custom"),
            position: coerce::int(coerce::require(value, "position")?),
            created_at: coerce::string(coerce::require(value, "created_at")?),
            updated_at: coerce::string(coerce::require(value, "updated_at")?),
        })
    }

    pub(crate) fn from_values(values: &[Value]) -> Result<Vec<Self>, HydrationError> {
        values.iter().map(Self::from_value).collect()
    }
}
