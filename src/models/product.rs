//! Product and product-variant models.
//!
//! Products are the central payload of search and recommendation responses.
//! Each product owns its variants exclusively; variants are hydrated before
//! the owning product so the parent consumes already-typed records.
//!
//! The API's `buying_price` field is exposed as `base_price`, and both price
//! fields tolerate string-encoded numbers (see [`crate::models::coerce`]).

use serde::Serialize;
use serde_json::Value;

use super::coerce;
use super::HydrationError;

/// A purchasable variant of a [`Product`].
///
/// Variants differ from their parent in price, stock, SKU, and carry their
/// own opaque `custom` payload and raw attribute list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductVariant {
    /// The display name of the variant.
    pub name: String,
    /// Units in stock.
    pub stock: i64,
    /// The base (pre-discount) price, from the API's `buying_price`.
    pub base_price: f64,
    /// The current selling price.
    pub price: f64,
    /// The stock keeping unit.
    pub sku: String,
    /// The master key linking the variant to an external catalog.
    pub master_key: String,
    /// Opaque merchant-defined payload, passed through untyped.
    pub custom: Value,
    /// Raw attribute list, passed through untyped.
    pub attributes: Vec<Value>,
}

impl ProductVariant {
    /// Hydrates a variant from one JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`HydrationError`] when a required field is absent or `null`.
    pub fn from_value(value: &Value) -> Result<Self, HydrationError> {
        Ok(Self {
            name: coerce::string(coerce::require(value, "name")?),
            stock: coerce::int(coerce::require(value, "stock")?),
            base_price: coerce::float(coerce::require(value, "buying_price")?),
            price: coerce::float(coerce::require(value, "price")?),
            sku: coerce::string(coerce::require(value, "sku")?),
            master_key: coerce::string(coerce::require(value, "master_key")?),
            custom: coerce::opaque(value, "custom"),
            attributes: coerce::optional_array(value, "attributes").to_vec(),
        })
    }
}

/// A product returned by search and recommendation endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    /// The unique product identifier.
    pub id: u64,
    /// The display name.
    pub name: String,
    /// Image URLs; empty when the API sends none.
    pub images: Vec<String>,
    /// The product detail page URL.
    pub url: String,
    /// Units in stock across variants.
    pub stock: i64,
    /// Whether the product is flagged as new.
    pub is_new: bool,
    /// The base (pre-discount) price, from the API's `buying_price`.
    pub base_price: f64,
    /// The current selling price.
    pub price: f64,
    /// ISO currency code for the prices.
    pub currency_code: String,
    /// The owning category identifier.
    pub category_id: u64,
    /// The owning brand identifier.
    pub brand_id: u64,
    /// The stock keeping unit.
    pub sku: String,
    /// The master key linking the product to an external catalog.
    pub master_key: String,
    /// The product barcode.
    pub barcode: String,
    /// Opaque merchant-defined payload, passed through untyped.
    pub custom: Value,
    /// Raw attribute list, passed through untyped.
    pub attributes: Vec<Value>,
    /// The product's variants, in response order.
    pub variants: Vec<ProductVariant>,
    /// The brand name.
    pub brand: String,
}

impl Product {
    /// Hydrates a product from one JSON object, variants first.
    ///
    /// `images` and `variants` tolerate absence (some recommendation
    /// endpoints omit them); every other field is required.
    ///
    /// # Errors
    ///
    /// Returns [`HydrationError`] when a required field is absent or `null`,
    /// or when a nested variant fails to hydrate.
    pub fn from_value(value: &Value) -> Result<Self, HydrationError> {
        let variants = coerce::optional_array(value, "variants")
            .iter()
            .map(ProductVariant::from_value)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: coerce::uint(coerce::require(value, "id")?),
            name: coerce::string(coerce::require(value, "name")?),
            images: coerce::string_list(value, "images"),
            url: coerce::string(coerce::require(value, "url")?),
            stock: coerce::int(coerce::require(value, "stock")?),
            is_new: coerce::boolean(coerce::require(value, "is_new")?),
            base_price: coerce::float(coerce::require(value, "buying_price")?),
            price: coerce::float(coerce::require(value, "price")?),
            currency_code: coerce::string(coerce::require(value, "currency_code")?),
            category_id: coerce::uint(coerce::require(value, "category_id")?),
            brand_id: coerce::uint(coerce::require(value, "brand_id")?),
            sku: coerce::string(coerce::require(value, "sku")?),
            master_key: coerce::string(coerce::require(value, "master_key")?),
            barcode: coerce::string(coerce::require(value, "barcode")?),
            custom: coerce::opaque(value, "custom"),
            attributes: coerce::optional_array(value, "attributes").to_vec(),
            variants,
            brand: coerce::string(coerce::require(value, "brand")?),
        })
    }

    /// Hydrates a list of products.
    pub(crate) fn from_values(values: &[Value]) -> Result<Vec<Self>, HydrationError> {
        values.iter().map(Self::from_value).collect()
    }
}
