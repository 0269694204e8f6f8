//! Hydrated response models.
//!
//! Every model is built from a decoded [`serde_json::Value`] with an explicit
//! `from_value` constructor rather than `#[derive(Deserialize)]`: the API is
//! loose about scalar types (see [`coerce`]) and strict typed deserialization
//! would reject payloads the service actually sends. Hydration is fail-fast
//! on required fields and tolerant about scalar shapes.

mod attribute;
mod category;
pub(crate) mod coerce;
mod filter;
mod page;
mod product;
mod recommendation;
mod search;
mod settings;

pub use attribute::{AttributeChild, AttributeParent};
pub use category::PopularCategory;
pub use coerce::HydrationError;
pub use filter::{Filter, FilterAttributeChild, FilterAttributeParent, FilterPrice};
pub use page::{DiscoverPage, Page};
pub use product::{Product, ProductVariant};
pub use recommendation::{
    Carousel, Cta, CtaMessage, Discover, Interests, Popular, SearchRecommendation,
};
pub use search::{
    PageRedirect, RecommendationBundle, Relating, RelatingAttributeChild, RelatingAttributeParent,
    SearchResult,
};
pub use settings::{Currency, Settings, Subscription};
