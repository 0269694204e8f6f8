//! # Aisearch API Rust SDK
//!
//! A Rust SDK for the Aisearch search and recommendation API, providing
//! type-safe configuration, typed response models, and an async HTTP client
//! with two pagination protocols.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`AisearchConfig`] and [`AisearchConfigBuilder`]
//! - Validated newtypes for the site id and client token
//! - One typed action per endpoint: search query, search recommendation,
//!   carousel, discover, settings, and recent query deletion
//! - Offset pagination (page numbers) for search and cursor pagination
//!   (server-issued continuation URLs) for discover
//! - Fail-fast hydration of loosely typed JSON payloads into typed models
//!
//! ## Quick Start
//!
//! ```rust
//! use aisearch_api::{Aisearch, AisearchConfig, ClientToken, SiteId};
//!
//! // Create configuration using the builder pattern
//! let config = AisearchConfig::builder()
//!     .site_id(SiteId::new(42).unwrap())
//!     .client_token(ClientToken::new("your-client-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let aisearch = Aisearch::new(config);
//! ```
//!
//! ## Searching
//!
//! ```rust,ignore
//! use aisearch_api::{SearchQueryParams, SortOption};
//!
//! let mut search = aisearch.search_query(
//!     SearchQueryParams::new()
//!         .user_id("visitor-1")
//!         .query("red shoes")
//!         .sort(SortOption::PriceAsc)
//!         .add_attribute(7, 71),
//! );
//!
//! if let Some(result) = search.first().await? {
//!     for product in &result.products {
//!         println!("{}: {}", product.name, product.price);
//!     }
//! }
//! while search.has_next() {
//!     if search.next().await?.is_none() {
//!         break;
//!     }
//! }
//! ```
//!
//! ## Recommendations
//!
//! ```rust,ignore
//! use aisearch_api::{CarouselParams, DiscoverParams};
//!
//! // Carousel for a category page
//! let mut carousel = aisearch.carousel(
//!     CarouselParams::new().user_id("visitor-1").category_id(12),
//! );
//! carousel.get().await?;
//!
//! // Endless discover feed, continued via server-issued cursor URLs
//! let mut discover = aisearch.discover(DiscoverParams::new().user_id("visitor-1"));
//! discover.first().await?;
//! while discover.has_next() {
//!     if discover.next().await?.is_none() {
//!         break;
//!     }
//! }
//! ```
//!
//! ## Failure Model
//!
//! Read actions use a soft failure convention: a non-2xx answer leaves the
//! action's result `None` and keeps the response envelope for inspection,
//! while hard transport failures (timeout, connection errors, undecodable
//! bodies) and malformed 200 payloads surface as [`Error`].
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Immutable models**: Hydrated responses are never mutated in place

pub mod actions;
mod aisearch;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;

// Re-export public types at crate root for convenience
pub use actions::{
    CarouselAction, CarouselParams, DiscoverAction, DiscoverParams, Expand,
    RecentQueryDeleteAction, RecentQueryDeleteParams, SearchQueryAction, SearchQueryParams,
    SearchRecommendationAction, SearchRecommendationParams, SettingsAction, SortOption,
};
pub use aisearch::Aisearch;
pub use clients::{HttpClient, HttpError, HttpMethod, HttpResponse, RequestFailedError};
pub use config::{AisearchConfig, AisearchConfigBuilder, ClientToken, SiteId};
pub use error::{ConfigError, Error};
pub use models::{
    AttributeChild, AttributeParent, Carousel, Cta, CtaMessage, Currency, Discover, DiscoverPage,
    Filter, FilterAttributeChild, FilterAttributeParent, FilterPrice, HydrationError, Interests,
    Page, PageRedirect, Popular, PopularCategory, Product, ProductVariant, RecommendationBundle,
    Relating, RelatingAttributeChild, RelatingAttributeParent, SearchRecommendation, SearchResult,
    Settings, Subscription,
};
