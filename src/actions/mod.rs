//! Typed actions, one per Aisearch endpoint.
//!
//! An action owns its parameters, issues the request, and keeps both the raw
//! response envelope and the hydrated model. Read actions follow a soft
//! failure convention: a non-2xx answer clears the model and keeps the
//! envelope instead of returning an error, so callers can distinguish "no
//! result" from "empty result" and still inspect what the server said. Hard
//! transport failures (timeouts, connection errors, undecodable bodies) and
//! malformed success payloads always surface as [`crate::Error`].
//!
//! Actions are not thread-safe by contract: callers must serialize calls
//! against one instance, though independent instances may run concurrently.

mod carousel;
mod discover;
mod recent_query;
mod search_query;
mod search_recommendation;
mod settings;

pub use carousel::{CarouselAction, CarouselParams};
pub use discover::{DiscoverAction, DiscoverParams};
pub use recent_query::{RecentQueryDeleteAction, RecentQueryDeleteParams};
pub use search_query::{Expand, SearchQueryAction, SearchQueryParams, SortOption};
pub use search_recommendation::{SearchRecommendationAction, SearchRecommendationParams};
pub use settings::SettingsAction;

use crate::clients::{HttpError, HttpResponse};

/// Converts a non-2xx answer into its envelope, leaving hard errors alone.
///
/// This is the soft failure boundary: `RequestFailed` keeps the decoded
/// envelope, so the action can record it and report an absent model instead
/// of propagating an error.
pub(crate) fn soften(result: Result<HttpResponse, HttpError>) -> Result<HttpResponse, HttpError> {
    match result {
        Err(HttpError::RequestFailed(failure)) => {
            tracing::warn!(code = failure.code, "{}", failure.message);
            Ok(failure.response)
        }
        other => other,
    }
}

/// URL-encodes a parameter list into a query string.
pub(crate) fn encode_params(params: &[(&'static str, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
