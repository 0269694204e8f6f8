//! Pagination cursors.
//!
//! The two endpoints that paginate use deliberately different protocols:
//! search results carry an offset cursor ([`Page`]) whose `next` field is a
//! 1-based page number recomputed into a fresh query string client-side,
//! while discover recommendations carry a continuation cursor
//! ([`DiscoverPage`]) whose `after` field is a complete, server-issued next
//! request URL used verbatim.

use serde::Serialize;
use serde_json::Value;

use super::coerce;
use super::HydrationError;

/// Offset pagination cursor for search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    /// Total number of items available.
    pub count: i64,
    /// The 1-based next page number; `0` (or below) means no further page.
    pub next: i64,
}

impl Page {
    /// Hydrates an offset cursor from one JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`HydrationError`] when `count` or `next` is absent or `null`.
    pub fn from_value(value: &Value) -> Result<Self, HydrationError> {
        Ok(Self {
            count: coerce::int(coerce::require(value, "count")?),
            next: coerce::int(coerce::require(value, "next")?),
        })
    }

    /// Returns `true` when another page can be fetched.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next > 0
    }
}

/// Continuation cursor for discover recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoverPage {
    /// The page size the server applied.
    pub limit: i64,
    /// Number of items in the current page.
    pub count: i64,
    /// Whether a further page exists.
    pub has_next: bool,
    /// Opaque continuation token: the literal next-request URL.
    pub after: String,
}

impl DiscoverPage {
    /// Hydrates a continuation cursor from one JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`HydrationError`] when a required field is absent or `null`.
    pub fn from_value(value: &Value) -> Result<Self, HydrationError> {
        Ok(Self {
            limit: coerce::int(coerce::require(value, "limit")?),
            count: coerce::int(coerce::require(value, "count")?),
            has_next: coerce::boolean(coerce::require(value, "has_next")?),
            after: coerce::string(coerce::require(value, "after")?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_next_zero_means_exhausted() {
        let page = Page::from_value(&json!({"count": 120, "next": 0})).unwrap();
        assert!(!page.has_next());

        let page = Page::from_value(&json!({"count": 120, "next": 3})).unwrap();
        assert!(page.has_next());
        assert_eq!(page.next, 3);
    }

    #[test]
    fn test_discover_page_keeps_after_verbatim() {
        let url = "https://api.aisearch.app/sites/1/v1/recommendation/discover?after=xyz";
        let page = DiscoverPage::from_value(&json!({
            "limit": 30,
            "count": 30,
            "has_next": 1,
            "after": url
        }))
        .unwrap();
        assert!(page.has_next);
        assert_eq!(page.after, url);
    }

    #[test]
    fn test_missing_cursor_field_fails_fast() {
        assert_eq!(
            Page::from_value(&json!({"count": 5})),
            Err(HydrationError::MissingField { field: "next" })
        );
    }
}
