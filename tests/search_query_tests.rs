//! Integration tests for the search query action and offset pagination.

use aisearch_api::{Aisearch, AisearchConfig, ClientToken, SearchQueryParams, SiteId};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn aisearch_for(mock_server: &MockServer) -> Aisearch {
    let config = AisearchConfig::builder()
        .site_id(SiteId::new(42).unwrap())
        .client_token(ClientToken::new("tok").unwrap())
        .api_url(mock_server.uri())
        .build()
        .unwrap();
    Aisearch::new(config)
}

fn result_body(count: i64, next: i64) -> Value {
    json!({
        "status": "ok",
        "count": count,
        "products": [{
            "id": 1,
            "name": "Trail Boot",
            "images": ["https://img/1.jpg"],
            "url": "https://shop/p/1",
            "stock": 4,
            "is_new": 1,
            "buying_price": "49.90",
            "price": 59.90,
            "currency_code": "USD",
            "category_id": 12,
            "brand_id": 3,
            "sku": "TB-1",
            "master_key": "tb-1",
            "barcode": "123",
            "custom": null,
            "attributes": [],
            "variants": [],
            "brand": "Acme"
        }],
        "page": {"count": count, "next": next},
        "attribute_parents": [],
        "attributes": [],
        "recent": ["boots"],
        "query": "boots",
        "popularCategories": []
    })
}

#[tokio::test]
async fn test_first_fetches_page_one_and_hydrates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sites/42/v1/search/query"))
        .and(query_param("client-token", "tok"))
        .and(query_param("query", "boots"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(result_body(1, 0)))
        .mount(&mock_server)
        .await;

    let aisearch = aisearch_for(&mock_server);
    let mut action = aisearch.search_query(
        SearchQueryParams::new().user_id("visitor-1").query("boots"),
    );

    let result = action.first().await.unwrap().unwrap();
    assert_eq!(result.count, 1);
    assert_eq!(result.products[0].name, "Trail Boot");
    assert!(result.products[0].is_new);
    assert!((result.products[0].base_price - 49.90).abs() < f64::EPSILON);
    assert!(!action.has_next());
}

#[tokio::test]
async fn test_next_follows_the_cursor_page_number() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sites/42/v1/search/query"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(result_body(90, 3)))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sites/42/v1/search/query"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(result_body(90, 0)))
        .mount(&mock_server)
        .await;

    let aisearch = aisearch_for(&mock_server);
    let mut action = aisearch.search_query(
        SearchQueryParams::new().user_id("visitor-1").query("boots"),
    );

    action.first().await.unwrap();
    assert!(action.has_next());

    let result = action.next().await.unwrap();
    assert!(result.is_some());
    assert_eq!(action.page(), 3);
    assert!(!action.has_next());
}

#[tokio::test]
async fn test_next_on_exhausted_cursor_is_a_sentinel_without_a_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sites/42/v1/search/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(result_body(1, 0)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let aisearch = aisearch_for(&mock_server);
    let mut action = aisearch.search_query(
        SearchQueryParams::new().user_id("visitor-1").query("boots"),
    );

    action.first().await.unwrap();
    assert!(!action.has_next());

    let result = action.next().await.unwrap();
    assert!(result.is_none());
    // The .expect(1) on the mock verifies no second request was issued.
}

#[tokio::test]
async fn test_attributes_parameter_reaches_the_wire() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sites/42/v1/search/query"))
        .and(query_param("attributes", "7:71,72|9:90"))
        .respond_with(ResponseTemplate::new(200).set_body_json(result_body(1, 0)))
        .mount(&mock_server)
        .await;

    let aisearch = aisearch_for(&mock_server);
    let mut action = aisearch.search_query(
        SearchQueryParams::new()
            .user_id("visitor-1")
            .add_attribute(7, 71)
            .add_attribute(7, 72)
            .add_attribute(9, 90),
    );

    assert!(action.first().await.unwrap().is_some());
}

#[tokio::test]
async fn test_soft_failure_clears_the_result_and_keeps_the_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sites/42/v1/search/query"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "site disabled"})))
        .mount(&mock_server)
        .await;

    let aisearch = aisearch_for(&mock_server);
    let mut action = aisearch.search_query(
        SearchQueryParams::new().user_id("visitor-1").query("boots"),
    );

    let result = action.first().await.unwrap();
    assert!(result.is_none());
    assert!(action.result().is_none());

    let response = action.response().unwrap();
    assert_eq!(response.code, 500);
    assert!(!response.is_success());
    assert_eq!(response.error.as_deref(), Some("site disabled"));
}
