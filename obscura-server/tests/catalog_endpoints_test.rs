//! Endpoint tests for the portfolio read API.

mod support;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use obscura_server::create_app;
use support::{build_state, item_json, sample_catalog, test_server};

#[tokio::test]
async fn portfolio_listing_returns_the_full_document() {
    let server = test_server(&sample_catalog(), None);

    let response = server.get("/api/v1/portfolio").await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["portfolioItems"].as_array().unwrap().len(), 3);
    assert_eq!(body["categories"].as_array().unwrap().len(), 2);
    assert_eq!(body["metadata"]["totalItems"], 3);
}

#[tokio::test]
async fn invalid_catalog_fails_the_listing_with_details() {
    let mut catalog = sample_catalog();
    catalog["portfolioItems"][1] = item_json(
        2,
        "wedding",
        "winter-chapel",
        "Winter Chapel",
        &["indoor"],
        11,
        4,
    );

    let server = test_server(&catalog, None);
    let response = server.get("/api/v1/portfolio").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert_eq!(body["error"], "Portfolio data validation failed");
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0],
        "Portfolio item 2: Expected 12 photos, found 11"
    );
}

#[tokio::test]
async fn slug_lookup_returns_the_item_or_not_found() {
    let server = test_server(&sample_catalog(), None);

    let response = server.get("/api/v1/portfolio/winter-chapel").await;
    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["slug"], "winter-chapel");
    assert_eq!(body["photos"].as_array().unwrap().len(), 12);

    let missing = server.get("/api/v1/portfolio/no-such-shoot").await;
    missing.assert_status(StatusCode::NOT_FOUND);
    let body: Value = missing.json();
    assert_eq!(body["error"], "Portfolio item not found");
}

#[tokio::test]
async fn categories_are_listed_in_source_order() {
    let server = test_server(&sample_catalog(), None);

    let response = server.get("/api/v1/portfolio/categories").await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|category| category["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["wedding", "portrait"]);
}

#[tokio::test]
async fn listing_is_paginated_with_stable_arithmetic() {
    let server = test_server(&sample_catalog(), None);

    let response = server
        .get("/api/v1/portfolio/items")
        .add_query_param("page", 1)
        .add_query_param("limit", 2)
        .await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["total"], 3);
    assert_eq!(body["pages"], 2);

    let out_of_range = server
        .get("/api/v1/portfolio/items")
        .add_query_param("page", 9)
        .add_query_param("limit", 2)
        .await;
    out_of_range.assert_status(StatusCode::OK);
    let body: Value = out_of_range.json();
    assert!(body["items"].as_array().unwrap().is_empty());
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn category_filter_applies_before_pagination() {
    let server = test_server(&sample_catalog(), None);

    let response = server
        .get("/api/v1/portfolio/items")
        .add_query_param("category", "wedding")
        .await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["total"], 2);
    assert_eq!(body["pages"], 1);
    let slugs: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["coastal-vows", "winter-chapel"]);

    // The "all" sentinel is a no-op filter.
    let everything = server
        .get("/api/v1/portfolio/items")
        .add_query_param("category", "all")
        .await;
    let body: Value = everything.json();
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn search_matches_case_insensitively_and_blank_queries_match_nothing() {
    let server = test_server(&sample_catalog(), None);

    let response = server
        .get("/api/v1/portfolio/search")
        .add_query_param("q", "WINTER")
        .await;
    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["slug"], "winter-chapel");

    let blank = server.get("/api/v1/portfolio/search").await;
    blank.assert_status(StatusCode::OK);
    let body: Value = blank.json();
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn related_items_prefer_category_then_fall_back_to_tags() {
    let server = test_server(&sample_catalog(), None);

    let response = server
        .get("/api/v1/portfolio/winter-chapel/related")
        .await;
    response.assert_status(StatusCode::OK);

    // Same-category wedding first, then the tag-sharing portrait.
    let body: Value = response.json();
    let slugs: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["coastal-vows", "studio-profiles"]);

    let missing = server
        .get("/api/v1/portfolio/no-such-shoot/related")
        .await;
    missing.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn related_limit_caps_the_suggestions() {
    let server = test_server(&sample_catalog(), None);

    let response = server
        .get("/api/v1/portfolio/winter-chapel/related")
        .add_query_param("limit", 1)
        .await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn stats_report_per_category_counts_and_average_rating() {
    let server = test_server(&sample_catalog(), None);

    let response = server.get("/api/v1/portfolio/stats").await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["totalItems"], 3);
    assert_eq!(body["totalPhotos"], 36);
    assert_eq!(
        body["categories"][0],
        serde_json::json!({
            "category": "Wedding",
            "count": 2,
            "totalPhotos": 24
        })
    );
    let average = body["averageRating"].as_f64().unwrap();
    assert!((average - 14.0 / 3.0).abs() < 1e-9);
}

#[tokio::test]
async fn ping_and_health_respond_for_a_clean_catalog() {
    let server = test_server(&sample_catalog(), None);

    let ping: Value = server.get("/ping").await.json();
    assert_eq!(ping["status"], "ok");

    let response = server.get("/health").await;
    response.assert_status(StatusCode::OK);
    let health: Value = response.json();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["checks"]["catalog"]["total_items"], 3);
    assert_eq!(health["checks"]["mailer"]["configured"], false);
}

#[tokio::test]
async fn health_degrades_when_the_catalog_fails_validation() {
    let mut catalog = sample_catalog();
    catalog["portfolioItems"][0]["photos"] = serde_json::json!([]);

    let server = test_server(&catalog, None);
    let response = server.get("/health").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn cross_origin_preflight_is_served() {
    let app = create_app(build_state(&sample_catalog(), None));

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/v1/inquiries")
                .header(header::ORIGIN, "https://atelierobscura.se")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(
                    header::ACCESS_CONTROL_REQUEST_HEADERS,
                    "content-type",
                )
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert!(
        response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
}
