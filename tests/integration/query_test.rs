//! Integration tests for listing filters, sorting and pagination.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_category_salary_high_first_page() {
    let app = TestApp::seeded();

    let response = app
        .request(
            "GET",
            "/api/jobs?category=Engineering&sort=salary_high&limit=2&page=1",
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(TestApp::companies(&response), ["Notion", "Cloudflare"]);
    assert_eq!(response.body["total"], 3);
    assert_eq!(response.body["page"], 1);
    assert_eq!(response.body["pages"], 2);
}

#[tokio::test]
async fn test_second_page_holds_remainder() {
    let app = TestApp::seeded();

    let response = app
        .request(
            "GET",
            "/api/jobs?category=Engineering&sort=salary_high&limit=2&page=2",
            None,
        )
        .await;

    assert_eq!(TestApp::companies(&response), ["Stripe"]);
    assert_eq!(response.body["page"], 2);
}

#[tokio::test]
async fn test_page_beyond_last_is_empty() {
    let app = TestApp::seeded();

    let response = app.request("GET", "/api/jobs?limit=4&page=9", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["jobs"], json!([]));
    assert_eq!(response.body["total"], 6);
    assert_eq!(response.body["pages"], 2);
    assert_eq!(response.body["page"], 9);
}

#[tokio::test]
async fn test_text_search_is_case_insensitive() {
    let app = TestApp::seeded();

    let response = app.request("GET", "/api/jobs?q=KUBERNETES", None).await;

    let mut companies = TestApp::companies(&response);
    companies.sort();
    assert_eq!(companies, ["Cloudflare", "Notion"]);
}

#[tokio::test]
async fn test_text_search_matches_category() {
    let app = TestApp::seeded();

    let response = app.request("GET", "/api/jobs?q=marketing", None).await;

    assert_eq!(TestApp::companies(&response), ["Linear"]);
}

#[tokio::test]
async fn test_remote_location_filter() {
    let app = TestApp::seeded();

    let response = app.request("GET", "/api/jobs?location=Remote", None).await;

    assert_eq!(response.body["total"], 4);
}

#[tokio::test]
async fn test_location_substring_filter() {
    let app = TestApp::seeded();

    let response = app
        .request("GET", "/api/jobs?location=san%20francisco", None)
        .await;

    let mut companies = TestApp::companies(&response);
    companies.sort();
    assert_eq!(companies, ["Airbnb", "Figma"]);
}

#[tokio::test]
async fn test_filters_are_conjunctive() {
    let app = TestApp::seeded();

    let response = app
        .request(
            "GET",
            "/api/jobs?mode=Remote&level=Senior&category=Engineering",
            None,
        )
        .await;

    let mut companies = TestApp::companies(&response);
    companies.sort();
    assert_eq!(companies, ["Cloudflare", "Stripe"]);
}

#[tokio::test]
async fn test_salary_min_filters_on_upper_band() {
    let app = TestApp::seeded();

    let response = app
        .request("GET", "/api/jobs?salaryMin=225&sort=salary_high", None)
        .await;

    assert_eq!(TestApp::companies(&response), ["Notion", "Airbnb"]);
}

#[tokio::test]
async fn test_salary_low_sort() {
    let app = TestApp::seeded();

    let response = app.request("GET", "/api/jobs?sort=salary_low", None).await;

    assert_eq!(
        TestApp::companies(&response),
        ["Linear", "Figma", "Stripe", "Cloudflare", "Airbnb", "Notion"]
    );
}

#[tokio::test]
async fn test_recent_sort() {
    let app = TestApp::seeded();

    let response = app.request("GET", "/api/jobs?sort=recent", None).await;

    assert_eq!(
        TestApp::companies(&response),
        ["Figma", "Cloudflare", "Stripe", "Notion", "Airbnb", "Linear"]
    );
}

#[tokio::test]
async fn test_unknown_sort_falls_back_to_featured() {
    let app = TestApp::seeded();

    let featured = app.request("GET", "/api/jobs", None).await;
    let unknown = app.request("GET", "/api/jobs?sort=bogus", None).await;

    assert_eq!(unknown.status, StatusCode::OK);
    assert_eq!(unknown.body, featured.body);
}

#[tokio::test]
async fn test_invalid_paging_params_use_defaults() {
    let app = TestApp::seeded();

    let response = app
        .request("GET", "/api/jobs?page=abc&limit=-4&salaryMin=lots", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["page"], 1);
    assert_eq!(response.body["total"], 6);
    assert_eq!(response.body["pages"], 1);
}

#[tokio::test]
async fn test_oversized_limit_is_clamped() {
    let app = TestApp::seeded();

    for _ in 0..120 {
        app.request(
            "POST",
            "/api/jobs",
            Some(json!({"title": "Bulk", "company": "Acme", "description": "x"})),
        )
        .await;
    }

    let response = app.request("GET", "/api/jobs?limit=1000", None).await;

    assert_eq!(response.body["total"], 126);
    assert_eq!(response.body["jobs"].as_array().map(Vec::len), Some(100));
    assert_eq!(response.body["pages"], 2);
}

#[tokio::test]
async fn test_empty_params_are_ignored() {
    let app = TestApp::seeded();

    let response = app
        .request("GET", "/api/jobs?q=&location=&type=&category=", None)
        .await;

    assert_eq!(response.body["total"], 6);
}

#[tokio::test]
async fn test_empty_store_has_no_pages() {
    let app = TestApp::empty();

    let response = app.request("GET", "/api/jobs", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 0);
    assert_eq!(response.body["pages"], 0);
    assert_eq!(response.body["jobs"], json!([]));
}

#[tokio::test]
async fn test_listing_does_not_mutate_store() {
    let app = TestApp::seeded();

    app.request("GET", "/api/jobs?sort=salary_low&limit=1", None)
        .await;
    let response = app.request("GET", "/api/jobs", None).await;

    assert_eq!(
        TestApp::companies(&response),
        ["Figma", "Stripe", "Notion", "Cloudflare", "Airbnb", "Linear"]
    );
}
