//! Integration tests for job CRUD endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_list_jobs_default() {
    let app = TestApp::seeded();

    let response = app.request("GET", "/api/jobs", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 6);
    assert_eq!(response.body["page"], 1);
    assert_eq!(response.body["pages"], 1);
    assert_eq!(
        TestApp::companies(&response),
        ["Figma", "Stripe", "Notion", "Cloudflare", "Airbnb", "Linear"]
    );
}

#[tokio::test]
async fn test_job_wire_format() {
    let app = TestApp::seeded();

    let response = app.request("GET", "/api/jobs/1", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let job = &response.body;
    assert_eq!(job["id"], 1);
    assert_eq!(job["company"], "Stripe");
    assert_eq!(job["type"], "Full-time");
    assert_eq!(job["salaryMin"], 160);
    assert_eq!(job["salaryMax"], 210);
    assert_eq!(job["postedDays"], 1);
    assert!(job["createdAt"].is_string());
    assert!(job.get("employment_type").is_none());
}

#[tokio::test]
async fn test_get_job_not_found() {
    let app = TestApp::seeded();

    let response = app.request("GET", "/api/jobs/999", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Job not found");
}

#[tokio::test]
async fn test_get_job_non_numeric_id() {
    let app = TestApp::seeded();

    for path in ["/api/jobs/abc", "/api/jobs/-1", "/api/jobs/1.5"] {
        let response = app.request("GET", path, None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
        assert_eq!(response.body["error"], "Job not found");
    }
}

#[tokio::test]
async fn test_create_job_applies_defaults() {
    let app = TestApp::seeded();

    let response = app
        .request(
            "POST",
            "/api/jobs",
            Some(json!({
                "title": "Rust Engineer",
                "company": "Acme",
                "description": "Build things",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let job = &response.body;
    assert_eq!(job["id"], 7);
    assert_eq!(job["category"], "Engineering");
    assert_eq!(job["type"], "Full-time");
    assert_eq!(job["mode"], "Remote");
    assert_eq!(job["location"], "Remote");
    assert_eq!(job["level"], "Mid Level");
    assert_eq!(job["salaryMin"], 80);
    assert_eq!(job["salaryMax"], 120);
    assert_eq!(job["logo"], "💼");
    assert_eq!(job["tags"], json!([]));
    assert_eq!(job["featured"], false);
    assert_eq!(job["hot"], false);
    assert_eq!(job["postedDays"], 0);
    assert_eq!(job["requirements"], json!([]));
    assert_eq!(job["benefits"], json!([]));
}

#[tokio::test]
async fn test_create_job_then_list_has_it_first_by_recency() {
    let app = TestApp::seeded();

    let created = app
        .request(
            "POST",
            "/api/jobs",
            Some(json!({
                "title": "Platform Engineer",
                "company": "Acme",
                "description": "Infra",
                "salaryMin": 150,
                "salaryMax": 190,
                "tags": ["Rust", "Tokio"],
            })),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);

    let list = app.request("GET", "/api/jobs?sort=recent", None).await;
    assert_eq!(list.body["total"], 7);
    assert_eq!(TestApp::companies(&list)[0], "Acme");

    let fetched = app.request("GET", "/api/jobs/7", None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, created.body);
}

#[tokio::test]
async fn test_create_job_ids_are_sequential() {
    let app = TestApp::empty();
    let body = json!({"title": "A", "company": "B", "description": "C"});

    let first = app.request("POST", "/api/jobs", Some(body.clone())).await;
    let second = app.request("POST", "/api/jobs", Some(body)).await;

    assert_eq!(first.body["id"], 1);
    assert_eq!(second.body["id"], 2);
}

#[tokio::test]
async fn test_create_job_ignores_client_controlled_fields() {
    let app = TestApp::seeded();

    let response = app
        .request(
            "POST",
            "/api/jobs",
            Some(json!({
                "id": 1,
                "title": "A",
                "company": "B",
                "description": "C",
                "hot": true,
                "postedDays": 30,
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["id"], 7);
    assert_eq!(response.body["hot"], false);
    assert_eq!(response.body["postedDays"], 0);
}

#[tokio::test]
async fn test_create_job_missing_fields() {
    let app = TestApp::seeded();

    let response = app
        .request("POST", "/api/jobs", Some(json!({"title": "X"})))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["error"],
        "title, company, and description are required"
    );

    let list = app.request("GET", "/api/jobs", None).await;
    assert_eq!(list.body["total"], 6);
}

#[tokio::test]
async fn test_create_job_empty_field() {
    let app = TestApp::seeded();

    let response = app
        .request(
            "POST",
            "/api/jobs",
            Some(json!({"title": "A", "company": "B", "description": ""})),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_job_malformed_json() {
    let app = TestApp::seeded();

    let response = app
        .raw_request("POST", "/api/jobs", "{not json".to_string())
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_update_job_partial() {
    let app = TestApp::seeded();

    let response = app
        .request(
            "PATCH",
            "/api/jobs/2",
            Some(json!({"salaryMax": 190, "tags": ["Figma"], "hot": false})),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let job = &response.body;
    assert_eq!(job["id"], 2);
    assert_eq!(job["company"], "Figma");
    assert_eq!(job["salaryMin"], 130);
    assert_eq!(job["salaryMax"], 190);
    assert_eq!(job["tags"], json!(["Figma"]));
    assert_eq!(job["hot"], false);

    let fetched = app.request("GET", "/api/jobs/2", None).await;
    assert_eq!(fetched.body, response.body);
}

#[tokio::test]
async fn test_update_job_empty_patch_is_noop() {
    let app = TestApp::seeded();
    let before = app.request("GET", "/api/jobs/3", None).await;

    let response = app.request("PATCH", "/api/jobs/3", Some(json!({}))).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, before.body);
}

#[tokio::test]
async fn test_update_job_rejects_identity_fields() {
    let app = TestApp::seeded();

    for patch in [json!({"id": 42}), json!({"createdAt": "2020-01-01T00:00:00Z"})] {
        let response = app.request("PATCH", "/api/jobs/1", Some(patch)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }

    let fetched = app.request("GET", "/api/jobs/1", None).await;
    assert_eq!(fetched.body["id"], 1);
}

#[tokio::test]
async fn test_update_job_not_found() {
    let app = TestApp::seeded();

    let response = app
        .request("PATCH", "/api/jobs/999", Some(json!({"title": "Nope"})))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Job not found");
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found_whatever_the_body() {
    let app = TestApp::seeded();

    let bad_field = app
        .request("PATCH", "/api/jobs/999", Some(json!({"salary": 1})))
        .await;
    assert_eq!(bad_field.status, StatusCode::NOT_FOUND);
    assert_eq!(bad_field.body["error"], "Job not found");

    let empty = app.raw_request("PATCH", "/api/jobs/999", String::new()).await;
    assert_eq!(empty.status, StatusCode::NOT_FOUND);

    let malformed = app
        .raw_request("PATCH", "/api/jobs/999", "{oops".to_string())
        .await;
    assert_eq!(malformed.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_job_empty_body_leaves_record_unchanged() {
    let app = TestApp::seeded();
    let before = app.request("GET", "/api/jobs/1", None).await;

    let response = app.raw_request("PATCH", "/api/jobs/1", String::new()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, before.body);
}

#[tokio::test]
async fn test_update_known_id_with_unknown_field_is_bad_request() {
    let app = TestApp::seeded();

    let response = app
        .request("PATCH", "/api/jobs/1", Some(json!({"salary": 1})))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_delete_job() {
    let app = TestApp::seeded();

    let response = app.request("DELETE", "/api/jobs/5", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Job deleted");
    assert_eq!(response.body["job"]["company"], "Linear");

    let fetched = app.request("GET", "/api/jobs/5", None).await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);

    let again = app.request("DELETE", "/api/jobs/5", None).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_job_not_found() {
    let app = TestApp::seeded();

    let response = app.request("DELETE", "/api/jobs/999", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Job not found");
}

#[tokio::test]
async fn test_ids_not_reused_after_delete() {
    let app = TestApp::seeded();

    app.request("DELETE", "/api/jobs/6", None).await;
    let created = app
        .request(
            "POST",
            "/api/jobs",
            Some(json!({"title": "A", "company": "B", "description": "C"})),
        )
        .await;

    assert_eq!(created.body["id"], 7);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::seeded();

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["jobs"], 6);
    assert!(response.body["uptimeSeconds"].is_u64());
}

#[tokio::test]
async fn test_unknown_path_serves_front_end() {
    let app = TestApp::seeded();

    let response = app.request("GET", "/some/client/route", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("JobSpark"));
}
