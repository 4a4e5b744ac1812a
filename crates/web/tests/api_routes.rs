//! Router tests.
//!
//! The application runs against a pool that never connects, so these cover
//! the requests that are answered before the store is touched: input
//! validation, pagination checks, API key protection and the OpenAPI document.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use courseprofs_web::{app, middleware::auth::ApiKeys};
use serde_json::{Value, json};
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use storage::Database;
use tower::ServiceExt;

fn test_app() -> Router {
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(50))
        .connect_lazy("postgres://nobody@127.0.0.1:1/none")
        .unwrap();

    app(
        Database::from_pool(pool),
        ApiKeys::from_comma_separated("admin-key"),
    )
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = test_app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_add_review_lists_invalid_fields() {
    let (status, body) = send(json_request(
        "POST",
        "/review/Add",
        json!({
            "AppsId": 1,
            "Token": "",
            "CourseId": 1,
            "ProfessorId": 1,
            "Rating": 7,
            "UsersSubjectScore": 5.0,
            "Comments": null
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");

    let details = body["details"].as_array().unwrap();
    assert!(details.iter().any(|d| d.as_str().unwrap().starts_with("rating")));
    assert!(details.iter().any(|d| d.as_str().unwrap().starts_with("token")));
}

#[tokio::test]
async fn test_add_review_reports_every_missing_field() {
    let (status, body) = send(json_request(
        "POST",
        "/review/Add",
        json!({ "AppsId": 1, "Token": "t", "Rating": 3 }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");

    let details: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d.as_str().unwrap())
        .collect();
    for field in ["course_id", "professor_id", "users_subject_score"] {
        assert!(
            details.iter().any(|d| d.starts_with(field)),
            "{field} missing from {details:?}"
        );
    }
}

#[tokio::test]
async fn test_add_review_malformed_json_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/review/Add")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"AppsId\": "))
        .unwrap();

    let (status, _) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_professor_requires_name() {
    let (status, body) = send(json_request(
        "POST",
        "/api/professor",
        json!({ "FullName": "", "Mail": null, "Phone": null, "Office": null, "EOffice": null }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
}

#[tokio::test]
async fn test_create_course_rejects_unknown_type() {
    let (status, _) = send(json_request(
        "POST",
        "/api/course",
        json!({ "Name": "Compilers", "Type": "seminar" }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_page_zero_is_bad_request_on_every_list() {
    for uri in [
        "/api/professor?page=0",
        "/api/course?page=0",
        "/review/AllProfessorsReviews?page=0",
        "/review/ProfessorsReviews?profId=1&page=0",
        "/review/StudentsReviews?appsId=1&page=0",
    ] {
        let (status, body) = send(get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"], "page must be >= 1", "{uri}");
    }
}

#[tokio::test]
async fn test_items_per_page_is_bounded() {
    let (status, _) = send(get("/api/professor?itemsPerPage=0")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(get("/review/AllProfessorsReviews?itemsPerPage=500")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_professor_reviews_requires_numeric_id() {
    let (status, _) = send(get("/review/ProfessorsReviews?profId=abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_review_requires_id() {
    let request = Request::builder()
        .method("DELETE")
        .uri("/review/delete")
        .body(Body::empty())
        .unwrap();

    let (status, _) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_recompute_requires_api_key() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/admin/ratings/recompute")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");
}

#[tokio::test]
async fn test_recompute_rejects_wrong_api_key() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/admin/ratings/recompute")
        .header(header::AUTHORIZATION, "Bearer not-the-key")
        .body(Body::empty())
        .unwrap();

    let (status, _) = send(request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (status, body) = send(get("/api-docs/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/review/ProfessorsReviews"].is_object());
    assert!(body["paths"]["/api/professor"].is_object());
}
