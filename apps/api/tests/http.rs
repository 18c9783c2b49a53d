//! Integration tests driving the real router in-process.
//!
//! Each test gets a fresh in-memory record store and search index, so the
//! full dual-write path is exercised end to end without a network.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use vacation_api::{build_router, AppState};
use vacation_db::{Database, DbConfig};
use vacation_search::{SearchConfig, VacationSearchIndex};
use vacation_sync::SyncService;

async fn app() -> Router {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let index = VacationSearchIndex::open(SearchConfig::in_memory())
        .await
        .unwrap();
    let sync = Arc::new(SyncService::new(
        Arc::new(db.vacations()),
        Arc::new(index),
    ));
    build_router(AppState { sync })
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create(app: &Router, body: Value) -> Value {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/vacations", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    response_json(response).await
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_returns_201_with_location_and_assigned_id() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/vacations",
            json!({"startDate": "2026-08-01T00:00:00Z", "endDate": "2026-08-15T00:00:00Z"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/vacations/1"
    );

    let body = response_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["startDate"], "2026-08-01T00:00:00Z");
    assert_eq!(body["endDate"], "2026-08-15T00:00:00Z");
}

#[tokio::test]
async fn test_create_with_id_answers_400_idexists() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(json_request("POST", "/vacations", json!({"id": 7})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["entityName"], "vacation");
    assert_eq!(body["errorKey"], "idexists");
}

#[tokio::test]
async fn test_create_accepts_empty_body_fields() {
    let app = app().await;

    let created = create(&app, json!({})).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["startDate"], Value::Null);
    assert_eq!(created["endDate"], Value::Null);
}

// =============================================================================
// Read
// =============================================================================

#[tokio::test]
async fn test_created_record_is_retrievable_and_listed() {
    let app = app().await;

    create(&app, json!({"startDate": "2026-01-01T00:00:00Z"})).await;
    create(&app, json!({"startDate": "2026-02-01T00:00:00Z"})).await;

    let response = app.clone().oneshot(get_request("/vacations/2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["id"], 2);

    let response = app.clone().oneshot(get_request("/vacations")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let list = response_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_unknown_id_answers_404() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(get_request("/vacations/999"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_path_id_answers_400() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(get_request("/vacations/abc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Full update
// =============================================================================

#[tokio::test]
async fn test_put_replaces_the_record_wholesale() {
    let app = app().await;

    create(
        &app,
        json!({"startDate": "2026-01-01T00:00:00Z", "endDate": "2026-01-10T00:00:00Z"}),
    )
    .await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/vacations/1",
            json!({"id": 1, "startDate": "2027-06-01T00:00:00Z"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["startDate"], "2027-06-01T00:00:00Z");
    // Wholesale replacement: the absent endDate is cleared, not kept.
    assert_eq!(body["endDate"], Value::Null);
}

#[tokio::test]
async fn test_put_id_preconditions() {
    let app = app().await;
    create(&app, json!({})).await;

    // No body id.
    let response = app
        .clone()
        .oneshot(json_request("PUT", "/vacations/1", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response_json(response).await["errorKey"], "idnull");

    // Body id disagrees with path id.
    let response = app
        .clone()
        .oneshot(json_request("PUT", "/vacations/1", json!({"id": 2})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response_json(response).await["errorKey"], "idinvalid");

    // No stored record for the id.
    let response = app
        .clone()
        .oneshot(json_request("PUT", "/vacations/99", json!({"id": 99})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response_json(response).await["errorKey"], "idnotfound");
}

// =============================================================================
// Partial update
// =============================================================================

#[tokio::test]
async fn test_patch_merges_only_supplied_fields() {
    let app = app().await;

    create(
        &app,
        json!({"startDate": "2026-01-01T00:00:00Z", "endDate": "2026-01-10T00:00:00Z"}),
    )
    .await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            "/vacations/1",
            json!({"id": 1, "startDate": "2027-06-01T00:00:00Z"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["startDate"], "2027-06-01T00:00:00Z");
    // Merge patch: the absent endDate keeps its stored value.
    assert_eq!(body["endDate"], "2026-01-10T00:00:00Z");
}

#[tokio::test]
async fn test_patch_id_preconditions() {
    let app = app().await;
    create(&app, json!({})).await;

    let response = app
        .clone()
        .oneshot(json_request("PATCH", "/vacations/1", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response_json(response).await["errorKey"], "idnull");

    let response = app
        .clone()
        .oneshot(json_request("PATCH", "/vacations/1", json!({"id": 5})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response_json(response).await["errorKey"], "idinvalid");

    let response = app
        .clone()
        .oneshot(json_request("PATCH", "/vacations/99", json!({"id": 99})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response_json(response).await["errorKey"], "idnotfound");
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_answers_204_and_removes_the_record() {
    let app = app().await;
    create(&app, json!({})).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/vacations/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.clone().oneshot(get_request("/vacations/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_of_absent_id_still_answers_204() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/vacations/12345")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_created_record_is_searchable() {
    let app = app().await;
    create(&app, json!({"startDate": "2026-08-01T00:00:00Z"})).await;

    let response = app
        .clone()
        .oneshot(get_request("/_search/vacations?query=2026"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let hits = response_json(response).await;
    assert_eq!(hits.as_array().unwrap().len(), 1);
    assert_eq!(hits[0]["id"], 1);
}

#[tokio::test]
async fn test_deleted_record_disappears_from_search() {
    let app = app().await;
    create(&app, json!({"startDate": "2026-08-01T00:00:00Z"})).await;

    app.clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/vacations/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(get_request("/_search/vacations?query=2026"))
        .await
        .unwrap();

    let hits = response_json(response).await;
    assert!(hits.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_updated_record_is_searchable_under_new_text() {
    let app = app().await;
    create(&app, json!({"startDate": "2026-08-01T00:00:00Z"})).await;

    app.clone()
        .oneshot(json_request(
            "PUT",
            "/vacations/1",
            json!({"id": 1, "startDate": "2031-01-01T00:00:00Z"}),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(get_request("/_search/vacations?query=2031"))
        .await
        .unwrap();
    assert_eq!(response_json(response).await.as_array().unwrap().len(), 1);

    let response = app
        .clone()
        .oneshot(get_request("/_search/vacations?query=2026"))
        .await
        .unwrap();
    assert!(response_json(response).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_search_query_returns_everything() {
    let app = app().await;
    create(&app, json!({})).await;
    create(&app, json!({})).await;

    let response = app
        .clone()
        .oneshot(get_request("/_search/vacations?query="))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await.as_array().unwrap().len(), 2);
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_answers_ok() {
    let app = app().await;

    let response = app.clone().oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"OK");
}
