//! Integration tests driving the demo router end to end
//!
//! Full flow: configure registry → axum router → wrapped JSON responses.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use serde_json::{json, Value};
use std::sync::Mutex;
use tower::ServiceExt;
use wrapkit::cli::build_router;
use wrapkit::envelope::JsonApiFormatter;
use wrapkit::registry::{configure, Options};

// The registry is process-wide; serialize tests that configure it
static CONFIG_LOCK: Mutex<()> = Mutex::new(());

fn configure_default() {
    configure(Options::new().use_default_formatter().use_pagination()).unwrap();
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(uri: &str) -> Response {
    build_router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

// ============================================================================
// Plain Wrapping
// ============================================================================

#[tokio::test]
async fn test_health_is_unwrapped() {
    let _guard = CONFIG_LOCK.lock().unwrap();
    configure_default();

    let response = get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["name"], json!("wrapkit"));
}

#[tokio::test]
async fn test_get_user_wraps_payload() {
    let _guard = CONFIG_LOCK.lock().unwrap();
    configure_default();

    let response = get("/api/users/1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["id"], json!(1));
    assert_eq!(body["meta"], Value::Null);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_get_missing_user_is_404() {
    let _guard = CONFIG_LOCK.lock().unwrap();
    configure_default();

    let response = get("/api/users/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], json!("User not found"));
}

#[tokio::test]
async fn test_create_user_sets_location() {
    let _guard = CONFIG_LOCK.lock().unwrap();
    configure_default();

    let request = Request::builder()
        .method("POST")
        .uri("/api/users")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({"name": "Linus", "email": "linus@example.com"}).to_string(),
        ))
        .unwrap();
    let response = build_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "/api/users/43"
    );

    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["name"], json!("Linus"));
}

#[tokio::test]
async fn test_delete_user_is_204() {
    let _guard = CONFIG_LOCK.lock().unwrap();
    configure_default();

    let request = Request::builder()
        .method("DELETE")
        .uri("/api/users/1")
        .body(Body::empty())
        .unwrap();
    let response = build_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_stats_carries_custom_meta() {
    let _guard = CONFIG_LOCK.lock().unwrap();
    configure_default();

    let response = get("/api/users/stats").await;
    let body = body_json(response).await;

    assert_eq!(body["data"]["total"], json!(42));
    assert_eq!(body["meta"]["generatedBy"], json!("wrapkit"));
}

// ============================================================================
// Pagination
// ============================================================================

#[tokio::test]
async fn test_list_users_default_paging() {
    let _guard = CONFIG_LOCK.lock().unwrap();
    configure_default();

    let response = get("/api/users").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 20);

    let pagination = &body["meta"]["pagination"];
    assert_eq!(pagination["page"], json!(1));
    assert_eq!(pagination["pageSize"], json!(20));
    assert_eq!(pagination["totalCount"], json!(42));
    assert_eq!(pagination["totalPages"], json!(3));
    assert_eq!(pagination["hasNextPage"], json!(true));
    assert_eq!(pagination["hasPreviousPage"], json!(false));
}

#[tokio::test]
async fn test_list_users_second_page_with_camel_case_param() {
    let _guard = CONFIG_LOCK.lock().unwrap();
    configure_default();

    let response = get("/api/users?page=2&pageSize=10").await;
    let body = body_json(response).await;

    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 10);
    assert_eq!(items[0]["id"], json!(11));
    assert_eq!(items[9]["id"], json!(20));

    let pagination = &body["meta"]["pagination"];
    assert_eq!(pagination["totalPages"], json!(5));
    assert_eq!(pagination["hasNextPage"], json!(true));
    assert_eq!(pagination["hasPreviousPage"], json!(true));
}

#[tokio::test]
async fn test_list_users_clamps_wild_input() {
    let _guard = CONFIG_LOCK.lock().unwrap();
    configure_default();

    let response = get("/api/users?page=-5&page_size=999").await;
    let body = body_json(response).await;

    // page clamped to 1, size clamped to 100: whole store on one page
    assert_eq!(body["data"].as_array().unwrap().len(), 42);

    let pagination = &body["meta"]["pagination"];
    assert_eq!(pagination["page"], json!(1));
    assert_eq!(pagination["pageSize"], json!(100));
    assert_eq!(pagination["totalPages"], json!(1));
    assert_eq!(pagination["hasNextPage"], json!(false));
}

#[tokio::test]
async fn test_list_users_past_the_end() {
    let _guard = CONFIG_LOCK.lock().unwrap();
    configure_default();

    let response = get("/api/users?page=9&page_size=10").await;
    let body = body_json(response).await;

    assert_eq!(body["data"], json!([]));
    assert_eq!(body["meta"]["pagination"]["totalCount"], json!(42));
    assert_eq!(body["meta"]["pagination"]["hasNextPage"], json!(false));
    assert_eq!(body["meta"]["pagination"]["hasPreviousPage"], json!(true));
}

// ============================================================================
// Formatter Swapping
// ============================================================================

#[tokio::test]
async fn test_json_api_formatter_without_handler_changes() {
    let _guard = CONFIG_LOCK.lock().unwrap();
    configure(
        Options::new()
            .use_formatter(JsonApiFormatter::new("/api/users"))
            .use_pagination(),
    )
    .unwrap();

    let response = get("/api/users/1").await;
    let body = body_json(response).await;

    assert_eq!(body["jsonapi"]["version"], json!("1.0"));
    assert_eq!(body["data"]["id"], json!(1));
    assert_eq!(body["links"]["self"], json!("/api/users"));

    // Restore the default config for any test that follows
    configure_default();
}

#[tokio::test]
async fn test_unconfigured_handler_surfaces_500() {
    let _guard = CONFIG_LOCK.lock().unwrap();
    wrapkit::registry::reset();

    let response = get("/api/users/1").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["code"], json!("NOT_CONFIGURED"));

    configure_default();
}
