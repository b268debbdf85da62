//! Router checks that never reach the backend.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use scribe_client::{BackendClient, BackendConfig};
use scribe_web::{create_router, AppState};
use serde_json::Value;
use tower::ServiceExt;

fn app() -> Router {
    // Nothing listens here; none of these requests call the backend.
    let config = BackendConfig::new("http://127.0.0.1:9").unwrap();
    let state = AppState::new(BackendClient::new(config).unwrap()).unwrap();
    create_router(state)
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

#[tokio::test]
async fn test_home_page_renders() {
    let response = app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(html.contains(r#"href="/research""#));
    assert!(html.contains("127.0.0.1:9"));
}

#[tokio::test]
async fn test_research_page_has_defaults() {
    let response = app()
        .oneshot(Request::get("/research").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(html.contains(r#"value="AI for school students""#));
    assert!(html.contains(r#"value="Kids aged 10-14""#));
    assert!(html.contains("Brand Authority"));
    assert!(html.contains(r#"<option value="1" selected>"#));
    assert!(html.contains(r#"<option value="5">"#));
    // Research waits for a submission; the dead backend is never called.
    assert!(!html.contains("banner error"));
}

#[tokio::test]
async fn test_non_multipart_research_is_500() {
    let response = app()
        .oneshot(
            Request::post("/api/research-agent")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["error"], "Failed to run research agent");
    assert!(body["details"].as_str().unwrap().contains("multipart"));
}

#[tokio::test]
async fn test_invalid_branding_json_is_500() {
    let response = app()
        .oneshot(
            Request::post("/api/branding-agent")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["error"], "Failed to run branding agent");
}

#[tokio::test]
async fn test_empty_download_rejected() {
    let response = app()
        .oneshot(
            Request::post("/download")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("content=&kind=article"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let response = app()
        .oneshot(Request::get("/api/unknown").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
