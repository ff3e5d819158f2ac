mod common;

use common::TestApp;

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn().await;

    let response = app.get("/health").await;

    assert!(response.status().is_success());
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.contains("application/json"));

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["healthy"], true);
    assert_eq!(body["version"], "0.1.0");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn health_check_ignores_model_readiness() {
    let app = TestApp::spawn_unready().await;

    let response = app.get("/health").await;

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn readiness_follows_model_state() {
    let app = TestApp::spawn_unready().await;

    assert_eq!(app.get("/ready").await.status().as_u16(), 503);

    app.model().load_model();
    let response = app.get("/ready").await;
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn root_lists_endpoints() {
    let app = TestApp::spawn().await;

    let response = app.get("/").await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["name"], "smart-qa-portal");
    assert_eq!(body["status"], "running");
    assert_eq!(body["endpoints"]["health"], "/health");
    assert_eq!(body["endpoints"]["questions"], "/questions");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = TestApp::spawn().await;

    let response = app.get("/.well-known/openapi.json").await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["paths"]["/questions"].is_object());
    assert!(body["paths"]["/process"].is_object());
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/health", app.address))
        .header("x-request-id", "trace-me")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.headers()["x-request-id"], "trace-me");
}

#[tokio::test]
async fn metrics_endpoint_responds() {
    let app = TestApp::spawn().await;

    let response = app.get("/metrics").await;

    assert_eq!(response.status().as_u16(), 200);
}
