//! HTTP handlers for qa-service.

pub mod process;
pub mod questions;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;

use crate::dtos::{EndpointLinks, HealthResponse, ServiceInfo};
use crate::services::get_metrics;
use crate::AppState;

pub const SERVICE_DESCRIPTION: &str = "An AI-powered Q&A portal that helps users find accurate answers to technical questions by leveraging a curated knowledge base and machine learning models. The system can automatically categorize questions, provide relevant documentation links, and offer step-by-step troubleshooting guidance.";

/// API information and links
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service information", body = ServiceInfo)
    ),
    tag = "Observability"
)]
pub async fn root(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: state.config.service_name.clone(),
        description: SERVICE_DESCRIPTION.to_string(),
        version: state.config.service_version.clone(),
        endpoints: EndpointLinks {
            docs: "/docs".to_string(),
            health: "/health".to_string(),
            process: "/process".to_string(),
            questions: "/questions".to_string(),
        },
        status: "running".to_string(),
    })
}

/// Application health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Observability"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    tracing::info!("Health check endpoint called");
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.config.service_version.clone(),
        healthy: true,
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Readiness of the classification model
#[utoipa::path(
    get,
    path = "/ready",
    responses(
        (status = 200, description = "Model loaded"),
        (status = 503, description = "Model not loaded")
    ),
    tag = "Observability"
)]
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let classifier = state.processor.classifier();
    if classifier.is_ready() {
        (StatusCode::OK, Json(json!({ "status": "ready" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "not_ready", "model": classifier.model_name() })),
        )
    }
}

/// Prometheus metrics endpoint.
pub async fn metrics() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}
