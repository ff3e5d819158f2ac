pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
pub mod utils;

use axum::{
    middleware::from_fn,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics::metrics_middleware,
    tracing::{request_id_middleware, request_logging_middleware},
};
use std::any::Any;
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::QaConfig;
use crate::services::QuestionProcessor;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Smart Qa Portal",
        description = "Categorizes technical questions and returns curated answers, documentation links and troubleshooting steps."
    ),
    paths(
        handlers::root,
        handlers::health_check,
        handlers::readiness_check,
        handlers::questions::ask_question,
        handlers::process::process_data,
    ),
    components(
        schemas(
            dtos::ErrorResponse,
            dtos::HealthResponse,
            dtos::ServiceInfo,
            dtos::EndpointLinks,
            dtos::QuestionRequest,
            dtos::AnswerResponse,
            dtos::ProcessRequest,
            dtos::ProcessResponse,
            dtos::ProcessMetadata,
            models::Category,
            models::DocumentationLink,
        )
    ),
    tags(
        (name = "Questions", description = "Question categorization and guidance"),
        (name = "Processing", description = "Generic text processing"),
        (name = "Observability", description = "Service health and monitoring"),
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub config: QaConfig,
    pub processor: Arc<QuestionProcessor>,
}

pub fn build_router(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics))
        .route("/questions", post(handlers::questions::ask_question))
        .route("/process", post(handlers::process::process_data))
        .route_layer(from_fn(metrics_middleware));

    if state.config.swagger.enabled {
        app = app.merge(SwaggerUi::new("/docs").url("/.well-known/openapi.json", ApiDoc::openapi()));
    } else {
        // Without the UI the document is still served for programmatic access
        app = app.route(
            "/.well-known/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        );
    }

    app.with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(from_fn(request_logging_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
}

/// Turn a handler panic into the generic 500 body.
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!(panic = %message, "Request handler panicked");
    AppError::InternalError(anyhow::anyhow!("handler panicked: {}", message)).into_response()
}
