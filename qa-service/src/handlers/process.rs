use axum::Json;
use chrono::Utc;
use service_core::error::AppError;

use crate::dtos::{ErrorResponse, ProcessMetadata, ProcessRequest, ProcessResponse};
use crate::utils::ValidatedJson;

const PREVIEW_CHARS: usize = 50;

/// Uppercase and summarize the input text
///
/// Generic text transform. It does not involve question classification.
#[utoipa::path(
    post,
    path = "/process",
    request_body = ProcessRequest,
    responses(
        (status = 200, description = "Input processed", body = ProcessResponse),
        (status = 400, description = "Empty input", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Processing"
)]
pub async fn process_data(
    ValidatedJson(req): ValidatedJson<ProcessRequest>,
) -> Result<Json<ProcessResponse>, AppError> {
    if req.input_text.trim().is_empty() {
        tracing::warn!("Empty input received");
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Input text cannot be empty"
        )));
    }

    let input_length = req.input_text.chars().count();
    tracing::info!(input_length, "Processing input");

    let output = summarize(&req.input_text, input_length);
    let output_length = output.chars().count();

    tracing::info!("Processing completed successfully");

    Ok(Json(ProcessResponse {
        output,
        status: "success".to_string(),
        metadata: ProcessMetadata {
            input_length,
            output_length,
            processed_at: Utc::now(),
            options: req.options,
        },
    }))
}

fn summarize(input: &str, input_length: usize) -> String {
    let preview: String = input.to_uppercase().chars().take(PREVIEW_CHARS).collect();
    format!("Processed {} characters: {}...", input_length, preview)
}
