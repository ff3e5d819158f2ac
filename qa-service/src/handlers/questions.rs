use axum::{extract::State, Json};
use service_core::error::AppError;

use crate::dtos::{AnswerResponse, ErrorResponse, QuestionRequest};
use crate::models::Question;
use crate::utils::ValidatedJson;
use crate::AppState;

/// Categorize a question and return curated guidance
#[utoipa::path(
    post,
    path = "/questions",
    request_body = QuestionRequest,
    responses(
        (status = 200, description = "Question answered", body = AnswerResponse),
        (status = 400, description = "Empty, prohibited or out-of-bounds question", body = ErrorResponse),
        (status = 422, description = "Malformed request body", body = ErrorResponse),
        (status = 503, description = "Classification model not loaded", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Questions"
)]
pub async fn ask_question(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<QuestionRequest>,
) -> Result<Json<AnswerResponse>, AppError> {
    let question = Question::new(req.question, req.user_id);
    let bundle = state.processor.assemble(&question)?;

    tracing::info!(category = %bundle.category, "Question answered");

    Ok(Json(bundle.into()))
}
