use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{AnswerBundle, Category, DocumentationLink};

/// OpenAPI schema for the body `service_core::error::AppError` writes.
/// The tests below keep the two shapes identical.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ErrorResponse {
    #[schema(example = "Question contains prohibited content")]
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "0.1.0")]
    pub version: String,
    pub healthy: bool,
    #[schema(example = "2026-01-01T12:00:00+00:00")]
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EndpointLinks {
    pub docs: String,
    pub health: String,
    pub process: String,
    pub questions: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    #[schema(example = "smart-qa-portal")]
    pub name: String,
    pub description: String,
    pub version: String,
    pub endpoints: EndpointLinks,
    #[schema(example = "running")]
    pub status: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct QuestionRequest {
    #[schema(example = "how do I fix my network?")]
    pub question: String,
    #[schema(example = "user-42")]
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnswerResponse {
    pub category: Category,
    #[schema(example = "For networking issues, check router settings and firewall rules.")]
    pub answer: String,
    pub documentation_links: Vec<DocumentationLink>,
    pub troubleshooting_steps: Vec<String>,
}

impl From<AnswerBundle> for AnswerResponse {
    fn from(bundle: AnswerBundle) -> Self {
        Self {
            category: bundle.category,
            answer: bundle.answer_text,
            documentation_links: bundle.documentation_links,
            troubleshooting_steps: bundle.troubleshooting_steps,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ProcessRequest {
    #[validate(length(max = 10000, message = "Input text must be at most 10000 characters"))]
    #[schema(example = "test input", min_length = 1, max_length = 10000)]
    pub input_text: String,
    #[schema(value_type = Option<Object>)]
    pub options: Option<Map<String, Value>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProcessMetadata {
    pub input_length: usize,
    pub output_length: usize,
    pub processed_at: DateTime<Utc>,
    #[schema(value_type = Option<Object>)]
    pub options: Option<Map<String, Value>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProcessResponse {
    #[schema(example = "Processed 10 characters: TEST INPUT...")]
    pub output: String,
    #[schema(example = "success")]
    pub status: String,
    pub metadata: ProcessMetadata,
}
