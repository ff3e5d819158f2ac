use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Category;

/// A question as it enters the pipeline. Lives for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub user_id: Option<String>,
}

impl Question {
    pub fn new(text: impl Into<String>, user_id: Option<String>) -> Self {
        Self {
            text: text.into(),
            user_id,
        }
    }
}

/// A reference document recommended for a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DocumentationLink {
    #[schema(example = "Networking guide")]
    pub title: String,
    #[schema(example = "https://docs.example.com/networking-guide")]
    pub url: String,
}

impl DocumentationLink {
    pub fn new(title: &str, url: &str) -> Self {
        Self {
            title: title.to_string(),
            url: url.to_string(),
        }
    }
}

/// Output of the pipeline for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerBundle {
    pub category: Category,
    pub answer_text: String,
    pub documentation_links: Vec<DocumentationLink>,
    pub troubleshooting_steps: Vec<String>,
}
