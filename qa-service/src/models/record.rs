//! Question and answer records for a question store.
//!
//! `QuestionCategory` is a filing label for stored questions. It is unrelated to
//! the classifier's [`Category`](super::Category) and the two are not converted
//! into each other.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionCategory {
    Technical,
    General,
    Troubleshooting,
    Other,
}

impl QuestionCategory {
    /// Parse an exact category name, falling back to `Other` for anything unknown.
    pub fn parse_or_other(name: &str) -> Self {
        match name {
            "Technical" => QuestionCategory::Technical,
            "General" => QuestionCategory::General,
            "Troubleshooting" => QuestionCategory::Troubleshooting,
            "Other" => QuestionCategory::Other,
            _ => {
                tracing::warn!(category = %name, "Invalid category, defaulting to 'Other'");
                QuestionCategory::Other
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionCategory::Technical => "Technical",
            QuestionCategory::General => "General",
            QuestionCategory::Troubleshooting => "Troubleshooting",
            QuestionCategory::Other => "Other",
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: Uuid,
    pub text: String,
    pub category: QuestionCategory,
    pub created_at: DateTime<Utc>,
}

impl QuestionRecord {
    pub fn new(text: String, category: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            category: QuestionCategory::parse_or_other(category),
            created_at: Utc::now(),
        }
    }
}

/// Stored answer with the confidence of its source.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnswerRecord {
    #[validate(length(min = 1, message = "Answer text is required"))]
    pub answer_text: String,
    pub source: String,
    #[validate(range(min = 0.0, max = 1.0, message = "Confidence score must be between 0 and 1"))]
    pub confidence_score: f64,
}
