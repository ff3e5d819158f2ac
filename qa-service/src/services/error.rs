use service_core::error::AppError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QaError {
    #[error("Question cannot be empty")]
    EmptyInput,

    #[error("Question contains prohibited content")]
    ProhibitedContent,

    #[error("Question too short for meaningful analysis: {actual} characters (minimum {min})")]
    TooShort { min: usize, actual: usize },

    #[error("Question exceeds maximum length: {actual} characters (maximum {max})")]
    TooLong { max: usize, actual: usize },

    #[error("Model {0} not available")]
    ServiceUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl QaError {
    /// True for the kinds raised by input validation.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            QaError::EmptyInput
                | QaError::ProhibitedContent
                | QaError::TooShort { .. }
                | QaError::TooLong { .. }
        )
    }
}

impl From<QaError> for AppError {
    fn from(err: QaError) -> Self {
        match err {
            QaError::ServiceUnavailable(model) => {
                AppError::ServiceUnavailable(format!("Model {} not available", model))
            }
            QaError::Internal(e) => AppError::InternalError(e),
            validation => AppError::BadRequest(anyhow::anyhow!(validation.to_string())),
        }
    }
}
