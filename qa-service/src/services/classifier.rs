//! Question categorization.
//!
//! [`Classifier`] is the seam for a categorization backend. [`ModelService`]
//! is the placeholder backend: it picks `CATEGORIES[len % 4]` and only answers
//! once its model has been marked loaded.

use std::sync::atomic::{AtomicU8, Ordering};
use thiserror::Error;

use crate::models::{Category, CATEGORIES};

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Model {0} not available")]
    NotReady(String),

    #[error("Question cannot be empty")]
    EmptyInput,

    #[error("Classifier backend error: {0}")]
    Backend(String),
}

/// Whether the classification backend can serve requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    NotLoaded,
    Ready,
}

impl Readiness {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => Readiness::Ready,
            _ => Readiness::NotLoaded,
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            Readiness::NotLoaded => 0,
            Readiness::Ready => 1,
        }
    }
}

pub trait Classifier: Send + Sync {
    /// Model identifier, used in logs and unavailability messages.
    fn model_name(&self) -> &str;

    fn is_ready(&self) -> bool;

    fn classify(&self, text: &str) -> Result<Category, ClassifierError>;
}

/// Placeholder categorizer keyed on question length.
pub struct ModelService {
    model_name: String,
    state: AtomicU8,
}

impl ModelService {
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            state: AtomicU8::new(Readiness::NotLoaded.as_u8()),
        }
    }

    /// There is no real artifact to load, so this only flips the readiness state.
    pub fn load_model(&self) {
        self.state.store(Readiness::Ready.as_u8(), Ordering::Release);
        tracing::info!(model = %self.model_name, "Model loaded successfully");
    }

    pub fn unload(&self) {
        self.state.store(Readiness::NotLoaded.as_u8(), Ordering::Release);
        tracing::info!(model = %self.model_name, "Model unloaded");
    }

    pub fn readiness(&self) -> Readiness {
        Readiness::from_u8(self.state.load(Ordering::Acquire))
    }
}

impl Classifier for ModelService {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn is_ready(&self) -> bool {
        self.readiness() == Readiness::Ready
    }

    fn classify(&self, text: &str) -> Result<Category, ClassifierError> {
        if !self.is_ready() {
            return Err(ClassifierError::NotReady(self.model_name.clone()));
        }

        if text.trim().is_empty() {
            return Err(ClassifierError::EmptyInput);
        }

        let length = text.chars().count();
        Ok(CATEGORIES[length % CATEGORIES.len()])
    }
}
