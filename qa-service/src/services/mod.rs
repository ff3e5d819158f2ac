pub mod assembler;
pub mod classifier;
pub mod error;
pub mod knowledge_base;
pub mod metrics;
pub mod sanitizer;
pub mod validator;

pub use assembler::QuestionProcessor;
pub use classifier::{Classifier, ClassifierError, ModelService, Readiness};
pub use error::QaError;
pub use knowledge_base::{KnowledgeBase, KnowledgeEntry};
pub use metrics::{get_metrics, init_metrics};
pub use sanitizer::sanitize;
pub use validator::QuestionValidator;
