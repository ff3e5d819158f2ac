use std::sync::Arc;

use crate::models::{AnswerBundle, Question};
use crate::services::{
    metrics, sanitize, Classifier, ClassifierError, KnowledgeBase, QaError, QuestionValidator,
};

/// Runs a question through sanitize, validate, classify and knowledge base
/// lookup. Holds only read-only state, so one instance serves all requests.
pub struct QuestionProcessor {
    validator: QuestionValidator,
    classifier: Arc<dyn Classifier>,
    knowledge_base: KnowledgeBase,
}

impl QuestionProcessor {
    pub fn new(
        validator: QuestionValidator,
        classifier: Arc<dyn Classifier>,
        knowledge_base: KnowledgeBase,
    ) -> Self {
        Self {
            validator,
            classifier,
            knowledge_base,
        }
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    /// Validation errors are returned as-is; anything else unexpected becomes
    /// [`QaError::Internal`] and its detail stays in the logs.
    pub fn assemble(&self, question: &Question) -> Result<AnswerBundle, QaError> {
        match self.run_pipeline(question) {
            Ok(bundle) => Ok(bundle),
            Err(err @ (QaError::ServiceUnavailable(_) | QaError::Internal(_))) => {
                tracing::error!(error = %err, user_id = ?question.user_id, "Question processing failed");
                Err(err)
            }
            Err(err) => {
                tracing::warn!(error = %err, user_id = ?question.user_id, "Question rejected");
                Err(err)
            }
        }
    }

    fn run_pipeline(&self, question: &Question) -> Result<AnswerBundle, QaError> {
        let text = sanitize(&question.text);

        self.validator.validate(&text)?;
        self.validator.check_length(&text)?;

        tracing::info!(
            user_id = ?question.user_id,
            "Processing question: {}...",
            text.chars().take(50).collect::<String>()
        );

        if !self.classifier.is_ready() {
            return Err(QaError::ServiceUnavailable(
                self.classifier.model_name().to_string(),
            ));
        }

        let category = self.classifier.classify(&text).map_err(|e| match e {
            ClassifierError::NotReady(model) => QaError::ServiceUnavailable(model),
            ClassifierError::EmptyInput => QaError::EmptyInput,
            ClassifierError::Backend(detail) => {
                QaError::Internal(anyhow::anyhow!("classification failed: {}", detail))
            }
        })?;

        metrics::record_question(category);

        Ok(AnswerBundle {
            category,
            answer_text: self.knowledge_base.answer_for(category).to_string(),
            documentation_links: self.knowledge_base.documentation_links_for(category).to_vec(),
            troubleshooting_steps: self
                .knowledge_base
                .troubleshooting_steps_for(category)
                .to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::services::knowledge_base::DEFAULT_ANSWER;
    use crate::services::ModelService;

    struct FailingClassifier;

    impl Classifier for FailingClassifier {
        fn model_name(&self) -> &str {
            "failing"
        }

        fn is_ready(&self) -> bool {
            true
        }

        fn classify(&self, _text: &str) -> Result<Category, ClassifierError> {
            Err(ClassifierError::Backend("tensor shape mismatch".to_string()))
        }
    }

    fn processor_with(model: Arc<ModelService>) -> QuestionProcessor {
        QuestionProcessor::new(QuestionValidator::default(), model, KnowledgeBase::standard())
    }

    fn ready_processor() -> QuestionProcessor {
        let model = Arc::new(ModelService::new("qa_categorizer_v1"));
        model.load_model();
        processor_with(model)
    }

    fn ask(text: &str) -> Question {
        Question::new(text, Some("user-1".to_string()))
    }

    #[test]
    fn test_networking_scenario() {
        let bundle = ready_processor()
            .assemble(&ask("how do I fix my network?"))
            .unwrap();

        assert_eq!(bundle.category, Category::Networking);
        assert_eq!(
            bundle.answer_text,
            "For networking issues, check router settings and firewall rules."
        );
        assert_eq!(bundle.documentation_links.len(), 2);
        assert!(bundle.documentation_links[0].url.ends_with("/networking-guide"));
        assert!(bundle.documentation_links[1].url.ends_with("/network-troubleshooting"));
        assert_eq!(bundle.troubleshooting_steps.len(), 3);
        assert_eq!(
            bundle.troubleshooting_steps[0],
            "Check physical connections and router LEDs"
        );
    }

    #[test]
    fn test_classifies_sanitized_text() {
        // 23 characters once the tags are gone: 23 % 4 = 3.
        let bundle = ready_processor()
            .assemble(&ask("<p>how do I fix my network</p>"))
            .unwrap();
        assert_eq!(bundle.category, Category::Virtualization);
    }

    #[test]
    fn test_assemble_is_idempotent() {
        let processor = ready_processor();
        let question = ask("why is my disk full");
        assert_eq!(
            processor.assemble(&question).unwrap(),
            processor.assemble(&question).unwrap()
        );
    }

    #[test]
    fn test_empty_input() {
        let processor = ready_processor();
        assert!(matches!(processor.assemble(&ask("")), Err(QaError::EmptyInput)));
        assert!(matches!(processor.assemble(&ask("   ")), Err(QaError::EmptyInput)));
        // Markup only sanitizes to nothing.
        assert!(matches!(processor.assemble(&ask("<b></b>")), Err(QaError::EmptyInput)));
    }

    #[test]
    fn test_prohibited_content() {
        let processor = ready_processor();
        assert!(matches!(
            processor.assemble(&ask("how do I install malware")),
            Err(QaError::ProhibitedContent)
        ));
    }

    #[test]
    fn test_length_gate_applies() {
        let processor = ready_processor();
        assert!(matches!(
            processor.assemble(&ask("hi")),
            Err(QaError::TooShort { .. })
        ));
        assert!(matches!(
            processor.assemble(&ask(&"how ".repeat(300))),
            Err(QaError::TooLong { .. })
        ));
    }

    #[test]
    fn test_unready_model_is_unavailable() {
        let model = Arc::new(ModelService::new("qa_categorizer_v1"));
        let processor = processor_with(model.clone());

        assert!(matches!(
            processor.assemble(&ask("how do I fix my network?")),
            Err(QaError::ServiceUnavailable(name)) if name == "qa_categorizer_v1"
        ));

        model.load_model();
        assert!(processor.assemble(&ask("how do I fix my network?")).is_ok());
    }

    #[test]
    fn test_validation_precedes_readiness() {
        let processor = processor_with(Arc::new(ModelService::new("qa_categorizer_v1")));
        assert!(matches!(processor.assemble(&ask("")), Err(QaError::EmptyInput)));
    }

    #[test]
    fn test_backend_failure_becomes_internal() {
        let processor = QuestionProcessor::new(
            QuestionValidator::default(),
            Arc::new(FailingClassifier),
            KnowledgeBase::standard(),
        );
        assert!(matches!(
            processor.assemble(&ask("how do I fix my network?")),
            Err(QaError::Internal(_))
        ));
    }

    #[test]
    fn test_missing_knowledge_entry_uses_defaults() {
        let model = Arc::new(ModelService::new("qa_categorizer_v1"));
        model.load_model();
        let processor =
            QuestionProcessor::new(QuestionValidator::default(), model, KnowledgeBase::default());

        let bundle = processor.assemble(&ask("how do I fix my network?")).unwrap();
        assert_eq!(bundle.category, Category::Networking);
        assert_eq!(bundle.answer_text, DEFAULT_ANSWER);
        assert!(bundle.documentation_links.is_empty());
        assert!(bundle.troubleshooting_steps.is_empty());
    }
}
