use crate::config::ValidationConfig;
use crate::services::QaError;

/// Question checks with two severities: hard rejections (`validate`,
/// `check_prohibited`, `check_length`) and the advisory `check_technical`.
#[derive(Debug, Clone)]
pub struct QuestionValidator {
    prohibited_words: Vec<String>,
    technical_keywords: Vec<String>,
    min_length: usize,
    max_length: usize,
}

impl QuestionValidator {
    pub fn new(config: &ValidationConfig) -> Self {
        Self {
            prohibited_words: lowercase_all(&config.prohibited_words),
            technical_keywords: lowercase_all(&config.technical_keywords),
            min_length: config.min_question_length,
            max_length: config.max_question_length,
        }
    }

    /// Reject empty or prohibited text; warn when it does not look technical.
    pub fn validate<'a>(&self, text: &'a str) -> Result<&'a str, QaError> {
        if text.trim().is_empty() {
            tracing::warn!("Empty question received");
            return Err(QaError::EmptyInput);
        }

        self.check_prohibited(text)?;
        self.check_technical(text);

        Ok(text)
    }

    pub fn check_prohibited(&self, text: &str) -> Result<(), QaError> {
        let lower = text.to_lowercase();
        match self
            .prohibited_words
            .iter()
            .find(|word| lower.contains(word.as_str()))
        {
            Some(word) => {
                tracing::warn!(word = %word, "Question contains prohibited content");
                Err(QaError::ProhibitedContent)
            }
            None => Ok(()),
        }
    }

    /// Advisory only. Returns whether any technical keyword occurs in the text.
    pub fn check_technical(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        let technical = self
            .technical_keywords
            .iter()
            .any(|keyword| lower.contains(keyword.as_str()));

        if !technical {
            tracing::warn!(question = %text, "Question may not be technical enough");
        }

        technical
    }

    /// Lower bound applies to the trimmed text, upper bound to the full text.
    pub fn check_length(&self, text: &str) -> Result<(), QaError> {
        let trimmed = text.trim().chars().count();
        if trimmed < self.min_length {
            tracing::warn!(length = trimmed, "Question too short for meaningful analysis");
            return Err(QaError::TooShort {
                min: self.min_length,
                actual: trimmed,
            });
        }

        let total = text.chars().count();
        if total > self.max_length {
            tracing::warn!(length = total, max = self.max_length, "Question exceeds maximum length");
            return Err(QaError::TooLong {
                max: self.max_length,
                actual: total,
            });
        }

        Ok(())
    }
}

impl Default for QuestionValidator {
    fn default() -> Self {
        Self::new(&ValidationConfig::default())
    }
}

fn lowercase_all(words: &[String]) -> Vec<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}
