pub mod category;
pub mod question;
pub mod record;

pub use category::{Category, CATEGORIES};
pub use question::{AnswerBundle, DocumentationLink, Question};
pub use record::{AnswerRecord, QuestionCategory, QuestionRecord};
