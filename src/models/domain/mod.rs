pub mod education;
pub mod explanation;
pub mod quiz;
pub mod quiz_question;
pub mod quiz_result;
pub use education::{Difficulty, EducationLevel, ExplanationStyle};
pub use explanation::{Explanation, ExplanationItem, ExplanationSection};
pub use quiz::Quiz;
pub use quiz_question::QuizQuestion;
pub use quiz_result::{QuestionResult, QuizResult};

use async_graphql::Enum;
use serde::{Deserialize, Serialize};

/// Where delivered content came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, Enum)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    Generated,
    Fallback,
}
