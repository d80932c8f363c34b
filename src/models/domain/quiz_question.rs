use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

pub const ANSWER_COUNT: usize = 4;

/// A single multiple-choice question.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub answers: Vec<String>,
    pub correct_answer_index: u8,
    pub explanation: String,
}

impl QuizQuestion {
    pub fn correct_answer(&self) -> Option<&str> {
        self.answers
            .get(usize::from(self.correct_answer_index))
            .map(String::as_str)
    }

    pub fn mentions(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.question.to_lowercase().contains(&keyword)
            || self.explanation.to_lowercase().contains(&keyword)
    }
}
